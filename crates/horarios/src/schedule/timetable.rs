//! Static time-table data for SIGAA-style schedule codes.
//!
//! Maps day-code digits to weekday names and (shift, slot index) pairs to
//! clock start times. This is configuration, not computation: the tables
//! below are the institutional timetable verbatim.

use chrono::NaiveTime;

/// A daily teaching period. Each shift has its own fixed, ordered list of
/// slot start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Morning,
    Afternoon,
    Night,
}

impl Shift {
    /// Parses a shift from its code letter (`M`/`T`/`N`).
    pub fn from_code(c: char) -> Option<Shift> {
        match c {
            'M' => Some(Shift::Morning),
            'T' => Some(Shift::Afternoon),
            'N' => Some(Shift::Night),
            _ => None,
        }
    }

    /// The ordered slot start times for this shift, as (hour, minute) pairs.
    /// Morning and Afternoon run six slots, Night runs four.
    fn slot_table(self) -> &'static [(u32, u32)] {
        match self {
            Shift::Morning => &[
                (7, 0),
                (7, 55),
                (8, 50),
                (9, 45),
                (10, 40),
                (11, 35),
            ],
            Shift::Afternoon => &[
                (13, 0),
                (13, 55),
                (14, 50),
                (15, 45),
                (16, 40),
                (17, 35),
            ],
            Shift::Night => &[(18, 30), (19, 25), (20, 20), (21, 15)],
        }
    }
}

/// Returns the weekday name for a day-code digit (`2` = Monday through
/// `7` = Saturday), or `None` for any other character.
pub fn day_name(code: char) -> Option<&'static str> {
    match code {
        '2' => Some("Monday"),
        '3' => Some("Tuesday"),
        '4' => Some("Wednesday"),
        '5' => Some("Thursday"),
        '6' => Some("Friday"),
        '7' => Some("Saturday"),
        _ => None,
    }
}

/// Returns the start time of a slot within a shift, or `None` when the slot
/// digit is not a valid 1-based index into the shift's table.
pub fn slot_start(shift: Shift, slot: char) -> Option<NaiveTime> {
    let index = slot.to_digit(10)?.checked_sub(1)? as usize;
    let (h, m) = *shift.slot_table().get(index)?;
    NaiveTime::from_hms_opt(h, m, 0)
}

/// Formats a slot time the way the API and occupancy keys expect it.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
