//! Schedule-code decoding.
//!
//! SIGAA-style schedule codes pack one or more (days, shift, slots) patterns
//! into a compact string: `35M12` means days 3 and 5 (Tuesday and Thursday),
//! Morning shift, slots 1 and 2. A code may carry several such groups
//! (`2M34 46T12`); every group describes an independent day/time pattern for
//! the same section.
//!
//! Both entry points are pure and total: malformed input degrades to sentinel
//! output instead of failing, since upstream scheduling data is imperfect.

pub mod timetable;

use std::sync::LazyLock;

use chrono::Duration;
use regex::Regex;

use self::timetable::{day_name, format_time, slot_start, Shift};

/// Rendered when a code contains no recognizable schedule group at all.
pub const INVALID_FORMAT: &str = "Invalid format";

/// Rendered in place of a start or end time whose slot digit has no entry in
/// the time table.
const TIME_NOT_AVAILABLE: &str = "N/A";

/// Every class block lasts 50 minutes; the end of a block is the start of its
/// last slot plus this duration.
const BLOCK_MINUTES: i64 = 50;

/// One `<days><shift><slots>` group: a run of day digits, a shift letter,
/// a run of slot digits.
static GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)([MTN])(\d+)").unwrap());

/// A single matched group, still in raw digit form.
struct ScheduleGroup<'a> {
    days: &'a str,
    shift: Shift,
    slots: &'a str,
}

/// Extracts every schedule group from a raw code, in input order.
fn scan_groups(code: &str) -> Vec<ScheduleGroup<'_>> {
    GROUP_RE
        .captures_iter(code)
        .filter_map(|caps| {
            let shift_char = caps.get(2)?.as_str().chars().next()?;
            Some(ScheduleGroup {
                days: caps.get(1)?.as_str(),
                shift: Shift::from_code(shift_char)?,
                slots: caps.get(3)?.as_str(),
            })
        })
        .collect()
}

/// Looks up a slot's start time and renders it, falling back to the
/// not-available sentinel for slots outside the shift's table.
fn render_slot_start(shift: Shift, slot: char) -> String {
    slot_start(shift, slot)
        .map(format_time)
        .unwrap_or_else(|| TIME_NOT_AVAILABLE.to_string())
}

/// Translates a schedule code into a readable description, one segment per
/// group, e.g. `35M12` becomes `"Tuesday and Thursday from 07:00 to 08:45"`.
///
/// The block end is the start time of the group's LAST slot plus 50 minutes.
/// That is the source data's own convention (not the slot's end time); it is
/// preserved here as-is. Unknown day digits render as `?` and unknown slot
/// digits as `N/A`; a code with no group at all yields [`INVALID_FORMAT`].
pub fn describe(code: &str) -> String {
    let groups = scan_groups(code);
    if groups.is_empty() {
        return INVALID_FORMAT.to_string();
    }

    let segments: Vec<String> = groups
        .iter()
        .map(|group| {
            let days = group
                .days
                .chars()
                .map(|d| day_name(d).unwrap_or("?"))
                .collect::<Vec<_>>()
                .join(" and ");

            // First slot opens the block, last slot closes it.
            let first = group.slots.chars().next();
            let last = group.slots.chars().next_back();

            let start = first
                .map(|s| render_slot_start(group.shift, s))
                .unwrap_or_else(|| TIME_NOT_AVAILABLE.to_string());

            let end = last
                .and_then(|s| slot_start(group.shift, s))
                .map(|t| format_time(t + Duration::minutes(BLOCK_MINUTES)))
                .unwrap_or_else(|| TIME_NOT_AVAILABLE.to_string());

            format!("{days} from {start} to {end}")
        })
        .collect();

    segments.join("; ")
}

/// Expands a schedule code into its atomic occupancy keys, one
/// `"<DayName>_<HH:MM>"` per (day, slot) pair in the Cartesian product of
/// each group. Unknown days and out-of-range slots are skipped; a code with
/// no group yields an empty list.
///
/// Keys come out day-major then slot-minor within a group, groups in input
/// order. Lookup treats the result as a set, but the order is deterministic.
pub fn expand(code: &str) -> Vec<String> {
    let mut keys = Vec::new();

    for group in scan_groups(code) {
        for day in group.days.chars() {
            let Some(day) = day_name(day) else {
                continue;
            };
            for slot in group.slots.chars() {
                if let Some(start) = slot_start(group.shift, slot) {
                    keys.push(format!("{day}_{}", format_time(start)));
                }
            }
        }
    }

    keys
}
