/// Types for the class catalog
use serde::{Deserialize, Serialize};

/// Sentinel for sections whose data lists no instructor.
pub const INSTRUCTOR_NOT_INFORMED: &str = "Not informed";

/// Sentinel for sections whose data lists no room or building.
pub const LOCATION_NOT_AVAILABLE: &str = "N/A";

/// One subject record from the data file, with its offered sections.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSubject {
    /// Subject name, e.g. "DIM0138 - ALGORITHMS I"
    pub disciplina: String,

    /// Sections offered for this subject, in file order
    pub turmas: Vec<RawSection>,
}

/// One section record from the data file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSection {
    /// Section identifier, e.g. "01"
    pub turma: String,

    /// Instructor field; the source data is loose about its shape
    #[serde(default)]
    pub docente: Instructor,

    /// Raw schedule field. Only the first whitespace-delimited token is the
    /// schedule code; anything after it is auxiliary and discarded.
    pub horario: String,

    /// Room/building, when the data has one
    #[serde(default)]
    pub local: Option<String>,
}

/// The instructor field as it appears on disk: a single name, a list of
/// names, or absent entirely. Resolved to one string at load time and never
/// carried past the loader.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(untagged)]
pub enum Instructor {
    Single(String),
    Multiple(Vec<String>),
    /// Anything else the data file puts in the field (null, numbers, nested
    /// objects); treated the same as an absent value.
    Other(serde_json::Value),
    #[default]
    Missing,
}

impl Instructor {
    /// Normalizes the field to a display string: lists are joined with
    /// `" and "`, anything else becomes the not-informed sentinel.
    pub fn normalize(self) -> String {
        match self {
            Instructor::Single(name) => name,
            Instructor::Multiple(names) => names.join(" and "),
            Instructor::Other(_) | Instructor::Missing => INSTRUCTOR_NOT_INFORMED.to_string(),
        }
    }
}

/// One decoded, display-ready class section. Built once at catalog load and
/// immutable afterward. Wire names follow the original data source, which the
/// front end also speaks.
#[derive(Debug, Clone, Serialize)]
pub struct ClassEntry {
    /// Sequential zero-based id, assigned in file encounter order
    pub id: usize,

    #[serde(rename = "disciplina")]
    pub subject: String,

    #[serde(rename = "turma")]
    pub section: String,

    #[serde(rename = "docente")]
    pub instructor: String,

    /// The compact schedule code, e.g. "35M12"
    #[serde(rename = "horario_codigo")]
    pub schedule_code: String,

    /// Readable rendering of the schedule code
    #[serde(rename = "horario_legivel")]
    pub schedule_description: String,

    #[serde(rename = "local")]
    pub location: String,

    /// Occupancy keys ("<DayName>_<HH:MM>") this section fills
    #[serde(rename = "blocos")]
    pub occupancy: Vec<String>,
}
