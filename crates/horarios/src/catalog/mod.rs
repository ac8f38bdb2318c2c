//! Class catalog: loads the raw class list, decodes every section's schedule
//! code, and answers occupancy lookups.

mod error;
mod types;

pub use error::CatalogError;
pub use types::{ClassEntry, Instructor, RawSection, RawSubject, LOCATION_NOT_AVAILABLE};

use std::fs;
use std::path::Path;

use tracing::{error, info};

use crate::schedule;

/// The in-memory class catalog. Built once at startup from the data file and
/// never mutated afterward, so it can be shared freely across handlers.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<ClassEntry>,
}

impl Catalog {
    /// Loads the catalog from a JSON data file.
    ///
    /// A missing or malformed file is logged and yields an empty catalog:
    /// the service must stay startable with zero entries rather than fail.
    pub fn load(path: &Path) -> Catalog {
        match Self::try_load(path) {
            Ok(catalog) => {
                info!(
                    "Loaded {} class entries from {}",
                    catalog.len(),
                    path.display()
                );
                catalog
            }
            Err(e) => {
                error!("Could not load class data from {}: {e}", path.display());
                Catalog::default()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Catalog, CatalogError> {
        let content = fs::read_to_string(path)?;
        let subjects: Vec<RawSubject> = serde_json::from_str(&content)?;
        Ok(Catalog::from_subjects(subjects))
    }

    /// Builds the catalog from raw subject records, assigning sequential ids
    /// in encounter order (subject-major, section-minor) and decoding each
    /// section's schedule code.
    pub fn from_subjects(subjects: Vec<RawSubject>) -> Catalog {
        let mut entries = Vec::new();

        for subject in subjects {
            for section in subject.turmas {
                // Only the first token of the schedule field is the code;
                // trailing tokens are auxiliary notes.
                let code = section
                    .horario
                    .split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .to_string();

                entries.push(ClassEntry {
                    id: entries.len(),
                    subject: subject.disciplina.clone(),
                    section: section.turma,
                    instructor: section.docente.normalize(),
                    schedule_description: schedule::describe(&code),
                    occupancy: schedule::expand(&code),
                    schedule_code: code,
                    location: section
                        .local
                        .unwrap_or_else(|| LOCATION_NOT_AVAILABLE.to_string()),
                });
            }
        }

        Catalog { entries }
    }

    /// Returns every entry occupying the `"<day>_<time>"` key, in catalog
    /// order. Occupancy is exact key membership, no prefix or range matching.
    pub fn find(&self, day: &str, time: &str) -> Vec<&ClassEntry> {
        let key = format!("{day}_{time}");
        self.entries
            .iter()
            .filter(|entry| entry.occupancy.iter().any(|k| *k == key))
            .collect()
    }

    pub fn entries(&self) -> &[ClassEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
