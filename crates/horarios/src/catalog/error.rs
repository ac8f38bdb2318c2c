//! Error types for catalog loading.

use thiserror::Error;

/// Errors that can occur while reading the class data file.
///
/// These never leave the loader: a failed load is logged and produces an
/// empty catalog so the service still starts.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data file could not be read
    #[error("failed to read class data file: {0}")]
    Io(#[from] std::io::Error),

    /// The data file is not valid JSON or does not match the expected schema
    #[error("failed to parse class data file: {0}")]
    Parse(#[from] serde_json::Error),
}
