//! Error types for gradesplitlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a submission export
#[derive(Error, Debug)]
pub enum GradesplitError {
    /// Input path does not carry a `.csv` extension
    #[error("not a CSV file: {0}")]
    NotCsv(PathBuf),

    /// Failed to open or parse the input file
    #[error("failed to read '{path}': {source}")]
    Read { path: PathBuf, source: csv::Error },

    /// Header row has no column with the configured id name
    #[error("id column '{0}' not found in header row")]
    MissingIdColumn(String),

    /// IO error while creating output directories or files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
