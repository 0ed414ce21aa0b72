//! CSV loading and filtering.
//!
//! Reads a submission export and keeps only what the writer needs:
//! rows that were actually submitted (non-empty id cell) and columns that
//! hold written answers, plus the id column itself.

use std::path::Path;

use csv::ReaderBuilder;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::error::GradesplitError;
use crate::table::{Submission, SubmissionTable};
use crate::Result;

/// Columns holding written answers, e.g. "Question 3 Response" or
/// "Question 12.1 Response". Case-sensitive, anchored on both ends.
static QUESTION_RESPONSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Question \d{1,2}(?:\.\d{1,2})? Response$").expect("pattern is valid")
});

/// True when the path carries the literal `csv` extension.
pub fn has_csv_extension(path: impl AsRef<Path>) -> bool {
    path.as_ref().extension().is_some_and(|ext| ext == "csv")
}

/// Load a submission export from a CSV file.
///
/// Retains columns whose name matches the question-response pattern plus
/// `id_column`, preserving header order, and drops rows whose `id_column`
/// cell is empty. The returned table is never mutated afterwards.
///
/// Fails with [`GradesplitError::NotCsv`] before touching the filesystem
/// when the path has no `.csv` extension, with [`GradesplitError::Read`]
/// when the file cannot be opened or parsed, and with
/// [`GradesplitError::MissingIdColumn`] when the header row lacks
/// `id_column`.
///
/// # Example
///
/// ```rust
/// use gradesplitlib::load;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("export.csv");
/// fs::write(&path, "Submission ID,Question 1 Response\n42,cat\n").unwrap();
///
/// let table = load(&path, "Submission ID").unwrap();
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.rows[0].id, "42");
/// ```
pub fn load(path: impl AsRef<Path>, id_column: &str) -> Result<SubmissionTable> {
    let path = path.as_ref();

    if !has_csv_extension(path) {
        return Err(GradesplitError::NotCsv(path.to_path_buf()));
    }

    let read_err = |source| GradesplitError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(read_err)?;

    let headers = reader.headers().map_err(read_err)?.clone();

    let id_index = headers
        .iter()
        .position(|name| name == id_column)
        .ok_or_else(|| GradesplitError::MissingIdColumn(id_column.to_string()))?;

    // Indices of retained columns, in header order
    let retained: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, name)| QUESTION_RESPONSE.is_match(name) || *name == id_column)
        .map(|(index, _)| index)
        .collect();

    let columns: Vec<String> = retained.iter().map(|&i| headers[i].to_string()).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(read_err)?;

        let id = record.get(id_index).unwrap_or("");
        if id.is_empty() {
            continue;
        }

        let fields: Vec<(String, String)> = retained
            .iter()
            .zip(&columns)
            .map(|(&i, name)| (name.clone(), record.get(i).unwrap_or("").to_string()))
            .collect();

        rows.push(Submission {
            id: id.to_string(),
            fields,
        });
    }

    info!("Number of submissions to parse: {}", rows.len());

    Ok(SubmissionTable { columns, rows })
}
