//! Submission table data model.
//!
//! A loaded export is an ordered sequence of submissions, each holding its
//! retained cells as (column name, value) pairs in original header order.

/// One student's submission: the id plus every retained cell, in column order.
///
/// `fields` includes the id column itself, so writing the pairs in order
/// reproduces the row exactly as it appeared in the filtered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Value of the id column. Non-empty: rows with an empty id are dropped
    /// at load time.
    pub id: String,
    /// (column name, cell value) pairs, aligned with the table's column set
    pub fields: Vec<(String, String)>,
}

/// An in-memory submission export, filtered down to answer content.
///
/// Constructed once per run by [`crate::loader::load`] and not mutated
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct SubmissionTable {
    /// Retained column names in original header order
    pub columns: Vec<String>,
    /// One entry per submitted row, in file order
    pub rows: Vec<Submission>,
}

impl SubmissionTable {
    /// Create an empty table over the given column set.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Number of retained submissions.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no row survived filtering.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
