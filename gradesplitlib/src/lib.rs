//! # gradesplitlib
//!
//! Splits a gradebook CSV export into per-submission written-answer files.
//!
//! ## Overview
//!
//! Grading platforms export every student's work as one wide CSV: a row per
//! submission, a column per question. Reading a single student's answers out
//! of that grid is painful. This library turns the export into one plain-text
//! file per submission, each answer under a centered dashed header:
//!
//! ```text
//! ----------Question 1 Response-----------
//! cat
//! ----------------------------------------
//! ```
//!
//! The pipeline is three steps, run once per invocation:
//!
//! - **Loader**: reads the CSV, drops rows with an empty id cell, and keeps
//!   only question-response columns plus the id column
//! - **Formatter**: renders one dashed block per retained column, all at a
//!   shared width derived from the longest column name
//! - **Writer**: emits `<output>/<id>/written_answers.txt` per submission
//!
//! ## Example
//!
//! ```rust
//! use gradesplitlib::{load, write_submissions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let export = dir.path().join("submission_metadata.csv");
//! fs::write(&export, "Submission ID,Question 1 Response\n42,cat\n,dog\n").unwrap();
//!
//! let table = load(&export, "Submission ID").unwrap();
//! assert_eq!(table.len(), 1); // the empty-id row is dropped
//!
//! let out = dir.path().join("submissions");
//! write_submissions(&table, &out).unwrap();
//! assert!(out.join("42/written_answers.txt").is_file());
//! ```

pub mod error;
pub mod format;
pub mod loader;
pub mod table;
pub mod writer;

pub use error::GradesplitError;
pub use format::{format_block, format_header, header_width, HEADER_PADDING};
pub use loader::{has_csv_extension, load};
pub use table::{Submission, SubmissionTable};
pub use writer::{write_submissions, ANSWER_FILE_NAME};

/// Result type for gradesplitlib operations
pub type Result<T> = std::result::Result<T, GradesplitError>;
