//! Per-submission output file emission.
//!
//! Walks a filtered table in row order and writes one answer file per
//! submission, each in its own directory under the output root.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::format::{format_block, header_width};
use crate::table::SubmissionTable;
use crate::Result;

/// Name of the answer file written inside each submission directory.
pub const ANSWER_FILE_NAME: &str = "written_answers.txt";

/// Write every submission in `table` under `output_dir`.
///
/// Creates `output_dir/<id>/` as needed (no error when it already exists)
/// and overwrites any existing answer file, so a re-run with the same input
/// produces identical output. Blocks are written in retained-column order,
/// the id column included. Rows are processed strictly sequentially; the
/// first IO failure aborts the remaining batch.
pub fn write_submissions(table: &SubmissionTable, output_dir: impl AsRef<Path>) -> Result<()> {
    let output_dir = output_dir.as_ref();
    let width = header_width(&table.columns);

    for submission in &table.rows {
        let dir = output_dir.join(&submission.id);
        fs::create_dir_all(&dir)?;

        let path = dir.join(ANSWER_FILE_NAME);
        // Handle is scoped to the row: flushed and closed before the next
        // submission is touched, even on a failed write.
        let mut file = BufWriter::new(File::create(&path)?);
        for (column, value) in &submission.fields {
            file.write_all(format_block(column, value, width).as_bytes())?;
        }
        file.flush()?;

        debug!("wrote {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_header;
    use crate::table::Submission;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn sample_table() -> SubmissionTable {
        let columns = vec![
            "Question 1 Response".to_string(),
            "Submission ID".to_string(),
        ];
        let rows = vec![
            Submission {
                id: "42".to_string(),
                fields: vec![
                    ("Question 1 Response".to_string(), "cat".to_string()),
                    ("Submission ID".to_string(), "42".to_string()),
                ],
            },
            Submission {
                id: "43".to_string(),
                fields: vec![
                    ("Question 1 Response".to_string(), "dog".to_string()),
                    ("Submission ID".to_string(), "43".to_string()),
                ],
            },
        ];
        SubmissionTable { columns, rows }
    }

    fn answer_path(root: &Path, id: &str) -> PathBuf {
        root.join(id).join(ANSWER_FILE_NAME)
    }

    #[test]
    fn test_writes_one_file_per_submission() {
        let temp = tempdir().unwrap();
        let table = sample_table();

        write_submissions(&table, temp.path()).unwrap();

        assert!(answer_path(temp.path(), "42").is_file());
        assert!(answer_path(temp.path(), "43").is_file());
    }

    #[test]
    fn test_blocks_follow_column_order() {
        let temp = tempdir().unwrap();
        let table = sample_table();
        let width = header_width(&table.columns);

        write_submissions(&table, temp.path()).unwrap();

        let content = fs::read_to_string(answer_path(temp.path(), "42")).unwrap();
        let expected = format!(
            "{}\ncat\n{rule}\n\n{}\n42\n{rule}\n\n",
            format_header("Question 1 Response", width),
            format_header("Submission ID", width),
            rule = "-".repeat(width),
        );
        assert_eq!(content, expected);
    }

    #[test]
    fn test_answer_value_survives_round_trip() {
        let temp = tempdir().unwrap();
        let table = sample_table();
        let width = header_width(&table.columns);

        write_submissions(&table, temp.path()).unwrap();

        let content = fs::read_to_string(answer_path(temp.path(), "43")).unwrap();
        let lines: Vec<&str> = content.split('\n').collect();
        // Value sits between its header and the trailing rule
        assert_eq!(lines[0], format_header("Question 1 Response", width));
        assert_eq!(lines[1], "dog");
        assert_eq!(lines[2], "-".repeat(width));
    }

    #[test]
    fn test_rerun_overwrites_without_accumulating() {
        let temp = tempdir().unwrap();
        let table = sample_table();

        write_submissions(&table, temp.path()).unwrap();
        let first = fs::read_to_string(answer_path(temp.path(), "42")).unwrap();

        write_submissions(&table, temp.path()).unwrap();
        let second = fs::read_to_string(answer_path(temp.path(), "42")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_table_creates_nothing() {
        let temp = tempdir().unwrap();
        let table = SubmissionTable::new(vec!["Submission ID".to_string()]);

        write_submissions(&table, temp.path()).unwrap();

        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_empty_answer_is_written_as_blank_line() {
        let temp = tempdir().unwrap();
        let columns = vec![
            "Question 2 Response".to_string(),
            "Submission ID".to_string(),
        ];
        let table = SubmissionTable {
            columns: columns.clone(),
            rows: vec![Submission {
                id: "7".to_string(),
                fields: vec![
                    ("Question 2 Response".to_string(), String::new()),
                    ("Submission ID".to_string(), "7".to_string()),
                ],
            }],
        };
        let width = header_width(&columns);

        write_submissions(&table, temp.path()).unwrap();

        let content = fs::read_to_string(answer_path(temp.path(), "7")).unwrap();
        let lines: Vec<&str> = content.split('\n').collect();
        assert_eq!(lines[0], format_header("Question 2 Response", width));
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "-".repeat(width));
    }
}
