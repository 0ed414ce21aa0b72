//! Text block formatting for written-answer files.
//!
//! Every answer in an output file is one block: a dashed header with the
//! column name centered in it, the answer text, a separator rule of the
//! same width, and a blank line. The width is shared by every block in a
//! run so the headers line up down the file.

/// Fixed padding added to the longest column name to get the header width.
pub const HEADER_PADDING: usize = 20;

/// Compute the shared header width for a set of retained columns.
///
/// Width is the length of the longest column name plus [`HEADER_PADDING`],
/// so the longest header still gets ten dashes on each side.
pub fn header_width<S: AsRef<str>>(columns: &[S]) -> usize {
    columns
        .iter()
        .map(|c| c.as_ref().len())
        .max()
        .unwrap_or(0)
        + HEADER_PADDING
}

/// Build a header line of exactly `width` characters with `name` centered
/// between two runs of dashes.
///
/// When the dash count is odd the extra dash goes on the right. If `width`
/// is smaller than the name, the dash runs clamp to zero and the name is
/// emitted as-is.
pub fn format_header(name: &str, width: usize) -> String {
    let dashes = width.saturating_sub(name.len());
    let left = dashes / 2;
    let right = dashes - left;

    format!("{}{}{}", "-".repeat(left), name, "-".repeat(right))
}

/// Build one answer block: header, value, separator rule, blank line.
pub fn format_block(name: &str, value: &str, width: usize) -> String {
    format!(
        "{}\n{}\n{}\n\n",
        format_header(name, width),
        value,
        "-".repeat(width)
    )
}
