use std::fmt::Write as _;

use crate::formatters::Colors;
use crate::types::FileResult;

const PATH_WIDTH: usize = 60;
const NUM_WIDTH: usize = 8;
const MARKER: &str = " <- EXCEEDS LIMIT";

/// Renders every result as a table. Rows are printed in the order given; the
/// caller sorts them.
pub fn format(results: &[FileResult], threshold: usize) -> String {
    format_with(results, threshold, &Colors::enabled())
}

pub fn format_with(results: &[FileResult], threshold: usize, colors: &Colors) -> String {
    let mut out = String::new();
    let header = format!(
        "{:<PATH_WIDTH$} {:>NUM_WIDTH$} {:>NUM_WIDTH$}",
        "FILE", "TOKENS", "CHARS"
    );
    let _ = writeln!(out, "{}", colors.bold(&header));
    let _ = writeln!(out, "{}", "-".repeat(PATH_WIDTH + 2 * (NUM_WIDTH + 1)));

    for r in results {
        let marker = if r.exceeds(threshold) {
            colors.paint(MARKER, "31")
        } else {
            String::new()
        };
        let _ = writeln!(
            out,
            "{:<PATH_WIDTH$} {:>NUM_WIDTH$} {:>NUM_WIDTH$}{}",
            r.path.display(),
            r.tokens,
            r.chars,
            marker
        );
    }
    out.push('\n');
    out
}
