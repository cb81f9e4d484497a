use std::fmt::Write as _;

use crate::formatters::Colors;
use crate::types::FileResult;

const HINT: &str = "Consider splitting into smaller files for better LLM readability";

/// Share of the threshold used by `tokens`, in percent.
#[allow(clippy::cast_precision_loss)]
pub fn percent_of_limit(tokens: usize, threshold: usize) -> f64 {
    tokens as f64 / threshold as f64 * 100.0
}

pub fn format(violations: &[FileResult], threshold: usize) -> String {
    format_with(violations, threshold, &Colors::enabled())
}

pub fn format_with(violations: &[FileResult], threshold: usize, colors: &Colors) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} file(s) exceed {} token threshold:\n",
        violations.len(),
        threshold
    );
    for v in violations {
        let path = v.path.display().to_string();
        let _ = writeln!(out, "  {}", colors.paint(&path, "1;31"));
        let _ = writeln!(
            out,
            "    ~{} tokens ({:.0}% of limit, {} chars)",
            v.tokens,
            percent_of_limit(v.tokens, threshold),
            v.chars
        );
        let _ = writeln!(out, "    {HINT}\n");
    }
    out
}

/// One-line summary printed when nothing exceeds the threshold.
pub fn summary(files_scanned: usize, threshold: usize) -> String {
    format!("All {files_scanned} files under {threshold} token threshold")
}
