use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::types::FileResult;

/// Estimates the token count of `chars` bytes of source: `floor(chars * ratio)`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn estimate_tokens(chars: usize, ratio: f64) -> usize {
    (chars as f64 * ratio).floor() as usize
}

/// Reads a file in full and estimates its token count.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn analyze_file(path: &Path, ratio: f64) -> Result<FileResult> {
    let content = fs::read(path).with_context(|| format!("read file: {}", path.display()))?;
    let chars = content.len();
    Ok(FileResult {
        path: path.to_path_buf(),
        tokens: estimate_tokens(chars, ratio),
        chars,
    })
}

/// Analyzes every file, returning all results and the subset above `threshold`.
///
/// Unreadable files are reported as warnings on stderr and left out of both
/// lists. Input order is preserved.
pub fn analyze_files(
    files: &[PathBuf],
    threshold: usize,
    ratio: f64,
) -> (Vec<FileResult>, Vec<FileResult>) {
    let mut results = Vec::with_capacity(files.len());
    let mut violations = Vec::new();

    for path in files {
        let r = match analyze_file(path, ratio) {
            Ok(r) => r,
            Err(err) => {
                eprintln!("warning: {err:#}");
                continue;
            }
        };
        if r.exceeds(threshold) {
            violations.push(r.clone());
        }
        results.push(r);
    }

    (results, violations)
}
