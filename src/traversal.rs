use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ignore::WalkBuilder;

use crate::generated::is_generated;

const RECURSIVE_CWD: &str = "./...";
const RECURSIVE_SUFFIX: &str = "/...";

pub struct TraversalOptions {
    /// Source-file extension without the leading dot, e.g. `go`.
    pub extension: String,
}

impl TraversalOptions {
    pub fn new(extension: &str) -> Self {
        Self {
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    fn matches(&self, name: &str) -> bool {
        name.strip_suffix(self.extension.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    }
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self::new("go")
    }
}

/// Expands CLI path arguments into the list of files to analyze.
///
/// `./...` and `<dir>/...` walk recursively and skip generated files, an
/// existing directory is listed without recursion, and anything else is
/// passed through untouched. Results keep argument order and are not
/// de-duplicated.
///
/// # Errors
/// Returns the first error hit while walking or listing a directory.
pub fn expand_args<S: AsRef<str>>(args: &[S], opts: &TraversalOptions) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        if arg == RECURSIVE_CWD {
            files.extend(walk_recursive(Path::new("."), true, opts)?);
        } else if let Some(root) = arg.strip_suffix(RECURSIVE_SUFFIX) {
            files.extend(walk_recursive(Path::new(root), false, opts)?);
        } else if fs::metadata(arg).is_ok_and(|md| md.is_dir()) {
            files.extend(list_dir(Path::new(arg), opts)?);
        } else {
            files.push(PathBuf::from(arg));
        }
    }

    Ok(files)
}

/// Walks `root` recursively. With `relative` set, paths are reported (and
/// matched) relative to `root`, so walking `.` yields `gen/foo.go` rather
/// than `./gen/foo.go`.
fn walk_recursive(root: &Path, relative: bool, opts: &TraversalOptions) -> Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.follow_links(false);
    builder.sort_by_file_name(|a, b| a.cmp(b));

    let mut out = Vec::new();
    for dent in builder.build() {
        let dent = dent.with_context(|| format!("walk {}", root.display()))?;
        if dent.file_type().is_none_or(|ft| ft.is_dir()) {
            continue;
        }
        let path = if relative {
            dent.path().strip_prefix(root).unwrap_or(dent.path())
        } else {
            dent.path()
        };
        let s = path.to_string_lossy();
        if opts.matches(&s) && !is_generated(&s) {
            out.push(path.to_path_buf());
        }
    }
    Ok(out)
}

// Unlike the recursive walk, generated files are not filtered here.
fn list_dir(dir: &Path, opts: &TraversalOptions) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("read dir {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("read dir {}", dir.display()))?;
    entries.sort_by_key(fs::DirEntry::file_name);

    let mut out = Vec::new();
    for entry in entries {
        let ft = entry
            .file_type()
            .with_context(|| format!("stat {}", entry.path().display()))?;
        if ft.is_dir() {
            continue;
        }
        if opts.matches(&entry.file_name().to_string_lossy()) {
            out.push(dir.join(entry.file_name()));
        }
    }
    Ok(out)
}
