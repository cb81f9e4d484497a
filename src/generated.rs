/// Returns true for paths that look like generated code.
///
/// Matching is done on the path string exactly as given: no normalization and
/// no case-folding. A `gen` directory only counts when a slash precedes it, so
/// `gen/foo.go` is not generated while `a/gen/foo.go` is.
pub fn is_generated(path: &str) -> bool {
    path.contains("/gen/")
        || path.contains("_gen.go")
        || path.ends_with(".pb.go")
        || path.ends_with(".sql.go")
}
