use std::fmt::Write as _;

use crate::types::FileResult;

pub fn format(results: &[FileResult], threshold: usize) -> String {
    let mut out = String::new();
    out.push_str("file,tokens,chars,exceeds\n");
    for r in results {
        let _ = writeln!(
            out,
            "{},{},{},{}",
            escape(&r.path.display().to_string()),
            r.tokens,
            r.chars,
            r.exceeds(threshold)
        );
    }
    out
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
