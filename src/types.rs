use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    pub path: PathBuf,
    pub tokens: usize,
    pub chars: usize,
}

impl FileResult {
    pub fn exceeds(&self, threshold: usize) -> bool {
        self.tokens > threshold
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub threshold: usize,
    pub ratio: f64,
    pub files_scanned: usize,
    pub files: Vec<FileResult>,
    pub violations: Vec<FileResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_has_expected_fields() {
        let big = FileResult {
            path: PathBuf::from("pkg/big.go"),
            tokens: 32500,
            chars: 50000,
        };
        let report = ScanReport {
            threshold: 25000,
            ratio: 0.65,
            files_scanned: 1,
            files: vec![big.clone()],
            violations: vec![big],
        };
        let v: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(v["files_scanned"], 1);
        assert_eq!(v["violations"][0]["path"], "pkg/big.go");
        assert_eq!(v["files"][0]["tokens"], 32500);
        assert_eq!(v["files"][0]["chars"], 50000);
    }

    #[test]
    fn exceeds_is_strict() {
        let r = FileResult {
            path: PathBuf::from("a.go"),
            tokens: 100,
            chars: 200,
        };
        assert!(!r.exceeds(100));
        assert!(r.exceeds(99));
    }
}
