use std::fs;
use std::process::Command;

fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("small.go"), "package main\n").unwrap();
    fs::write(dir.path().join("large.go"), "a".repeat(50_000)).unwrap();
    dir
}

#[test]
fn json_report_carries_all_results_and_violations() {
    let dir = fixture();
    let out = Command::new(env!("CARGO_BIN_EXE_token-lint"))
        .arg("--json")
        .current_dir(dir.path())
        .output()
        .expect("run json");
    assert_eq!(out.status.code(), Some(1));

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["threshold"], 25000);
    assert_eq!(v["files_scanned"], 2);
    assert_eq!(v["files"][0]["path"], "large.go");
    assert_eq!(v["files"][0]["tokens"], 32500);
    assert_eq!(v["files"][1]["tokens"], 8);
    assert_eq!(v["violations"].as_array().unwrap().len(), 1);
}

#[test]
fn csv_lists_every_file() {
    let dir = fixture();
    let out = Command::new(env!("CARGO_BIN_EXE_token-lint"))
        .args(["--csv", "-threshold", "50000"])
        .current_dir(dir.path())
        .output()
        .expect("run csv");
    assert!(out.status.success());
    let s = String::from_utf8_lossy(&out.stdout);
    assert!(s.starts_with("file,tokens,chars,exceeds\n"));
    assert!(s.contains("large.go,32500,50000,false"));
    assert!(s.contains("small.go,8,13,false"));
}

#[test]
fn json_and_csv_conflict() {
    let dir = fixture();
    let out = Command::new(env!("CARGO_BIN_EXE_token-lint"))
        .args(["--json", "--csv"])
        .current_dir(dir.path())
        .output()
        .expect("run");
    assert_eq!(out.status.code(), Some(1));
}
