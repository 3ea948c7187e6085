// tests/integration_refactor.rs

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const MOJIBAKE_TITLE_TAG: &str =
    "<title>Skillify \u{c3}\u{a2}\u{e2}\u{201a}\u{ac}\u{e2}\u{20ac} Ultimate</title>";

fn write_dashboard(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("dashboard.html");
    let content = format!(
        "<html>\n<head>\n{}\n<style>\nbody {{ margin: 0; }}\n.card {{ padding: 8px; }}\n</style>\n</head>\n<body></body>\n</html>\n",
        MOJIBAKE_TITLE_TAG
    );
    fs::write(&path, content).unwrap();
    path
}

/// --- Test: Full Refactor ---
/// Style block removed, title fixed, link + DOMPurify snippet inserted.
#[test]
fn test_refactor_rewrites_dashboard() {
    let dir = TempDir::new().unwrap();
    let dashboard = write_dashboard(&dir);

    let mut cmd = Command::cargo_bin("css_refactor").unwrap();
    cmd.arg("refactor").arg("--html").arg(&dashboard);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found inline CSS block"))
        .stdout(predicate::str::contains("Removed inline CSS block"))
        .stdout(predicate::str::contains("Successfully refactored"));

    let result = fs::read_to_string(&dashboard).unwrap();
    assert!(!result.contains("<style>"));
    assert!(result.contains("<title>Skillify — Ultimate Learning Platform</title>"));
    assert!(result.contains(r#"<link rel="stylesheet" href="css/dashboard.css">"#));
    assert!(result.contains("dompurify@3.0.6"));
}

/// --- Test: Re-run Idempotence ---
/// The second run finds no style block and must not stack a second
/// stylesheet link onto the already-refactored file.
#[test]
fn test_refactor_second_run_adds_nothing() {
    let dir = TempDir::new().unwrap();
    let dashboard = write_dashboard(&dir);

    Command::cargo_bin("css_refactor")
        .unwrap()
        .arg("refactor")
        .arg("--html")
        .arg(&dashboard)
        .assert()
        .success();
    let after_first = fs::read_to_string(&dashboard).unwrap();

    Command::cargo_bin("css_refactor")
        .unwrap()
        .arg("refactor")
        .arg("--html")
        .arg(&dashboard)
        .assert()
        .success()
        .stdout(predicate::str::contains("No inline style block found"));

    let after_second = fs::read_to_string(&dashboard).unwrap();
    assert_eq!(after_first, after_second);
    assert_eq!(after_second.matches("css/dashboard.css").count(), 1);
}

/// --- Test: Missing File ---
/// Unlike `extract`, I/O failures here are fatal.
#[test]
fn test_refactor_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("css_refactor").unwrap();
    cmd.arg("refactor")
        .arg("--html")
        .arg(dir.path().join("missing.html"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading"));
}
