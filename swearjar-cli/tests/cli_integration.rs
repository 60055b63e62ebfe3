//! Integration tests for the swearjar CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn swearjar() -> Command {
    Command::cargo_bin("swearjar").unwrap()
}

#[test]
fn test_check_english_text() {
    swearjar()
        .arg("check")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("profane.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("What the **** is this ****?"))
        .stdout(predicate::str::contains("first class passengers"));
}

#[test]
fn test_check_portuguese_text() {
    swearjar()
        .args(["check", "-q", "-l", "pt-br", "-i"])
        .arg(fixture_path("portuguese.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Que ***** é essa?"))
        .stdout(predicate::str::contains("O computador travou."));
}

#[test]
fn test_custom_terms_and_options() {
    swearjar()
        .args(["check", "-q", "-l", "none", "-t", "bad"])
        .args(["--ratio", "0.5", "--direction", "LTR", "--replace-string", "-"])
        .arg("-i")
        .arg(fixture_path("profane.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("A --d day"))
        .stdout(predicate::str::contains("What the fuck"));
}

#[test]
fn test_literal_disables_folding() {
    swearjar()
        .args(["check", "-q", "-l", "none", "-t", "bad", "--literal", "-i"])
        .arg(fixture_path("profane.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("A b4d day"));
}

#[test]
fn test_terms_file() {
    swearjar()
        .args(["check", "-q", "-l", "none", "--terms-file"])
        .arg(fixture_path("terms.txt"))
        .arg("-i")
        .arg(fixture_path("profane.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("A *** day"));
}

#[test]
fn test_json_output() {
    swearjar()
        .args(["check", "-q", "-f", "json", "-i"])
        .arg(fixture_path("profane.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"file\""))
        .stdout(predicate::str::contains("\"analysis\""))
        .stdout(predicate::str::contains("\"start\": 9"))
        .stdout(predicate::str::contains("\"term\": \"fuck\""));
}

#[test]
fn test_markdown_output() {
    swearjar()
        .args(["check", "-q", "-f", "markdown", "-i"])
        .arg(fixture_path("profane.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("## "))
        .stdout(predicate::str::contains("What the **`****`** is this"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Files: 1, flagged: 1, matches: 2*"));
}

#[test]
fn test_config_file() {
    swearjar()
        .args(["check", "-q", "-c"])
        .arg(fixture_path("config.toml"))
        .arg("-i")
        .arg(fixture_path("profane.txt"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[{"))
        .stdout(predicate::str::contains("A --- day"));
}

#[test]
fn test_flags_override_config_file() {
    swearjar()
        .args(["check", "-q", "-f", "text", "--replace-string", "#", "-c"])
        .arg(fixture_path("config.toml"))
        .arg("-i")
        .arg(fixture_path("profane.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("A ### day"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    swearjar()
        .args(["check", "-q", "-i"])
        .arg(fixture_path("profane.txt"))
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("What the **** is this ****?"));
}

#[test]
fn test_glob_pattern() {
    swearjar()
        .args(["check", "-q", "--threads", "2", "-i"])
        .arg(fixture_path("*.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("==> tests/fixtures/clean.txt <=="))
        .stdout(predicate::str::contains("==> tests/fixtures/profane.txt <=="))
        .stdout(predicate::str::contains("This is a clean sentence."));
}

#[test]
fn test_file_name_with_brackets() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("log[1].txt");
    fs::write(&input, "that was B@D! again").unwrap();

    swearjar()
        .args(["check", "-q", "-l", "none", "-t", "bad", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("that was ***! again"));
}

#[test]
fn test_fail_on_match() {
    swearjar()
        .args(["check", "-q", "--fail-on-match", "-i"])
        .arg(fixture_path("profane.txt"))
        .assert()
        .code(1);

    swearjar()
        .args(["check", "-q", "--fail-on-match", "-i"])
        .arg(fixture_path("clean.txt"))
        .assert()
        .success();
}

#[test]
fn test_invalid_file() {
    swearjar()
        .args(["check", "-i", "nonexistent.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("File not found: nonexistent.txt"));
}

#[test]
fn test_unknown_language() {
    swearjar()
        .args(["check", "-q", "-l", "xx", "-i"])
        .arg(fixture_path("clean.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown dictionary: xx"));
}

#[test]
fn test_list_languages() {
    swearjar()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("en"))
        .stdout(predicate::str::contains("pt-br"))
        .stdout(predicate::str::contains("none"));
}

#[test]
fn test_list_formats() {
    swearjar()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_validate_dictionary() {
    swearjar()
        .args(["validate", "-d"])
        .arg(fixture_path("dictionary.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Dictionary is valid!"))
        .stdout(predicate::str::contains("Code: pets"))
        .stdout(predicate::str::contains("Terms: 2"));
}

#[test]
fn test_validate_invalid_dictionary() {
    swearjar()
        .args(["validate", "-d"])
        .arg(fixture_path("invalid-dictionary.toml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Dictionary is invalid!"));
}

#[test]
fn test_help() {
    swearjar()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("validate"));
}
