//! End-to-end tests for the extraction tools

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_parse_txt_missing_input_fails_with_path() {
    Command::cargo_bin("parse-txt")
        .unwrap()
        .args(["definitely/not/here.txt", "out.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("definitely/not/here.txt"));
}

#[test]
fn test_parse_txt_cleans_and_writes() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "Hello\r\nworld\r\n\r\n\r\nbye").unwrap();

    Command::cargo_bin("parse-txt")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to"));

    let cleaned = std::fs::read_to_string(&output).unwrap();
    assert_eq!(cleaned, "Hello\nworld\n\nbye");
}

#[test]
fn test_parse_html_keeps_one_line_per_block() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.html");
    let output = dir.path().join("out.txt");
    std::fs::write(
        &input,
        "<html><body><script>var x;</script><h1>Title</h1><p>Body</p></body></html>",
    )
    .unwrap();

    Command::cargo_bin("parse-html")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let cleaned = std::fs::read_to_string(&output).unwrap();
    assert_eq!(cleaned, "Title\nBody");
}

#[test]
fn test_parse_md_flattens_markup() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.md");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "# Heading\n\nSome *text*.").unwrap();

    Command::cargo_bin("parse-md")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let cleaned = std::fs::read_to_string(&output).unwrap();
    assert_eq!(cleaned, "Heading\n\nSome text.");
}

#[test]
fn test_parse_pdf_missing_input_fails_with_path() {
    Command::cargo_bin("parse-pdf")
        .unwrap()
        .args(["no/such/file.pdf", "out.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no/such/file.pdf"));
}

#[test]
fn test_parse_docx_rejects_garbage_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.docx");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "not a zip archive").unwrap();

    Command::cargo_bin("parse-docx")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.docx"));
}
