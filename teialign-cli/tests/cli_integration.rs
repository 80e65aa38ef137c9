//! Integration tests for the teialign CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn teialign() -> Command {
    Command::cargo_bin("teialign").unwrap()
}

#[test]
fn test_align_training_only() {
    let out = TempDir::new().unwrap();
    let train = out.path().join("train.txt");

    teialign()
        .arg("align")
        .arg("--corpus")
        .arg(fixture_path("corpus"))
        .arg("--train")
        .arg(&train)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "3 found, 2 processed, 1 missing raw",
        ))
        .stdout(predicate::str::contains("18 total, 18 matched"));

    let written = fs::read_to_string(&train).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 13 + 1 + 5 + 1);
    assert_eq!(lines[0], "Deep deep BLOCKSTART PAGESTART I-<title>");
    assert_eq!(lines[2], "for for BLOCKSTART <title>");
    assert_eq!(lines[4], "Springer springer BLOCKSTART I-<publisher>");
    assert_eq!(lines[7], "Introduction introduction BLOCKSTART <toc>");
    assert_eq!(lines[9], "Introduction introduction BLOCKSTART I-<unit>");
    assert_eq!(lines[13], "");
    assert_eq!(lines[15], "Report report PAGESTART BLOCKSTART I-<cover>");
    assert_eq!(lines[16], "Index index I-<back>");
}

#[test]
fn test_align_json_summary() {
    let out = TempDir::new().unwrap();

    let output = teialign()
        .arg("align")
        .arg("--corpus")
        .arg(fixture_path("corpus"))
        .arg("--eval")
        .arg(out.path().join("eval.txt"))
        .arg("--format")
        .arg("json")
        .arg("--quiet")
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["documents_found"], 3);
    assert_eq!(summary["missing_raw"], 1);
    assert_eq!(summary["rows_matched"], 18);
    assert_eq!(summary["outputs"]["evaluation"]["documents"], 2);
    assert!(summary["outputs"]["training"].is_null());
}

#[test]
fn test_align_with_seed_is_reproducible() {
    let run = |dir: &TempDir, parallel: bool| -> (String, String) {
        let train = dir.path().join("train.txt");
        let eval = dir.path().join("eval.txt");
        let mut cmd = teialign();
        cmd.arg("align")
            .arg("--corpus")
            .arg(fixture_path("corpus"))
            .arg("--train")
            .arg(&train)
            .arg("--eval")
            .arg(&eval)
            .arg("--split-ratio")
            .arg("0.5")
            .arg("--seed")
            .arg("17")
            .arg("--quiet");
        if parallel {
            cmd.arg("--threads").arg("2");
        }
        cmd.assert().success();
        (
            fs::read_to_string(train).unwrap(),
            fs::read_to_string(eval).unwrap(),
        )
    };

    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let third = TempDir::new().unwrap();
    let a = run(&first, false);
    let b = run(&second, false);
    let c = run(&third, true);
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn test_align_requires_an_output() {
    teialign()
        .arg("align")
        .arg("--corpus")
        .arg(fixture_path("corpus"))
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one"));
}

#[test]
fn test_align_requires_a_corpus() {
    teialign()
        .arg("align")
        .arg("--train")
        .arg("train.txt")
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no corpus given"));
}

#[test]
fn test_align_from_config_file() {
    let out = TempDir::new().unwrap();
    let train = out.path().join("train.txt");
    let config = out.path().join("teialign.toml");
    fs::write(
        &config,
        format!(
            "[corpus]\nroot = {:?}\n\n[output]\ntraining = {:?}\n\n[alignment]\nscan_window = 50\n",
            fixture_path("corpus").display().to_string(),
            train.display().to_string(),
        ),
    )
    .unwrap();

    teialign()
        .arg("align")
        .arg("--config")
        .arg(&config)
        .arg("--quiet")
        .assert()
        .success();

    assert!(fs::read_to_string(&train)
        .unwrap()
        .starts_with("Deep deep BLOCKSTART PAGESTART I-<title>\n"));
}

#[test]
fn test_generate_config_round_trip() {
    let out = TempDir::new().unwrap();
    let config = out.path().join("teialign.toml");

    teialign()
        .arg("generate-config")
        .arg("--output")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("teialign align --config"));

    let content = fs::read_to_string(&config).unwrap();
    assert!(content.contains("[corpus]"));
    assert!(content.contains("[performance]"));
}

#[test]
fn test_validate_corpus() {
    let pattern = format!("{}/*.tei.xml", fixture_path("corpus/tei").display());

    teialign()
        .arg("validate")
        .arg(pattern)
        .assert()
        .success()
        .stdout(predicate::str::contains("book1.tei.xml: 13 tokens, 3 markers"))
        .stdout(predicate::str::contains("✗").not());
}

#[test]
fn test_validate_reports_malformed_markup() {
    teialign()
        .arg("validate")
        .arg(fixture_path("broken.tei.xml").display().to_string())
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_list_labels() {
    teialign()
        .arg("list")
        .arg("labels")
        .assert()
        .success()
        .stdout(predicate::str::contains("title"))
        .stdout(predicate::str::contains("toc"))
        .stdout(predicate::str::contains("other"));
}

#[test]
fn test_version() {
    teialign()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("teialign"));
}
