//! Integration tests for the non-interactive commands.

mod common;

use assert_cmd::Command;
use common::{entries_json, entry, perfect_entries};
use ecoscore::Category;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn ecoscore(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ecoscore").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("ECOSCORE_CONFIG")
        .env_remove("ECOSCORE_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    if !output.status.success() {
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("ecoscore command failed");
    }
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_catalog_lists_every_indicator() {
    let temp_dir = TempDir::new().unwrap();
    let stdout = stdout_of(ecoscore(&temp_dir).args(["catalog", "--plain"]));

    for def in ecoscore::catalog::all_indicators() {
        assert!(stdout.contains(def.name), "missing {}", def.name);
    }
}

#[test]
fn test_catalog_json() {
    let temp_dir = TempDir::new().unwrap();
    let stdout = stdout_of(ecoscore(&temp_dir).args(["catalog", "--format", "json"]));

    let json: Value = serde_json::from_str(&stdout).expect("Output is not valid JSON");
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 18);
    assert_eq!(items[0]["name"], "Absolute compactness");
    assert_eq!(items[0]["reference_threshold"], "≥ 50%");
}

#[test]
fn test_catalog_unknown_category_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = ecoscore(&temp_dir)
        .args(["catalog", "--category", "eje9"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("eje9"));
}

#[test]
fn test_score_json_reports_total_and_grade() {
    let temp_dir = TempDir::new().unwrap();
    let entries = vec![entry(Category::Compactness, "Absolute compactness", 20.0, 20.0)];
    fs::write(temp_dir.path().join("entries.json"), entries_json(&entries)).unwrap();

    let stdout = stdout_of(ecoscore(&temp_dir).args([
        "score",
        "--entries",
        "entries.json",
        "--format",
        "json",
    ]));

    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["result"]["total"], 25.0);
    assert_eq!(json["result"]["grade"], "D");
    assert_eq!(json["summary"][0]["category"], "eje1");
    assert_eq!(json["summary"][0]["contribution"], 25.0);
    assert!(json.get("message").is_none());
}

#[test]
fn test_score_empty_entries_prints_prompt() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("entries.json"), "[]").unwrap();

    let stdout = stdout_of(ecoscore(&temp_dir).args(["score", "-e", "entries.json", "--plain"]));

    assert!(stdout.contains("Add indicators from the side panel to calculate results."));
    assert!(!stdout.contains("Final score"));
}

#[test]
fn test_score_reads_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let stdout = stdout_of(
        ecoscore(&temp_dir)
            .args(["score", "-e", "-", "--plain"])
            .write_stdin(entries_json(&perfect_entries())),
    );

    assert!(stdout.contains("Final score (%): 100.0 %"));
    assert!(stdout.contains("A (Excellent)"));
}

#[test]
fn test_score_with_export() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("entries.json"),
        entries_json(&perfect_entries()),
    )
    .unwrap();

    stdout_of(ecoscore(&temp_dir).args([
        "score",
        "-e",
        "entries.json",
        "--export",
        "scored.xlsx",
    ]));
    assert!(temp_dir.path().join("scored.xlsx").exists());
}

#[test]
fn test_export_uses_default_file_name() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("entries.json"),
        entries_json(&perfect_entries()),
    )
    .unwrap();

    let stdout = stdout_of(ecoscore(&temp_dir).args(["export", "-e", "entries.json"]));

    assert!(stdout.contains("Exported 4 entries"));
    assert!(temp_dir
        .path()
        .join("Validation_Sustainability.xlsx")
        .exists());
}

#[test]
fn test_export_respects_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("reports")).unwrap();
    fs::write(
        temp_dir.path().join(".ecoscore.toml"),
        indoc! {r#"
            [export]
            file_name = "district.xlsx"
            directory = "reports"
        "#},
    )
    .unwrap();
    fs::write(temp_dir.path().join("entries.json"), "[]").unwrap();

    stdout_of(ecoscore(&temp_dir).args(["export", "-e", "entries.json"]));
    assert!(temp_dir.path().join("reports/district.xlsx").exists());
}

#[test]
fn test_explicit_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("bad.toml"), "[export\nfile_name = 1").unwrap();

    let output = ecoscore(&temp_dir)
        .args(["--config", "bad.toml", "catalog"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_init_creates_config_once() {
    let temp_dir = TempDir::new().unwrap();

    let stdout = stdout_of(ecoscore(&temp_dir).arg("init"));
    assert!(stdout.contains("Created .ecoscore.toml"));
    let contents = fs::read_to_string(temp_dir.path().join(".ecoscore.toml")).unwrap();
    assert!(contents.contains("[export]"));

    let output = ecoscore(&temp_dir).arg("init").output().unwrap();
    assert!(!output.status.success());

    stdout_of(ecoscore(&temp_dir).args(["init", "--force"]));
}
