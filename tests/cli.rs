use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn despia_local() -> Command {
    Command::cargo_bin("despia-local").unwrap()
}

fn write_dist(root: &std::path::Path) {
    let dist = root.join("dist");
    fs::create_dir_all(dist.join("assets")).unwrap();
    fs::write(dist.join("index.html"), "<html></html>").unwrap();
    fs::write(dist.join("assets/app.js"), "console.log(1)").unwrap();
}

#[test]
fn test_cli_help() {
    despia_local()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn test_cli_version() {
    despia_local()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generates_default_manifest() {
    let dir = tempdir().unwrap();
    write_dist(dir.path());

    despia_local()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Included 1 assets"))
        .stdout(predicate::str::contains("✓ Entry HTML: /index.html"));

    let content = fs::read_to_string(dir.path().join("dist/despia/local.json")).unwrap();
    let json: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["entry"], "/index.html");
    assert_eq!(json["assets"], serde_json::json!(["/assets/app.js"]));
}

#[test]
fn test_custom_output_path_and_skip_entry() {
    let dir = tempdir().unwrap();
    write_dist(dir.path());

    despia_local()
        .current_dir(dir.path())
        .args(["dist", "index.html", "-o", "public/despia/local.json", "--skip-entry-html"])
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("public/despia/local.json")).unwrap();
    let json: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["entry"], Value::Null);
    assert_eq!(
        json["assets"],
        serde_json::json!(["/assets/app.js", "/index.html"])
    );
    assert!(!dir.path().join("dist/despia").exists());
}

#[test]
fn test_reads_project_config() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("build/client");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("entry.js"), "").unwrap();
    fs::write(
        dir.path().join("despia.config.json"),
        r#"{"outputDir": "build/client", "skipEntryHtml": true}"#,
    )
    .unwrap();

    despia_local()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("none (skipped for server rendering)"));

    assert!(out.join("despia/local.json").exists());
}

#[test]
fn test_skip_entry_flag_overrides_config() {
    let dir = tempdir().unwrap();
    write_dist(dir.path());
    fs::write(dir.path().join("despia.config.json"), r#"{"skipEntryHtml": true}"#).unwrap();

    despia_local()
        .current_dir(dir.path())
        .arg("--skip-entry-html=false")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry HTML: /index.html"));

    let content = fs::read_to_string(dir.path().join("dist/despia/local.json")).unwrap();
    let json: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["entry"], "/index.html");
    assert_eq!(json["assets"], serde_json::json!(["/assets/app.js"]));
}

#[test]
fn test_missing_directory_exits_with_one() {
    let dir = tempdir().unwrap();

    despia_local()
        .current_dir(dir.path())
        .arg("missing")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"))
        .stderr(predicate::str::contains("missing"));

    assert!(!dir.path().join("missing").exists());
}

#[test]
fn test_missing_flag_value_exits_with_one() {
    let dir = tempdir().unwrap();
    write_dist(dir.path());

    despia_local()
        .current_dir(dir.path())
        .args(["dist", "--output"])
        .assert()
        .code(1);

    assert!(!dir.path().join("dist/despia").exists());
}
