//! End-to-end tests: run the binary against on-disk fixture trees.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn run(workspace: &Path, extra_args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rscss-check-rs"))
        .arg("--workspace")
        .arg(workspace)
        .args(extra_args)
        .output()
        .expect("binary runs")
}

#[test]
fn clean_workspace_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir.path().join("styles/app.css"),
        ".search-form { color: red; }\n.search-form > .field { }\n",
    );

    let output = run(dir.path(), &[]);
    assert!(output.status.success(), "stderr: {:?}", output.stderr);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("0 errors in 1 file"), "stdout: {stdout}");
}

#[test]
fn violations_exit_nonzero_with_json_details() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir.path().join("app.css"),
        ".badcomponent { }\n.a-b .c { }\n",
    );

    let output = run(dir.path(), &["--output", "json"]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let diagnostics: serde_json::Value = serde_json::from_str(&stdout).expect("json output");
    let codes: Vec<&str> = diagnostics
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["code"].as_str().unwrap())
        .collect();
    assert_eq!(
        codes,
        vec!["invalid-component-name", "unexpected-descendant-combinator"]
    );
    assert_eq!(
        diagnostics[0]["data"]["selector"].as_str(),
        Some(".badcomponent")
    );
    assert_eq!(diagnostics[0]["start"]["line"].as_u64(), Some(1));
    assert_eq!(diagnostics[1]["start"]["line"].as_u64(), Some(2));
}

#[test]
fn config_file_changes_the_verdict() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir.path().join("rscss.config.json"),
        r#"{
            // Single-word components are fine when whitelisted.
            "componentWhitelist": ["container"],
            "maxDepth": 2
        }"#,
    );
    write(&dir.path().join("ok.css"), ".container { }\n");
    write(
        &dir.path().join("deep.css"),
        ".card-box > .row > .cell { }\n",
    );

    let output = run(dir.path(), &["--output", "machine"]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.contains("max-depth-exceeded"),
        "stdout: {stdout}"
    );
    assert!(
        !stdout.contains("invalid-component-name"),
        "whitelisted component reported: {stdout}"
    );
}

#[test]
fn ignore_globs_exclude_files() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("vendor/lib.css"), ".bad { }\n");
    write(&dir.path().join("legacy/old.css"), ".bad { }\n");
    write(&dir.path().join("src/app.css"), ".search-form { }\n");

    let output = run(dir.path(), &["--ignore", "**/legacy/**"]);
    assert!(
        output.status.success(),
        "stdout: {:?}",
        String::from_utf8_lossy(&output.stdout)
    );
}

#[test]
fn list_files_prints_without_checking() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("a.css"), ".bad { }\n");
    write(&dir.path().join("notes.txt"), "not css\n");

    let output = run(dir.path(), &["--list-files"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("a.css"));
    assert!(!stdout.contains("notes.txt"));
}

#[test]
fn invalid_custom_pattern_fails_at_startup() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir.path().join("rscss.config.json"),
        r#"{"component": {"type": "custom", "pattern": "("}}"#,
    );
    write(&dir.path().join("app.css"), ".search-form { }\n");

    let output = run(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.contains("invalid custom pattern for component names"),
        "stderr: {stderr}"
    );
}
