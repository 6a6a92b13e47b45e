use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

const DEFAULT_STYLE: &str = "\
all
exclude_rule 'MD013'
exclude_rule 'MD036'
exclude_rule 'MD026'
exclude_rule 'MD029'
rule 'MD007', :indent => 2
";

#[test]
fn test_export_markdownlint_dry_run() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let style = temp_dir.path().join("style.rb");
    fs::write(&style, DEFAULT_STYLE).expect("Failed to write style");

    let output = Command::cargo_bin("mdlstyle")
        .unwrap()
        .args(["export", style.to_str().unwrap(), "--dry-run"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: Value = serde_json::from_str(&stdout).expect("Output is not valid JSON");

    assert_eq!(parsed["default"], true);
    assert_eq!(parsed["MD013"], false);
    assert_eq!(parsed["MD036"], false);
    assert_eq!(parsed["MD007"]["indent"], 2);
}

#[test]
fn test_export_rumdl_dry_run() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let style = temp_dir.path().join("style.rb");
    fs::write(&style, DEFAULT_STYLE).expect("Failed to write style");

    let output = Command::cargo_bin("mdlstyle")
        .unwrap()
        .args(["export", style.to_str().unwrap(), "--format", "rumdl", "--dry-run"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: toml::Table = toml::from_str(&stdout).expect("Output is not valid TOML");

    let disable: Vec<&str> = parsed["global"]["disable"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(disable, vec!["MD013", "MD036", "MD026", "MD029"]);
    assert_eq!(parsed["MD007"]["indent"].as_integer(), Some(2));
}

#[test]
fn test_export_writes_default_filename() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let style = temp_dir.path().join("style.rb");
    fs::write(&style, DEFAULT_STYLE).expect("Failed to write style");

    let mut cmd = Command::cargo_bin("mdlstyle").unwrap();
    cmd.args(["export", style.to_str().unwrap()]).current_dir(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Exported"))
        .stdout(predicate::str::contains(".markdownlint.json"));

    assert!(temp_dir.path().join(".markdownlint.json").exists());

    // The rumdl format picks its own default name
    let mut cmd = Command::cargo_bin("mdlstyle").unwrap();
    cmd.args(["export", style.to_str().unwrap(), "--format", "rumdl"])
        .current_dir(temp_dir.path());
    cmd.assert().success();
    assert!(temp_dir.path().join(".rumdl.toml").exists());
}

#[test]
fn test_export_custom_output_path() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let style = temp_dir.path().join("style.rb");
    let out = temp_dir.path().join("exported.json");
    fs::write(&style, DEFAULT_STYLE).expect("Failed to write style");

    let mut cmd = Command::cargo_bin("mdlstyle").unwrap();
    cmd.args([
        "export",
        style.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
    ]);

    cmd.assert().success();
    let content = fs::read_to_string(&out).expect("Failed to read output");
    let parsed: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["default"], true);
}

#[test]
fn test_export_format_aliases() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let style = temp_dir.path().join("style.rb");
    fs::write(&style, "all\n").expect("Failed to write style");

    for format in ["json", "markdownlint", "toml", "rumdl"] {
        let mut cmd = Command::cargo_bin("mdlstyle").unwrap();
        cmd.args(["export", style.to_str().unwrap(), "--format", format, "--dry-run"]);
        cmd.assert().success();
    }
}

#[test]
fn test_export_unknown_format() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let style = temp_dir.path().join("style.rb");
    fs::write(&style, "all\n").expect("Failed to write style");

    let mut cmd = Command::cargo_bin("mdlstyle").unwrap();
    cmd.args(["export", style.to_str().unwrap(), "--format", "ini"]);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("unknown export format 'ini'"));
}

#[test]
fn test_export_refuses_to_overwrite() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let style = temp_dir.path().join("style.rb");
    let out = temp_dir.path().join("out.json");
    fs::write(&style, "all\n").expect("Failed to write style");
    fs::write(&out, "{}").expect("Failed to write existing file");

    let mut cmd = Command::cargo_bin("mdlstyle").unwrap();
    cmd.args([
        "export",
        style.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
    ]);
    cmd.assert().code(2).stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "{}");

    let mut cmd = Command::cargo_bin("mdlstyle").unwrap();
    cmd.args([
        "export",
        style.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
        "--force",
    ]);
    cmd.assert().success();
    assert_ne!(fs::read_to_string(&out).unwrap(), "{}");
}

#[test]
fn test_export_broken_style_exits_one() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let style = temp_dir.path().join("style.rb");
    fs::write(&style, "all\nnonsense here\n").expect("Failed to write style");

    let mut cmd = Command::cargo_bin("mdlstyle").unwrap();
    cmd.args(["export", style.to_str().unwrap(), "--dry-run"]);

    cmd.assert().code(1).stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_export_import_round_trip_preserves_selection() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let style = temp_dir.path().join("style.rb");
    let exported = temp_dir.path().join("config.json");
    let reimported = temp_dir.path().join("back.rb");
    fs::write(&style, DEFAULT_STYLE).expect("Failed to write style");

    Command::cargo_bin("mdlstyle")
        .unwrap()
        .args([
            "export",
            style.to_str().unwrap(),
            "--output",
            exported.to_str().unwrap(),
        ])
        .assert()
        .success();

    Command::cargo_bin("mdlstyle")
        .unwrap()
        .args([
            "import",
            exported.to_str().unwrap(),
            "--output",
            reimported.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&reimported).unwrap();
    assert!(content.contains("all\n"));
    for id in ["MD013", "MD036", "MD026", "MD029"] {
        assert!(content.contains(&format!("exclude_rule '{id}'")), "missing {id}: {content}");
    }
    assert!(content.contains("rule 'MD007', :indent => 2\n"));
}
