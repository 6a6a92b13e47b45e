use assert_cmd::Command;
use serde_json::Value;
use std::fs;

#[test]
fn test_check_json_output_is_valid() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("style.rb");
    fs::write(&path, "all\nrule 'MD999'\ntag :bogus\n").unwrap();

    let output = Command::cargo_bin("mdlstyle")
        .unwrap()
        .args(["check", path.to_str().unwrap(), "--output", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);

    let parsed: Value = serde_json::from_str(&stdout).expect("Output is not valid JSON");
    let findings = parsed.as_array().expect("Output is not a JSON array");
    assert_eq!(findings.len(), 2);

    let first = &findings[0];
    assert_eq!(first["file"], path.to_str().unwrap());
    assert_eq!(first["line"], 2);
    assert_eq!(first["column"], 1);
    assert_eq!(first["kind"], "unknown-rule");
    assert_eq!(first["severity"], "warning");
    assert_eq!(first["message"], "unknown rule MD999");

    assert_eq!(findings[1]["kind"], "unknown-tag");
    assert_eq!(findings[1]["severity"], "warning");
}

#[test]
fn test_check_json_output_empty_array_for_clean_file() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("style.rb");
    fs::write(&path, "all\nexclude_rule 'MD013'\n").unwrap();

    let output = Command::cargo_bin("mdlstyle")
        .unwrap()
        .args(["check", path.to_str().unwrap(), "--output", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: Value = serde_json::from_str(&stdout).expect("Output is not valid JSON");
    assert_eq!(parsed, serde_json::json!([]));
}

#[test]
fn test_check_json_output_merges_files() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let a = tmp_dir.path().join("a.rb");
    let b = tmp_dir.path().join("b.rb");
    fs::write(&a, "all\nrule 'MD999'\n").unwrap();
    fs::write(&b, "all\nexclude_rule 'MD998'\n").unwrap();

    let output = Command::cargo_bin("mdlstyle")
        .unwrap()
        .args(["check", a.to_str().unwrap(), b.to_str().unwrap(), "--output", "json"])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: Value = serde_json::from_str(&stdout).expect("Output is not valid JSON");
    let findings = parsed.as_array().unwrap();
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0]["file"], a.to_str().unwrap());
    assert_eq!(findings[1]["file"], b.to_str().unwrap());
}

#[test]
fn test_resolve_json_output_shape() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("style.rb");
    fs::write(
        &path,
        "all\nexclude_rule 'MD013'\nexclude_rule 'MD036'\nrule 'MD007', :indent => 2\n",
    )
    .unwrap();

    let output = Command::cargo_bin("mdlstyle")
        .unwrap()
        .args(["resolve", path.to_str().unwrap(), "--output", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: Value = serde_json::from_str(&stdout).expect("Output is not valid JSON");

    assert_eq!(parsed["all"], true);
    assert_eq!(parsed["excluded"], serde_json::json!(["MD013", "MD036"]));

    let enabled = parsed["enabled"].as_array().unwrap();
    assert_eq!(enabled.len(), 37);

    let md007 = enabled
        .iter()
        .find(|rule| rule["id"] == "MD007")
        .expect("MD007 should be enabled");
    assert_eq!(md007["overrides"]["indent"], 2);

    // Rules without overrides leave the key out entirely
    let md001 = enabled.iter().find(|rule| rule["id"] == "MD001").unwrap();
    assert!(md001.get("overrides").is_none());
}

#[test]
fn test_rules_json_output_shape() {
    let output = Command::cargo_bin("mdlstyle")
        .unwrap()
        .args(["rules", "--output", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: Value = serde_json::from_str(&stdout).expect("Output is not valid JSON");
    let rules = parsed.as_array().unwrap();
    assert_eq!(rules.len(), 39);

    let md007 = rules.iter().find(|rule| rule["id"] == "MD007").unwrap();
    assert_eq!(md007["alias"], "ul-indent");
    assert!(md007["tags"].as_array().unwrap().iter().any(|t| t == "indentation"));
    let options = md007["options"].as_array().unwrap();
    let indent = options.iter().find(|opt| opt["name"] == "indent").unwrap();
    assert_eq!(indent["kind"], "integer");
    assert_eq!(indent["default"], 2);
}
