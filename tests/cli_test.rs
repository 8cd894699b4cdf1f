//! CLI contract tests
//!
//! Drives the built binary against the subject fixture: output formats,
//! stdin input, --output, config file handling, catalog export and init.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

fn bodycalc_bin() -> &'static str {
    env!("CARGO_BIN_EXE_bodycalc")
}

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/subjects.json")
}

/// Run bodycalc in `dir` with a clean logging environment
fn run_in(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(bodycalc_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run bodycalc");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

fn classify_json(dir: &Path, extra_args: &[&str]) -> serde_json::Value {
    let fixture = fixture();
    let mut args = vec!["classify", fixture.to_str().unwrap(), "--format", "json"];
    args.extend_from_slice(extra_args);
    let (code, stdout, stderr) = run_in(dir, &args);
    assert_eq!(code, 0, "classify failed: {}", stderr);
    serde_json::from_str(&stdout).expect("Invalid JSON")
}

fn labels(subject: &serde_json::Value) -> Vec<String> {
    subject["labels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l.as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// classify
// ============================================================================

#[test]
fn test_classify_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let v = classify_json(dir.path(), &[]);

    let subjects = v["subjects"].as_array().unwrap();
    assert_eq!(subjects.len(), 4, "only the malformed subject is skipped");
    assert_eq!(subjects[0]["id"], "101");
    assert_eq!(
        labels(&subjects[0]),
        vec![
            "BodyMassIndex.Healthy",
            "BreastSize.Medium",
            "BreastCup.D",
            "HipSize.Medium",
            "ButtSize.Medium",
            "HeightType.Average",
            "BodyShape.TopHourglass",
            "BodyType.Curvy",
        ]
    );
    assert_eq!(
        labels(&subjects[1]),
        vec![
            "BodyMassIndex.Healthy",
            "BreastSize.Small",
            "BreastCup.B",
            "HipSize.Medium",
            "ButtSize.Medium",
            "BodyShape.Hourglass",
            "BodyType.Fit",
        ]
    );
    // no measurements: BMI, height and body type still apply
    assert_eq!(subjects[2]["id"], "104");
    assert_eq!(
        labels(&subjects[2]),
        vec!["BodyMassIndex.Healthy", "HeightType.Average", "BodyType.Average"]
    );
    assert_eq!(
        labels(&subjects[3]),
        vec!["HipSize.Medium", "ButtSize.Medium", "BodyShape.Hourglass"]
    );

    let hourglass = v["aggregate"]["BodyShape.Hourglass"].as_array().unwrap();
    assert_eq!(hourglass.len(), 2);

    let diagnostics = v["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0]["subject_id"], "103");
    assert_eq!(diagnostics[0]["severity"], "warning");
    assert_eq!(diagnostics[1]["subject_id"], "104");
    assert_eq!(diagnostics[1]["severity"], "debug");
}

#[test]
fn test_classify_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(classify_json(dir.path(), &[]), classify_json(dir.path(), &[]));
}

#[test]
fn test_classify_text_output() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = fixture();
    let (code, stdout, _) = run_in(dir.path(), &["classify", fixture.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Jane Doe"));
    assert!(stdout.contains("Figure: Top Hourglass"));
    assert!(stdout.contains("could not parse measurements"));
}

#[test]
fn test_classify_warnings_go_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = fixture();
    let (code, stdout, stderr) = run_in(
        dir.path(),
        &["classify", fixture.to_str().unwrap(), "--format", "json"],
    );
    assert_eq!(code, 0);
    assert!(stderr.contains("Broken Entry (103)"));
    let _: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is pure JSON");
}

#[test]
fn test_classify_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(bodycalc_bin())
        .args(["classify", "-", "--format", "json"])
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run bodycalc");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"[{"id": "1", "name": "A", "measurements": "36-24-36"}]"#)
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        labels(&v["subjects"][0]),
        vec!["HipSize.Medium", "ButtSize.Medium", "BodyShape.Hourglass"]
    );
}

#[test]
fn test_classify_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = fixture();
    let (code, stdout, _) = run_in(
        dir.path(),
        &[
            "classify",
            fixture.to_str().unwrap(),
            "--format",
            "json",
            "--output",
            "result.json",
        ],
    );
    assert_eq!(code, 0);
    assert!(stdout.is_empty(), "report goes to the file, not stdout");

    let written = std::fs::read_to_string(dir.path().join("result.json")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(v["subjects"].as_array().unwrap().len(), 4);
}

#[test]
fn test_classify_invalid_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.json"), "{\"not\": \"a list\"}").unwrap();

    let (code, _, stderr) = run_in(dir.path(), &["classify", "bad.json"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("not a JSON array of subject records"));

    let (code, _, _) = run_in(dir.path(), &["classify", "missing.json"]);
    assert_ne!(code, 0);
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_restricts_categories() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("bodycalc.toml"),
        "categories = [\"body_type\", \"breast_cup\"]\n",
    )
    .unwrap();

    let v = classify_json(dir.path(), &[]);
    let subjects = v["subjects"].as_array().unwrap();
    assert_eq!(labels(&subjects[0]), vec!["BreastCup.D", "BodyType.Curvy"]);
    assert_eq!(labels(&subjects[1]), vec!["BreastCup.B", "BodyType.Fit"]);
    assert_eq!(labels(&subjects[2]), vec!["BodyType.Average"]);
    assert!(labels(&subjects[3]).is_empty());
}

#[test]
fn test_config_default_format() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("bodycalc.toml"),
        "[defaults]\nformat = \"json\"\n",
    )
    .unwrap();

    let fixture = fixture();
    let (code, stdout, _) = run_in(dir.path(), &["classify", fixture.to_str().unwrap()]);
    assert_eq!(code, 0);
    let _: serde_json::Value = serde_json::from_str(&stdout).expect("config selected JSON");
}

#[test]
fn test_explicit_config_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "categories = [\"height_type\"]\n").unwrap();

    let v = classify_json(dir.path(), &["--config", config.to_str().unwrap()]);
    assert_eq!(labels(&v["subjects"][0]), vec!["HeightType.Average"]);
}

#[test]
fn test_missing_explicit_config_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = fixture();
    let (code, _, stderr) = run_in(
        dir.path(),
        &["classify", fixture.to_str().unwrap(), "--config", "nope.toml"],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("Config file not found"));
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bodycalc.toml"), "categories = [[[").unwrap();

    let fixture = fixture();
    let (code, stdout, stderr) = run_in(
        dir.path(),
        &["classify", fixture.to_str().unwrap(), "--format", "json"],
    );
    assert_eq!(code, 0);
    assert!(stderr.contains("Failed to load"));
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(labels(&v["subjects"][0]).len(), 8);
}

#[test]
fn test_config_log_level_quiets_warnings() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("bodycalc.toml"),
        "[defaults]\nlog_level = \"error\"\n",
    )
    .unwrap();

    let fixture = fixture();
    let (code, _, stderr) = run_in(
        dir.path(),
        &["classify", fixture.to_str().unwrap(), "--format", "json"],
    );
    assert_eq!(code, 0);
    assert!(!stderr.contains("Broken Entry"));

    // the flag wins over the config
    let (_, _, stderr) = run_in(
        dir.path(),
        &[
            "classify",
            fixture.to_str().unwrap(),
            "--format",
            "json",
            "--log-level",
            "warn",
        ],
    );
    assert!(stderr.contains("Broken Entry"));
}

// ============================================================================
// catalog / init
// ============================================================================

#[test]
fn test_catalog_export() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_in(dir.path(), &["catalog"]);
    assert_eq!(code, 0);

    let entries: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entries.len(), 60);
    assert_eq!(entries[0]["alias_key"], "BodyMassIndex.SeverelyUnderweight");
    assert!(entries.iter().all(|e| e["description"]
        .as_str()
        .unwrap()
        .starts_with("[Managed By: PBC Plugin]\n")));

    let keys: Vec<&str> = entries
        .iter()
        .map(|e| e["alias_key"].as_str().unwrap())
        .collect();
    assert!(keys.contains(&"BreastCup.E"));
    assert!(keys.contains(&"BodyType.SSBBW"));
}

#[test]
fn test_catalog_respects_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("bodycalc.toml"),
        "categories = [\"hip_size\"]\n[catalog]\ndescription_prefix = \"\"\n",
    )
    .unwrap();

    let (code, stdout, _) = run_in(dir.path(), &["catalog"]);
    assert_eq!(code, 0);
    let entries: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[2]["display_name"], "Wide Hips");
    assert_eq!(entries[2]["description"], "Waist-to-hip ratio above 0.8.");
}

#[test]
fn test_catalog_text_listing() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_in(dir.path(), &["catalog", "--format", "text"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("BodyShape"));
    assert!(stdout.contains("Figure: Inverted Triangle"));
}

#[test]
fn test_init_writes_config_once() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_in(dir.path(), &["init"]);
    assert_eq!(code, 0);

    let config_path = dir.path().join("bodycalc.toml");
    let written = std::fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("categories"));

    std::fs::write(&config_path, "# mine\n").unwrap();
    let (code, stdout, _) = run_in(dir.path(), &["init"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("already exists"));
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "# mine\n");

    let (code, _, _) = run_in(dir.path(), &["init", "--force"]);
    assert_eq!(code, 0);
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), written);
}
