//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn short_help_flag_shows_usage() {
    cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn short_version_flag_shows_version() {
    cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn info_json_contains_expected_fields() {
    cmd()
        .arg("info")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\""))
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn info_help_shows_command_options() {
    cmd()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn short_quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn verbose_flag_accepted() {
    cmd().args(["--verbose", "info"]).assert().success();
}

#[test]
fn short_verbose_flag_accepted() {
    cmd().args(["-v", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_auto_accepted() {
    cmd().args(["--color", "auto", "info"]).assert().success();
}

#[test]
fn color_always_accepted() {
    cmd().args(["--color", "always", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Score Command
// =============================================================================

const SIMPLE: &str = "The cat sat on the mat.";

const DENSE: &str = "The implementation of the comprehensive organizational restructuring \
                     initiative necessitated the establishment of interdepartmental \
                     communication protocols.";

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), content).unwrap();
    tmp
}

#[test]
fn score_stdin_json_reports_every_metric() {
    let output = cmd()
        .args(["score", "--json"])
        .write_stdin(SIMPLE)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["scores"].as_object().unwrap().len(), 12);
    assert_eq!(json["statistics"]["words"], 6);
    assert_eq!(json["statistics"]["sentences"], 1);
    let ease = json["scores"]["flesch-reading-ease"].as_f64().unwrap();
    assert!((ease - 116.145).abs() < 1e-9);
}

#[test]
fn score_file_argument_prints_named_scores() {
    let tmp = write_temp(SIMPLE);
    cmd()
        .args(["score", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flesch Reading Ease"))
        .stdout(predicate::str::contains("Coleman-Liau Index"))
        .stdout(predicate::str::contains("RIX"));
}

#[test]
fn score_dash_reads_stdin() {
    cmd()
        .args(["score", "-", "-m", "fkgl"])
        .write_stdin(SIMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Flesch-Kincaid Grade Level"))
        .stdout(predicate::str::contains("Gunning Fog").not());
}

#[test]
fn score_selected_metrics_json() {
    let output = cmd()
        .args(["score", "--json", "--metric", "smog", "-m", "lix"])
        .write_stdin(SIMPLE)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    let scores = json["scores"].as_object().unwrap();
    assert_eq!(scores.len(), 2);
    assert!(scores.contains_key("smog"));
    assert!(scores.contains_key("lix"));
}

#[test]
fn score_empty_input_fails() {
    cmd()
        .arg("score")
        .write_stdin("   \n\t")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no scorable text"));
}

#[test]
fn score_unknown_metric_fails() {
    cmd()
        .args(["score", "-m", "fleschy"])
        .write_stdin(SIMPLE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn score_missing_file_fails() {
    cmd()
        .args(["score", "/nonexistent/readscore-input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn score_max_grade_pass() {
    cmd()
        .args(["score", "--max-grade", "8"])
        .write_stdin(SIMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"));
}

#[test]
fn score_max_grade_fail() {
    cmd()
        .args(["score", "--max-grade", "8"])
        .write_stdin(DENSE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("max: 8.0"));
}

#[test]
fn score_max_grade_fail_still_prints_json() {
    let output = cmd()
        .args(["score", "--json", "--max-grade", "8"])
        .write_stdin(DENSE)
        .assert()
        .failure();

    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json["over_max"], true);
}

#[test]
fn score_rejects_input_over_limit() {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::write(tmp.path().join(".readscore.toml"), "max_input_bytes = 8\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score"])
        .write_stdin(SIMPLE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn score_accepts_non_utf8_input() {
    let output = cmd()
        .args(["score", "--json", "-m", "fre"])
        .write_stdin(&b"The cat sat on the mat. Caf\xe9 is nice."[..])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json["statistics"]["words"], 9);
    assert_eq!(json["statistics"]["sentences"], 2);
    assert!(json["scores"]["flesch-reading-ease"].is_number());
}

// =============================================================================
// Stats Command
// =============================================================================

#[test]
fn stats_json_reports_counts() {
    let output = cmd()
        .args(["stats", "--json"])
        .write_stdin("The cat sat on the mat. The dog ran fast.")
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json["words"], 10);
    assert_eq!(json["sentences"], 2);
    assert_eq!(json["syllables"], 10);
    assert_eq!(json["words_per_sentence"], 5.0);
}

#[test]
fn stats_empty_input_reports_zeros() {
    let output = cmd()
        .args(["stats", "--json"])
        .write_stdin("")
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json["words"], 0);
    assert_eq!(json["sentences"], 0);
    assert!(json.get("words_per_sentence").is_none());
}

#[test]
fn stats_text_output_lists_counts() {
    let tmp = write_temp(SIMPLE);
    cmd()
        .args(["stats", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Words"))
        .stdout(predicate::str::contains("Complex words"));
}

// =============================================================================
// Syllables Command
// =============================================================================

#[test]
fn syllables_json_reports_each_word() {
    let output = cmd()
        .args(["syllables", "--json", "cake", "table", "readability"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"word": "cake", "syllables": 1},
            {"word": "table", "syllables": 2},
            {"word": "readability", "syllables": 5},
        ])
    );
}

#[test]
fn syllables_requires_a_word() {
    cmd()
        .arg("syllables")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

// =============================================================================
// Metrics Command
// =============================================================================

#[test]
fn metrics_lists_identifiers() {
    cmd()
        .arg("metrics")
        .assert()
        .success()
        .stdout(predicate::str::contains("flesch-reading-ease"))
        .stdout(predicate::str::contains("automated-readability-index"))
        .stdout(predicate::str::contains("grade-level"));
}

#[test]
fn metrics_json_includes_kind() {
    let output = cmd().args(["metrics", "--json"]).assert().success();

    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    let metrics = json.as_array().unwrap();
    assert_eq!(metrics.len(), 12);
    assert_eq!(metrics[0]["id"], "flesch-reading-ease");
    assert_eq!(metrics[0]["kind"], "ease");
    assert_eq!(metrics[11]["id"], "rix");
    assert_eq!(metrics[11]["kind"], "difficulty");
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_flag_shows_error() {
    cmd()
        .arg("--not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_flag_changes_directory() {
    // The -C flag should be accepted and work without error
    // We use a path that definitely exists
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
