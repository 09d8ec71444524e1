//! Integration tests for the translation progress tracker
//!
//! These tests drive the public library API end to end and run the compiled
//! binaries to check exactly what lands on stdout.

use std::process::{Command, Output};

use tempfile::TempDir;

use translation_progress::i18n::{Language, LanguageRegistry};
use translation_progress::progress::ProgressReport;

// ==================== Test Helpers ====================

/// Run a compiled binary with a clean configuration environment.
///
/// The binary runs inside `dir` so that a developer's own `.env` is never
/// picked up by `dotenvy`.
fn run_binary_in(dir: &TempDir, path: &str, envs: &[(&str, &str)]) -> Output {
    let mut command = Command::new(path);
    command
        .current_dir(dir.path())
        .env_remove("PROGRESS_FORMAT")
        .env_remove("TRANSLATION_FILE_EXT")
        .env_remove("RUST_LOG");
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().expect("Failed to run binary")
}

fn run_binary(path: &str, envs: &[(&str, &str)]) -> Output {
    let dir = TempDir::new().expect("Failed to create temp dir");
    run_binary_in(&dir, path, envs)
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr should be UTF-8")
}

const EXPECTED_OUTPUT: &str = "Completed: 11/25\n\
    Remaining (14): ko, tr, vi, th, id, hi, sv, no, da, fi, cs, ro, hu, el\n";

// ==================== Library Tests ====================

#[test]
fn test_report_matches_registry() {
    let report = ProgressReport::from_registry();
    let registry = LanguageRegistry::get();

    let remaining: Vec<_> = registry
        .list_remaining()
        .iter()
        .map(|lang| lang.code.to_string())
        .collect();

    assert_eq!(report.remaining, remaining);
    assert_eq!(report.completed, registry.list_completed().len() - 1);
}

#[test]
fn test_remaining_languages_are_not_completed() {
    for code in ProgressReport::from_registry().remaining {
        let language = Language::from_code(&code).expect("Remaining code should be registered");
        assert!(!language.is_completed(), "{} should not be completed", code);
        assert!(!language.is_canonical());
    }
}

// ==================== Binary Tests ====================

#[test]
fn test_binary_prints_two_lines() {
    let output = run_binary(env!("CARGO_BIN_EXE_translation-progress"), &[]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), EXPECTED_OUTPUT);
    assert_eq!(stdout_of(&output).lines().count(), 2);
}

#[test]
fn test_binary_is_quiet_by_default() {
    let output = run_binary(env!("CARGO_BIN_EXE_translation-progress"), &[]);

    assert!(output.status.success());
    assert!(stderr_of(&output).is_empty());
}

#[test]
fn test_binary_rust_log_info_shows_completion_rate() {
    let output = run_binary(
        env!("CARGO_BIN_EXE_translation-progress"),
        &[("RUST_LOG", "info")],
    );

    assert!(output.status.success());
    assert!(stderr_of(&output).contains("11 of 25 translations done (44.0%)"));
    // Logs never leak into the report
    assert_eq!(stdout_of(&output), EXPECTED_OUTPUT);
}

#[test]
fn test_binary_rust_log_crate_debug_shows_config() {
    let output = run_binary(
        env!("CARGO_BIN_EXE_translation-progress"),
        &[("RUST_LOG", "translation_progress=debug")],
    );

    assert!(output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Config:"));
    assert!(stderr.contains("translations done"));
    assert_eq!(stdout_of(&output), EXPECTED_OUTPUT);
}

#[test]
fn test_binary_reads_dotenv_from_working_dir() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(dir.path().join(".env"), "PROGRESS_FORMAT=json\n")
        .expect("Failed to write .env");

    let output = run_binary_in(&dir, env!("CARGO_BIN_EXE_translation-progress"), &[]);

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_str(stdout_of(&output).trim()).expect("stdout should be JSON");
    assert_eq!(json["completed"], 11);
}

#[test]
fn test_binary_is_idempotent() {
    let first = run_binary(env!("CARGO_BIN_EXE_translation-progress"), &[]);
    let second = run_binary(env!("CARGO_BIN_EXE_translation-progress"), &[]);

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), Some(0));
}

#[test]
fn test_binary_json_output() {
    let output = run_binary(
        env!("CARGO_BIN_EXE_translation-progress"),
        &[("PROGRESS_FORMAT", "json")],
    );

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_str(stdout_of(&output).trim()).expect("stdout should be JSON");
    assert_eq!(json["completed"], 11);
    assert_eq!(json["total"], 25);
    assert_eq!(json["remaining"].as_array().map(Vec::len), Some(14));
}

#[test]
fn test_binary_rejects_invalid_format() {
    let output = run_binary(
        env!("CARGO_BIN_EXE_translation-progress"),
        &[("PROGRESS_FORMAT", "xml")],
    );

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_pending_files_binary() {
    let output = run_binary(env!("CARGO_BIN_EXE_pending-files"), &[]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines[0], "Translation files to generate:");
    assert_eq!(lines[1], "- ko.ts");
    assert_eq!(lines.last(), Some(&"- el.ts"));
    assert_eq!(lines.len(), 15);
}

#[test]
fn test_pending_files_binary_custom_extension() {
    let output = run_binary(
        env!("CARGO_BIN_EXE_pending-files"),
        &[("TRANSLATION_FILE_EXT", ".json")],
    );

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("- sv.json\n"));
}

#[test]
fn test_pending_files_binary_rust_log_info() {
    let output = run_binary(env!("CARGO_BIN_EXE_pending-files"), &[("RUST_LOG", "info")]);

    assert!(output.status.success());
    assert!(stderr_of(&output).contains("14 translation files pending"));
    assert_eq!(stdout_of(&output).lines().count(), 15);
}
