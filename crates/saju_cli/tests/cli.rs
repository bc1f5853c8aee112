//! End-to-end checks of the `saju` binary.

use std::path::PathBuf;
use std::process::{Command, Output};

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/solar_terms_sample.json")
}

fn run(args: &[&str]) -> Output {
    run_with_env(args, &[])
}

fn run_with_env(args: &[&str], vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_saju"))
        .args(args)
        .env_remove("SAJU__SOLAR_TERMS_PATH")
        .env_remove("SAJU__HARMONY_PRIORITY")
        .env_remove("SAJU__LUCK_PILLAR_COUNT")
        .envs(vars.iter().copied())
        .output()
        .expect("binary should run")
}

/// Sample index path, or `None` (after a skip notice) when it is absent.
fn sample_terms() -> Option<String> {
    let path = sample_path();
    if !path.exists() {
        eprintln!("Skipping: solar_terms_sample.json not found");
        return None;
    }
    Some(path.to_string_lossy().into_owned())
}

#[test]
fn analyze_prints_json() {
    let out = run(&["analyze", "庚辰 乙酉 癸未 庚申"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["pillars"]["day"]["stem"], "癸");
    assert_eq!(json["strength"]["label"], "strong");
}

#[test]
fn ten_god_of_characters() {
    let out = run(&["ten-god", "癸", "庚"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "정인 (seal)");

    let out = run(&["ten-god", "癸", "X"]);
    assert!(!out.status.success());
}

#[test]
fn pillars_with_sample_index() {
    let Some(terms) = sample_terms() else {
        return;
    };
    let out = run(&["pillars", "--terms", terms.as_str(), "--date", "2000-09-22 16:00"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("庚辰 乙酉 癸未 庚申"));
    assert_eq!(lines.next(), Some("경진 을유 계미 경신"));
}

#[test]
fn missing_index_is_fatal() {
    let out = run(&["pillars", "--terms", "/nonexistent/terms.json", "--date", "2000-09-22 16:00"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to load solar-term index"));
}

#[test]
fn no_index_configured_is_fatal() {
    let out = run(&["pillars", "--date", "2000-09-22 16:00"]);
    assert!(!out.status.success());
}

#[test]
fn index_path_from_environment() {
    let Some(terms) = sample_terms() else {
        return;
    };
    let out = run_with_env(
        &["pillars", "--date", "2000-09-22 16:00"],
        &[("SAJU__SOLAR_TERMS_PATH", terms.as_str())],
    );
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("庚辰 乙酉 癸未 庚申"));
}

#[test]
fn luck_count_from_environment() {
    let Some(terms) = sample_terms() else {
        return;
    };
    let args = [
        "luck", "--terms", terms.as_str(), "--date", "2000-09-22 16:00", "--gender", "male",
    ];
    let out = run_with_env(&args, &[("SAJU__LUCK_PILLAR_COUNT", "3")]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["pillars"].as_array().map(Vec::len), Some(3));

    // An explicit flag wins over the environment.
    let mut with_flag = args.to_vec();
    with_flag.extend(["--count", "5"]);
    let out = run_with_env(&with_flag, &[("SAJU__LUCK_PILLAR_COUNT", "3")]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["pillars"].as_array().map(Vec::len), Some(5));
}

#[test]
fn annual_extreme_range_fails_cleanly() {
    let out = run(&[
        "annual",
        "--from=-2147483648",
        "--to=2147483647",
        "--day-stem",
        "癸",
    ]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error:"));

    let out = run(&["annual", "--from", "2024", "--to", "2025", "--day-stem", "癸"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(2));
}

#[test]
fn lunar_calendar_is_refused() {
    let out = run(&[
        "chart",
        "--date",
        "2000-08-24 16:00",
        "--gender",
        "male",
        "--calendar",
        "lunar",
    ]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("convert the date to solar first"));
}
