//! Command execution against snapshot files on disk

use discovery_cli::{build_cli, execute, resolve_config, LogFormat};
use discovery_test_utils::{demo_snapshot, row};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn snapshot_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    serde_json::to_writer(&mut file, &demo_snapshot()).unwrap();
    file.flush().unwrap();
    file
}

fn run(args: &[&str]) -> anyhow::Result<String> {
    let argv = std::iter::once("discovery").chain(args.iter().copied());
    let matches = build_cli().try_get_matches_from(argv)?;
    let config = resolve_config(&matches)?;

    let mut out = Vec::new();
    execute(&matches, &config, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn score_reference_inputs() {
    let out = run(&["score", "--reach", "1000", "--impact", "3", "--confidence", "80", "--effort", "2"]).unwrap();
    assert!(out.starts_with("RICE score: 1200 (Very High Priority)"), "{out}");
}

#[test]
fn score_falls_back_to_configured_defaults() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[defaults]\nreach = 500\nimpact = 4\nconfidence = 50").unwrap();
    let path = config.path().to_str().unwrap();

    // 500 * 4 * 50 / (3 * 100) = 333.3
    let out = run(&["--config", path, "score", "--json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["score"], 333);
    assert_eq!(value["band"], "VeryHigh");
}

#[test]
fn score_rejects_out_of_range_input() {
    let err = run(&["score", "--impact", "9"]).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("impact"), "{chain}");
}

#[test]
fn matrix_text() {
    let file = snapshot_file();
    let out = run(&["matrix", "-s", file.path().to_str().unwrap()]).unwrap();

    assert!(out.contains("Quick Wins (0)"), "{out}");
    assert!(out.contains("Major Projects (1)"), "{out}");
    assert!(out.contains("Fill-ins (1)"), "{out}");
    assert!(out.contains("Not scored: 1"), "{out}");
}

#[test]
fn progress_json() {
    let file = snapshot_file();
    let out = run(&["progress", "--json", "-s", file.path().to_str().unwrap()]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["overall"]["rates"]["validationRate"], 60);
    assert_eq!(value["overall"]["rates"]["successRate"], 40);
    assert_eq!(value["perIdea"].as_array().unwrap().len(), 3);
    assert_eq!(value["perIdea"][0]["ideaId"], 1);
}

#[test]
fn progress_fails_on_corrupt_status() {
    let mut snapshot = demo_snapshot();
    snapshot.hypotheses.push(row(9, 1, "Maybe"));
    let mut file = NamedTempFile::new().unwrap();
    serde_json::to_writer(&mut file, &snapshot).unwrap();

    let err = run(&["progress", "-s", file.path().to_str().unwrap()]).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("Maybe"), "{chain}");
}

#[test]
fn rank_with_status_filter() {
    let file = snapshot_file();
    let path = file.path().to_str().unwrap();

    let out = run(&["rank", "-s", path]).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("[1] idea-1"), "{out}");

    let out = run(&["rank", "-s", path, "--status", "In Discovery"]).unwrap();
    assert_eq!(out.lines().count(), 1);
    assert!(out.contains("[2] idea-2"), "{out}");
}

#[test]
fn stats_json() {
    let file = snapshot_file();
    let out = run(&["stats", "--json", "-s", file.path().to_str().unwrap()]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["totalIdeas"], 3);
    assert_eq!(value["ideaValidationRate"], 33);
}

#[test]
fn reconcile_lists_stale_scores() {
    let file = snapshot_file();
    let out = run(&["reconcile", "-s", file.path().to_str().unwrap()]).unwrap();
    assert_eq!(out.trim(), "[2] idea-2: stored 300, recomputed 333");
}

#[test]
fn missing_snapshot_names_path() {
    let err = run(&["stats", "-s", "/nonexistent/snapshot.json"]).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/snapshot.json"));
}

#[test]
fn flags_override_config() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[logging]\nlevel = \"error\"\nformat = \"text\"").unwrap();

    let matches = build_cli()
        .try_get_matches_from([
            "discovery",
            "--config",
            config.path().to_str().unwrap(),
            "--log-format",
            "json",
            "-vv",
            "stats",
            "-s",
            "x.json",
        ])
        .unwrap();
    let resolved = resolve_config(&matches).unwrap();

    assert_eq!(resolved.logging.format, LogFormat::Json);
    assert_eq!(resolved.logging.level, "debug");
}
