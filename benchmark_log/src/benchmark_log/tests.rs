//!
//! The benchmark log binary tests.
//!

#![cfg(test)]

use std::path::Path;
use std::path::PathBuf;

const DATA: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/data.js"));

fn entry_json(id: &str, date: u64, tps: f64) -> String {
    serde_json::json!({
        "commit": {
            "author": { "email": "ci@acme-chain.io", "name": "CI", "username": "ci" },
            "committer": { "email": "ci@acme-chain.io", "name": "CI", "username": "ci" },
            "id": id,
            "message": "Bump runtime",
            "timestamp": "2023-06-14T10:00:00Z",
            "tree_id": "0000",
            "url": format!("https://github.com/acme-chain/node/commit/{id}"),
        },
        "date": date,
        "tool": "customBiggerIsBetter",
        "benches": [
            { "name": "Average TPS", "value": tps, "unit": "TPS" }
        ]
    })
    .to_string()
}

fn sample_log(directory: &Path) -> PathBuf {
    let path = directory.join("data.js");
    std::fs::write(path.as_path(), DATA).expect("Writing");
    path
}

fn load(path: &Path) -> benchmark_log::Input {
    benchmark_log::Input::try_from(path).expect("Valid log")
}

#[test]
fn append_grows_suite_and_keeps_layout() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let log_path = sample_log(directory.path());
    let entry_path = directory.path().join("entry.json");
    std::fs::write(entry_path.as_path(), entry_json("abc123", 1686700000000, 72.0))
        .expect("Writing");

    super::append(
        log_path.as_path(),
        vec![entry_path],
        "Benchmark",
        benchmark_log::AppendOptions::default(),
        None,
        None,
    )
    .expect("Appending");

    let input = load(log_path.as_path());
    assert!(matches!(input.layout, benchmark_log::Layout::Script { .. }));
    let entries = input.document.read("Benchmark").expect("Suite exists");
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[4].commit.id, "abc123");
    assert_eq!(input.document.last_update, 1686700000000);
}

#[test]
fn append_creates_log_with_repo_url() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let log_path = directory.path().join("data.json");
    let entry_path = directory.path().join("entry.json");
    std::fs::write(entry_path.as_path(), entry_json("abc123", 1686700000000, 72.0))
        .expect("Writing");

    super::append(
        log_path.as_path(),
        vec![entry_path],
        "Node",
        benchmark_log::AppendOptions::default(),
        Some("https://github.com/acme-chain/node".to_owned()),
        None,
    )
    .expect("Appending");

    let input = load(log_path.as_path());
    assert_eq!(input.layout, benchmark_log::Layout::Json);
    assert_eq!(input.document.repo_url, "https://github.com/acme-chain/node");
    assert_eq!(input.document.read("Node").expect("Suite exists").len(), 1);
}

#[test]
fn append_without_log_or_repo_url() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let log_path = directory.path().join("data.js");
    let entry_path = directory.path().join("entry.json");
    std::fs::write(entry_path.as_path(), entry_json("abc123", 1686700000000, 72.0))
        .expect("Writing");

    let result = super::append(
        log_path.as_path(),
        vec![entry_path],
        "Benchmark",
        benchmark_log::AppendOptions::default(),
        None,
        None,
    );
    assert!(result.is_err());
    assert!(!log_path.exists());
}

#[test]
fn append_rejected_leaves_log_untouched() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let log_path = sample_log(directory.path());
    let valid_path = directory.path().join("1.json");
    std::fs::write(valid_path.as_path(), entry_json("abc123", 1686700000000, 72.0))
        .expect("Writing");
    let stale_path = directory.path().join("2.json");
    std::fs::write(stale_path.as_path(), entry_json("def456", 1686500000000, 72.0))
        .expect("Writing");

    let result = super::append(
        log_path.as_path(),
        vec![valid_path, stale_path],
        "Benchmark",
        benchmark_log::AppendOptions::new(true, false),
        None,
        None,
    );
    assert!(result.is_err());
    assert_eq!(std::fs::read_to_string(log_path).expect("Reading"), DATA);
}

#[test]
fn read_missing_suite() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let log_path = sample_log(directory.path());

    let error = super::read(log_path.as_path(), "Missing", None).expect_err("Suite is absent");
    assert!(error.to_string().contains("Missing"));
}

#[test]
fn read_to_file() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let log_path = sample_log(directory.path());
    let output_path = directory.path().join("entries.json");

    super::read(log_path.as_path(), "Benchmark", Some(output_path.as_path())).expect("Reading");

    let entries: Vec<benchmark_log::Entry> =
        serde_json::from_str(std::fs::read_to_string(output_path).expect("Reading").as_str())
            .expect("Valid entries");
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].date, 1686587463156);
}

#[test]
fn validate_sample_log_has_only_warnings() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let log_path = sample_log(directory.path());

    super::validate(log_path.as_path()).expect("No errors");
}

#[test]
fn series_csv_to_file() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let log_path = sample_log(directory.path());
    let output_path = directory.path().join("series.csv");

    super::series(
        log_path.as_path(),
        "Benchmark".to_owned(),
        Some(regex::Regex::new("TPS").expect("Valid regex")),
        benchmark_log::OutputFormat::Csv,
        Some(output_path.as_path()),
    )
    .expect("Exporting");

    let csv = std::fs::read_to_string(output_path).expect("Reading");
    assert!(csv.lines().skip(1).all(|line| line.contains("TPS")));
    assert!(!csv.contains("Extrinsics"));
}

#[test]
fn series_xlsx_requires_output_path() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let log_path = sample_log(directory.path());

    let result = super::series(
        log_path.as_path(),
        "Benchmark".to_owned(),
        None,
        benchmark_log::OutputFormat::Xlsx,
        None,
    );
    assert!(result.is_err());
}

#[test]
fn compare_fails_on_alert() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let log_path = sample_log(directory.path());
    let entry_path = directory.path().join("entry.json");
    std::fs::write(entry_path.as_path(), entry_json("abc123", 1686700000000, 10.0))
        .expect("Writing");
    super::append(
        log_path.as_path(),
        vec![entry_path],
        "Benchmark",
        benchmark_log::AppendOptions::default(),
        None,
        None,
    )
    .expect("Appending");
    let output_path = directory.path().join("comparison.txt");

    let result = super::compare(
        log_path.as_path(),
        "Benchmark",
        None,
        benchmark_log::Comparison::DEFAULT_THRESHOLD,
        true,
        Some(output_path.as_path()),
    );
    let error = result.expect_err("TPS dropped sevenfold");
    assert!(error.to_string().contains("Average TPS"));
    assert!(std::fs::read_to_string(output_path)
        .expect("Reading")
        .contains("Average TPS"));
}

#[test]
fn compare_within_threshold() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let log_path = sample_log(directory.path());

    super::compare(
        log_path.as_path(),
        "Benchmark",
        None,
        benchmark_log::Comparison::DEFAULT_THRESHOLD,
        true,
        Some(directory.path().join("comparison.txt").as_path()),
    )
    .expect("No alerts");
}

#[test]
fn compare_replaces_report() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let log_path = sample_log(directory.path());
    let output_path = directory.path().join("comparison.txt");
    std::fs::write(output_path.as_path(), "stale report").expect("Writing");

    super::compare(
        log_path.as_path(),
        "Benchmark",
        None,
        benchmark_log::Comparison::DEFAULT_THRESHOLD,
        false,
        Some(output_path.as_path()),
    )
    .expect("Comparing");

    let report = std::fs::read_to_string(output_path).expect("Reading");
    assert!(!report.contains("stale report"));
    assert!(report.contains("3c2d7be vs f1e2d3c"));
    assert!(!report.contains('\u{1b}'));
    assert_eq!(
        std::fs::read_dir(directory.path())
            .expect("Listing")
            .count(),
        2
    );
}
