//!
//! The benchmark log document tests.
//!

use super::error::Error;
use super::options::AppendOptions;
use super::Document;
use crate::testing;

#[test]
fn read_first_entry() {
    let document = testing::document();

    let entries = document.read("Benchmark").expect("Suite exists");
    let first = &entries[0];
    assert!(first.commit.id.starts_with("a816094"));
    assert_eq!(first.date, 1686587463156);
    assert_eq!(first.benches[0].value, 417.5);
    assert_eq!(first.benches[0].unit, "extrinsics/block");
    assert_eq!(first.benches[1].name, "Average TPS");
}

#[test]
fn read_missing_suite() {
    let document = testing::document();

    let result = document.read("benchmark");
    assert_eq!(
        result,
        Err(Error::SuiteNotFound {
            suite: "benchmark".to_owned()
        })
    );
}

#[test]
fn dates_positive_and_ordered() {
    let document = testing::document();

    for entries in document.entries.values() {
        assert!(entries.iter().all(|entry| entry.date > 0));
        assert!(entries.windows(2).all(|pair| pair[0].date <= pair[1].date));
    }
}

#[test]
fn measurement_names_unique() {
    let document = testing::document();

    for entry in document.entries.values().flatten() {
        assert_eq!(entry.duplicate_measurement(), None);
    }
}

#[test]
fn append_grows_by_one_and_keeps_prior_entries() {
    let mut document = testing::document();
    let before: Vec<String> = document
        .read("Benchmark")
        .expect("Suite exists")
        .iter()
        .map(|entry| serde_json::to_string(entry).expect("Always valid"))
        .collect();

    let entry = testing::entry(
        "77aa55cc",
        1686700000000,
        &[("Average TPS", 71.0, "tps"), ("ERC721 mint TPS", 30.0, "tps")],
    );
    document
        .append("Benchmark", entry.clone())
        .expect("Well-formed entry");

    let entries = document.read("Benchmark").expect("Suite exists");
    assert_eq!(entries.len(), before.len() + 1);
    for (index, serialized) in before.iter().enumerate() {
        let after = serde_json::to_string(&entries[index]).expect("Always valid");
        assert_eq!(&after, serialized);
    }
    assert_eq!(entries.last(), Some(&entry));
    assert_eq!(document.last_update, 1686700000000);
}

#[test]
fn append_creates_suite() {
    let mut document = Document::new("https://github.com/acme-chain/node");
    assert!(document.is_empty());

    let entry = testing::entry("0001", 10, &[("Average TPS", 1.0, "tps")]);
    document.append("Nightly", entry).expect("Well-formed entry");

    assert_eq!(document.suites().collect::<Vec<&str>>(), vec!["Nightly"]);
    assert_eq!(document.len(), 1);
    assert_eq!(
        document
            .latest("Nightly")
            .expect("Suite exists")
            .map(|entry| entry.date),
        Some(10)
    );
}

#[test]
fn append_rejects_malformed() {
    let mut document = testing::document();
    let snapshot = document.clone();

    let zero_date = testing::entry("0001", 0, &[("Average TPS", 1.0, "tps")]);
    let no_commit = testing::entry("", 10, &[("Average TPS", 1.0, "tps")]);
    let no_benches = testing::entry("0002", 10, &[]);
    let duplicate = testing::entry(
        "0003",
        1686700000000,
        &[("Average TPS", 1.0, "tps"), ("Average TPS", 2.0, "tps")],
    );
    let infinite = testing::entry("0004", 1686700000000, &[("Average TPS", f64::INFINITY, "tps")]);

    for entry in [zero_date, no_commit, no_benches, duplicate, infinite] {
        let result = document.append("Benchmark", entry);
        assert!(
            matches!(result, Err(Error::MalformedEntry { .. })),
            "{result:?}"
        );
    }
    assert_eq!(document, snapshot);
}

#[test]
fn append_out_of_order_lenient() {
    let mut document = testing::document();

    let entry = testing::entry("0001", 1000, &[("Average TPS", 1.0, "tps")]);
    document.append("Benchmark", entry).expect("Lenient by default");
    assert_eq!(document.read("Benchmark").expect("Suite exists").len(), 5);
    assert_eq!(document.last_update, 1000);
}

#[test]
fn append_out_of_order_strict() {
    let mut document = testing::document();

    let entry = testing::entry("0001", 1000, &[("Average TPS", 1.0, "tps")]);
    let result = document.append_with("Benchmark", entry, AppendOptions::new(true, false));
    assert_eq!(
        result,
        Err(Error::OutOfOrder {
            suite: "Benchmark".to_owned(),
            previous: 1686677001312,
            date: 1000,
        })
    );
    assert_eq!(document.read("Benchmark").expect("Suite exists").len(), 4);
}

#[test]
fn append_stamp_now() {
    let mut document = testing::document();

    let entry = testing::entry("0001", 1686700000000, &[("Average TPS", 1.0, "tps")]);
    document
        .append_with("Benchmark", entry, AppendOptions::new(false, true))
        .expect("Well-formed entry");
    assert!(document.last_update > 1686700000000);
}

#[test]
fn append_repeated_run_is_kept() {
    let mut document = testing::document();
    let last = document
        .latest("Benchmark")
        .expect("Suite exists")
        .cloned()
        .expect("Suite is not empty");

    document
        .append("Benchmark", last.clone())
        .expect("Repeated runs are not deduplicated");
    let entries = document.read("Benchmark").expect("Suite exists");
    assert_eq!(entries.len(), 5);
    assert!(entries[3].is_same_run(&entries[4]));
}

#[test]
fn latest_and_previous() {
    let mut document = Document::new("https://github.com/acme-chain/node");
    document
        .append("Node", testing::entry("aaa", 10, &[("TPS", 1.0, "TPS")]))
        .expect("Valid entry");
    assert_eq!(document.previous("Node").expect("Suite exists"), None);

    document
        .append("Node", testing::entry("bbb", 20, &[("TPS", 2.0, "TPS")]))
        .expect("Valid entry");
    let latest = document.latest("Node").expect("Suite exists").expect("Not empty");
    let previous = document.previous("Node").expect("Suite exists").expect("Two entries");
    assert_eq!(latest.commit.id, "bbb");
    assert_eq!(previous.commit.id, "aaa");
    assert_eq!(document.suites().collect::<Vec<&str>>(), vec!["Node"]);
    assert_eq!(
        document.previous("Missing"),
        Err(Error::SuiteNotFound {
            suite: "Missing".to_owned()
        })
    );
}
