//!
//! Shared test data.
//!

use std::path::Path;

use crate::input::Input;
use crate::model::document::entry::commit::person::Person;
use crate::model::document::entry::commit::Commit;
use crate::model::document::entry::measurement::Measurement;
use crate::model::document::entry::tool::Tool;
use crate::model::document::entry::Entry;
use crate::model::document::Document;

/// The sample log in the script layout.
pub const DATA: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/data.js"));

///
/// Parses the sample log.
///
pub fn input() -> Input {
    Input::parse(DATA, Path::new("fixtures/data.js")).expect("The sample log is valid")
}

///
/// Returns the sample document.
///
pub fn document() -> Document {
    input().document
}

///
/// Builds a bigger-is-better entry with the given measurements.
///
pub fn entry(id: &str, date: u64, benches: &[(&str, f64, &str)]) -> Entry {
    let person = Person {
        email: "ci@acme-chain.io".to_owned(),
        name: "CI".to_owned(),
        username: Some("ci".to_owned()),
        other: serde_json::Map::new(),
    };
    let commit = Commit {
        author: person.clone(),
        committer: person,
        distinct: None,
        id: id.to_owned(),
        message: format!("Commit {id}"),
        timestamp: "2023-06-14T10:00:00Z".to_owned(),
        tree_id: format!("tree-{id}"),
        url: format!("https://github.com/acme-chain/node/commit/{id}"),
        other: serde_json::Map::new(),
    };
    let benches = benches
        .iter()
        .map(|(name, value, unit)| Measurement::new(*name, *value, *unit))
        .collect();
    Entry::new(commit, date, Tool::CustomBiggerIsBetter, benches)
}
