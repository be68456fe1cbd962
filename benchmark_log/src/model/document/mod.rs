//!
//! The benchmark log document.
//!

#[cfg(test)]
mod tests;

pub mod entry;
pub mod error;
pub mod options;

use std::collections::BTreeMap;

use chrono::Utc;

use self::entry::Entry;
use self::error::Error;
use self::options::AppendOptions;

///
/// The benchmark log document.
///
/// Entries are grouped by suite, and each suite is kept in the order of appending,
/// which is the chronological order of benchmark runs. Entries are never modified
/// or removed once appended.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unix timestamp of the last write in milliseconds.
    pub last_update: u64,
    /// The benchmarked repository URL.
    pub repo_url: String,
    /// The entries grouped by suite name.
    pub entries: BTreeMap<String, Vec<Entry>>,
    /// Fields unknown to this model, kept verbatim.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Document {
    /// The suite name used by the dashboard action unless configured otherwise.
    pub const DEFAULT_SUITE: &'static str = "Benchmark";

    ///
    /// Creates an empty log for a repository.
    ///
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            last_update: 0,
            repo_url: repo_url.into(),
            entries: BTreeMap::new(),
            other: serde_json::Map::new(),
        }
    }

    ///
    /// Appends an entry to the end of a suite with the default options.
    ///
    pub fn append(&mut self, suite: &str, entry: Entry) -> Result<(), Error> {
        self.append_with(suite, entry, AppendOptions::default())
    }

    ///
    /// Appends an entry to the end of a suite, creating the suite if it is absent.
    ///
    /// The log is left untouched if the entry is rejected.
    ///
    pub fn append_with(
        &mut self,
        suite: &str,
        entry: Entry,
        options: AppendOptions,
    ) -> Result<(), Error> {
        entry.check().map_err(|reason| Error::MalformedEntry {
            commit: entry.commit.id.clone(),
            reason,
        })?;

        if let Some(previous) = self.entries.get(suite).and_then(|entries| entries.last()) {
            if entry.date < previous.date {
                if options.strict_order {
                    return Err(Error::OutOfOrder {
                        suite: suite.to_owned(),
                        previous: previous.date,
                        date: entry.date,
                    });
                }
                tracing::warn!(
                    suite,
                    commit = entry.commit.short_id(),
                    previous = previous.date,
                    date = entry.date,
                    "appending an entry older than the last one"
                );
            }
            if previous.is_same_run(&entry) {
                tracing::warn!(
                    suite,
                    commit = entry.commit.short_id(),
                    date = entry.date,
                    "appending a repeated run of the last entry"
                );
            }
        }

        self.last_update = if options.stamp_now {
            u64::try_from(Utc::now().timestamp_millis()).unwrap_or(entry.date)
        } else {
            entry.date
        };
        tracing::debug!(
            suite,
            commit = entry.commit.short_id(),
            date = entry.date,
            benches = entry.benches.len(),
            "entry appended"
        );
        self.entries.entry(suite.to_owned()).or_default().push(entry);
        Ok(())
    }

    ///
    /// Returns the entries of a suite in chronological order.
    ///
    /// # Errors
    ///
    /// If the suite is absent. An absent suite is never treated as an empty one.
    ///
    pub fn read(&self, suite: &str) -> Result<&[Entry], Error> {
        self.entries
            .get(suite)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::SuiteNotFound {
                suite: suite.to_owned(),
            })
    }

    ///
    /// Returns the latest entry of a suite.
    ///
    pub fn latest(&self, suite: &str) -> Result<Option<&Entry>, Error> {
        self.read(suite).map(|entries| entries.last())
    }

    ///
    /// Returns the entry preceding the latest one of a suite.
    ///
    pub fn previous(&self, suite: &str) -> Result<Option<&Entry>, Error> {
        self.read(suite)
            .map(|entries| entries.len().checked_sub(2).map(|index| &entries[index]))
    }

    ///
    /// Returns the suite names.
    ///
    pub fn suites(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    ///
    /// Returns the total number of entries in all suites.
    ///
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    ///
    /// Whether the log contains no entries.
    ///
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
