//!
//! A single point of a metric series.
//!

use chrono::DateTime;
use chrono::Utc;

use crate::model::document::entry::Entry;

///
/// A single point of a metric series.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Point {
    /// The benchmarked commit hash.
    pub commit: String,
    /// Unix timestamp of the run in milliseconds.
    pub date: u64,
    /// The measured value.
    pub value: f64,
}

impl Point {
    ///
    /// Creates a point for a value measured in the entry.
    ///
    pub fn new(entry: &Entry, value: f64) -> Self {
        Self {
            commit: entry.commit.id.clone(),
            date: entry.date,
            value,
        }
    }

    ///
    /// Returns the run time, if the timestamp is representable.
    ///
    pub fn time(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.date)
            .ok()
            .and_then(DateTime::from_timestamp_millis)
    }
}
