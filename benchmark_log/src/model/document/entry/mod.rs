//!
//! A single CI benchmark run.
//!

pub mod commit;
pub mod measurement;
pub mod tool;

use std::collections::HashSet;

use self::commit::Commit;
use self::measurement::Measurement;
use self::tool::Tool;

///
/// A single CI benchmark run.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entry {
    /// The benchmarked commit.
    pub commit: Commit,
    /// Unix timestamp of the run in milliseconds.
    pub date: u64,
    /// The comparison mode.
    pub tool: Tool,
    /// The measurements, in the order reported by the runner.
    pub benches: Vec<Measurement>,
    /// Fields unknown to this model, kept verbatim.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Entry {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(commit: Commit, date: u64, tool: Tool, benches: Vec<Measurement>) -> Self {
        Self {
            commit,
            date,
            tool,
            benches,
            other: serde_json::Map::new(),
        }
    }

    ///
    /// Returns the measurement with the given name.
    ///
    pub fn measurement(&self, name: &str) -> Option<&Measurement> {
        self.benches
            .iter()
            .find(|measurement| measurement.name == name)
    }

    ///
    /// Returns the first measurement name that occurs more than once.
    ///
    pub fn duplicate_measurement(&self) -> Option<&str> {
        let mut names = HashSet::with_capacity(self.benches.len());
        self.benches
            .iter()
            .map(|measurement| measurement.name.as_str())
            .find(|name| !names.insert(*name))
    }

    ///
    /// Whether both entries record the same run of the same commit.
    ///
    pub fn is_same_run(&self, other: &Self) -> bool {
        self.commit.id == other.commit.id && self.date == other.date
    }

    ///
    /// Checks that the entry is structurally well-formed.
    ///
    /// # Errors
    ///
    /// 1. The date is zero.
    /// 2. The commit hash is empty.
    /// 3. There are no measurements.
    /// 4. A measurement name is empty or duplicated.
    /// 5. A measurement value is not finite.
    ///
    pub fn check(&self) -> Result<(), String> {
        if self.date == 0 {
            return Err("the `date` field must be a positive timestamp".to_owned());
        }
        if self.commit.id.trim().is_empty() {
            return Err("the `commit.id` field is empty".to_owned());
        }
        if self.benches.is_empty() {
            return Err("the `benches` list is empty".to_owned());
        }
        if self
            .benches
            .iter()
            .any(|measurement| measurement.name.trim().is_empty())
        {
            return Err("a measurement has an empty `name`".to_owned());
        }
        if let Some(name) = self.duplicate_measurement() {
            return Err(format!("measurement `{name}` occurs more than once"));
        }
        if let Some(measurement) = self
            .benches
            .iter()
            .find(|measurement| !measurement.is_plottable())
        {
            return Err(format!(
                "measurement `{}` has a non-finite value",
                measurement.name
            ));
        }
        Ok(())
    }
}
