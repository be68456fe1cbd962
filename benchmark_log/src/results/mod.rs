//!
//! The comparison of the latest run against the previous one.
//!


pub mod change;

use std::collections::HashMap;

use colored::Colorize;
use regex::Regex;

use crate::model::document::entry::commit::Commit;
use crate::model::document::entry::tool::Direction;
use crate::model::document::entry::Entry;

use self::change::Change;

///
/// The comparison of a candidate run against a reference run.
///
#[derive(Debug, Clone)]
pub struct Comparison {
    /// The reference commit.
    pub reference_commit: Commit,
    /// The candidate commit.
    pub candidate_commit: Commit,
    /// The direction of improvement, taken from the candidate tool.
    pub direction: Direction,
    /// The changes of metrics present in both runs.
    pub changes: Vec<Change>,
    /// Metrics present only in the candidate run.
    pub added: Vec<String>,
    /// Metrics present only in the reference run.
    pub removed: Vec<String>,
    /// Whether the runs were measured on differently described machines.
    pub machine_changed: bool,
}

impl Comparison {
    /// The upstream action's default alert threshold, that is 200%.
    pub const DEFAULT_THRESHOLD: f64 = 2.0;

    /// Width of the printed table.
    const TABLE_WIDTH: usize = 53;

    ///
    /// Compares the candidate entry against the reference entry, pairing measurements by name.
    ///
    pub fn new(reference: &Entry, candidate: &Entry) -> Self {
        let direction = candidate.tool.direction();
        let references: HashMap<&str, f64> = reference
            .benches
            .iter()
            .map(|measurement| (measurement.name.as_str(), measurement.value))
            .collect();

        let mut changes = Vec::with_capacity(candidate.benches.len());
        let mut added = Vec::new();
        for measurement in candidate.benches.iter() {
            match references.get(measurement.name.as_str()) {
                Some(reference) => changes.push(Change::new(
                    measurement.name.clone(),
                    measurement.unit.clone(),
                    *reference,
                    measurement.value,
                    direction,
                )),
                None => added.push(measurement.name.clone()),
            }
        }
        let removed = reference
            .benches
            .iter()
            .filter(|measurement| candidate.measurement(measurement.name.as_str()).is_none())
            .map(|measurement| measurement.name.clone())
            .collect();

        let machine = |entry: &Entry| {
            entry
                .benches
                .iter()
                .find_map(|measurement| measurement.machine())
        };
        let machine_changed = match (machine(reference), machine(candidate)) {
            (Some(reference), Some(candidate)) => reference != candidate,
            _ => false,
        };

        Self {
            reference_commit: reference.commit.clone(),
            candidate_commit: candidate.commit.clone(),
            direction,
            changes,
            added,
            removed,
            machine_changed,
        }
    }

    ///
    /// Compares the latest entry against the closest earlier entry of another commit.
    ///
    /// Repeated runs of the latest commit are skipped, so that a run is never compared to itself.
    /// Returns `None` if there is nothing to compare with.
    ///
    pub fn latest(entries: &[Entry]) -> Option<Self> {
        let (candidate, earlier) = entries.split_last()?;
        let reference = earlier
            .iter()
            .rev()
            .find(|entry| entry.commit.id != candidate.commit.id)?;
        Some(Self::new(reference, candidate))
    }

    ///
    /// Keeps only the metrics with names matching the regular expression.
    ///
    pub fn retain_matching(&mut self, regex: &Regex) {
        self.changes.retain(|change| regex.is_match(change.name.as_str()));
        self.added.retain(|name| regex.is_match(name.as_str()));
        self.removed.retain(|name| regex.is_match(name.as_str()));
    }

    ///
    /// Sorts the changes from the worst to the best. Changes without a ratio go last.
    ///
    pub fn sort_worst(&mut self) {
        self.changes.sort_by(|a, b| match (a.ratio, b.ratio) {
            (Some(a), Some(b)) => b.total_cmp(&a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
    }

    ///
    /// Returns the changes with the regression ratio reaching the threshold.
    ///
    pub fn alerts(&self, threshold: f64) -> Vec<&Change> {
        self.changes
            .iter()
            .filter(|change| change.ratio.is_some_and(|ratio| ratio >= threshold))
            .collect()
    }

    ///
    /// Writes the comparison table.
    ///
    pub fn write_all<W>(&self, w: &mut W, suite: &str, threshold: f64) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        let caption = format!(
            "{} vs {}",
            self.reference_commit.short_id(),
            self.candidate_commit.short_id()
        );
        writeln!(
            w,
            "╔═╡ {} ╞{}╡ {} ╞═╗",
            suite.bright_white(),
            "═".repeat((Self::TABLE_WIDTH - 10).saturating_sub(suite.len() + caption.len())),
            caption.bright_white()
        )?;
        for change in self.changes.iter() {
            writeln!(
                w,
                "║ {:43} {:07} ║",
                change.name.bright_white(),
                Self::format_ratio(change.ratio)
            )?;
        }
        for name in self.added.iter() {
            writeln!(w, "║ {:43} {:>7} ║", name.bright_white(), "new".cyan())?;
        }
        for name in self.removed.iter() {
            writeln!(w, "║ {:43} {:>7} ║", name.bright_white(), "gone".yellow())?;
        }

        let alerts = self.alerts(threshold);
        if !alerts.is_empty() {
            writeln!(
                w,
                "╠═╡ {} ╞{}╣",
                "Alerts".bright_red(),
                "═".repeat(Self::TABLE_WIDTH - 10)
            )?;
            for change in alerts.into_iter() {
                writeln!(
                    w,
                    "║ {:43} {:07} ║",
                    format!("{} ({})", change.name, change.unit).bright_red(),
                    Self::format_ratio(change.ratio)
                )?;
            }
        }
        if self.machine_changed {
            writeln!(
                w,
                "║ {:51} ║",
                "The benchmarking machine has changed".yellow()
            )?;
        }
        writeln!(w, "╚{}╝", "═".repeat(Self::TABLE_WIDTH))?;

        Ok(())
    }

    ///
    /// Formats and colorizes a ratio as the improvement percentage.
    ///
    fn format_ratio(ratio: Option<f64>) -> colored::ColoredString {
        match ratio {
            Some(value) if value > 1.0 => format!("{:7.3}", 100.0 - value * 100.0).bright_red(),
            Some(value) if value == 1.0 => format!("{:7.3}", 100.0 - value * 100.0).white(),
            Some(value) => format!("{:7.3}", 100.0 - value * 100.0).green(),
            None => format!("{:>7}", "n/a").white(),
        }
    }
}
