//!
//! Per-metric time series, as plotted by the dashboard.
//!

pub mod point;

use std::collections::HashMap;

use regex::Regex;

use crate::model::document::entry::Entry;

use self::point::Point;

///
/// The time series of a single metric across the runs of a suite.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Series {
    /// The metric name.
    pub name: String,
    /// The unit of the first occurrence of the metric.
    pub unit: String,
    /// The points in the order of runs.
    pub points: Vec<Point>,
}

impl Series {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, unit: String) -> Self {
        Self {
            name,
            unit,
            points: Vec::new(),
        }
    }

    ///
    /// Collects one series per distinct metric name, in the order of first appearance.
    ///
    /// Entries without the metric, and measurements with non-finite values, contribute no point.
    /// If `filter` is set, only metrics with matching names are collected.
    ///
    pub fn collect(entries: &[Entry], filter: Option<&Regex>) -> Vec<Self> {
        let mut series: Vec<Self> = Vec::new();
        let mut indexes: HashMap<&str, usize> = HashMap::new();

        for entry in entries.iter() {
            for measurement in entry.benches.iter() {
                if let Some(filter) = filter {
                    if !filter.is_match(measurement.name.as_str()) {
                        continue;
                    }
                }

                let index = *indexes
                    .entry(measurement.name.as_str())
                    .or_insert_with(|| {
                        series.push(Self::new(
                            measurement.name.clone(),
                            measurement.unit.clone(),
                        ));
                        series.len() - 1
                    });
                if !measurement.is_plottable() {
                    tracing::debug!(
                        metric = measurement.name.as_str(),
                        commit = entry.commit.short_id(),
                        "skipping a non-finite value"
                    );
                    continue;
                }
                series[index].points.push(Point::new(entry, measurement.value));
            }
        }

        series
    }

    ///
    /// Returns the latest point.
    ///
    pub fn latest(&self) -> Option<&Point> {
        self.points.last()
    }
}
