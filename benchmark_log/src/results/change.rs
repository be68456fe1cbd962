//!
//! The change of a single metric between two runs.
//!

use crate::model::document::entry::tool::Direction;

///
/// The change of a single metric between the reference and candidate runs.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    /// The metric name.
    pub name: String,
    /// The metric unit in the candidate run.
    pub unit: String,
    /// The reference value.
    pub reference: f64,
    /// The candidate value.
    pub candidate: f64,
    /// The normalized ratio, where values above 1.0 mean a regression.
    /// Unset if the ratio is undefined.
    pub ratio: Option<f64>,
}

impl Change {
    ///
    /// Computes the change of a metric.
    ///
    pub fn new(
        name: String,
        unit: String,
        reference: f64,
        candidate: f64,
        direction: Direction,
    ) -> Self {
        let (numerator, denominator) = match direction {
            Direction::BiggerIsBetter => (reference, candidate),
            Direction::SmallerIsBetter => (candidate, reference),
        };
        let ratio = Some(numerator / denominator)
            .filter(|_| denominator != 0.0)
            .filter(|ratio| ratio.is_finite());

        Self {
            name,
            unit,
            reference,
            candidate,
            ratio,
        }
    }

    ///
    /// Whether the candidate is worse than the reference.
    ///
    pub fn is_regression(&self) -> bool {
        self.ratio.is_some_and(|ratio| ratio > 1.0)
    }

    ///
    /// Whether the candidate is better than the reference.
    ///
    pub fn is_improvement(&self) -> bool {
        self.ratio.is_some_and(|ratio| ratio < 1.0)
    }
}
