//!
//! Structural validation of the benchmark log.
//!


pub mod violation;

use crate::model::document::Document;

use self::violation::Kind;
use self::violation::Severity;
use self::violation::Violation;

///
/// Checks the invariants of every suite and returns the violations in the order of entries.
///
/// Repeated runs are reported but never removed.
///
/// Only a zero date can be reported as non-positive here. Negative and fractional dates
/// do not fit the model, so such a log fails to load with [`crate::InputError::Parsing`].
///
pub fn validate(document: &Document) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (suite, entries) in document.entries.iter() {
        for (index, entry) in entries.iter().enumerate() {
            if entry.date == 0 {
                violations.push(Violation::new(suite, index, Kind::NonPositiveDate));
            }
            if entry.benches.is_empty() {
                violations.push(Violation::new(suite, index, Kind::EmptyBenches));
            }
            if let Some(name) = entry.duplicate_measurement() {
                violations.push(Violation::new(
                    suite,
                    index,
                    Kind::DuplicateMeasurement {
                        name: name.to_owned(),
                    },
                ));
            }
            for measurement in entry.benches.iter() {
                if !measurement.is_plottable() {
                    violations.push(Violation::new(
                        suite,
                        index,
                        Kind::NonFiniteValue {
                            name: measurement.name.clone(),
                        },
                    ));
                }
            }

            let Some(previous) = index.checked_sub(1).map(|index| &entries[index]) else {
                continue;
            };
            if entry.date < previous.date {
                violations.push(Violation::new(
                    suite,
                    index,
                    Kind::DateRegression {
                        previous: previous.date,
                        date: entry.date,
                    },
                ));
            }
            if entry.is_same_run(previous) {
                violations.push(Violation::new(
                    suite,
                    index,
                    Kind::DuplicateEntry {
                        commit: entry.commit.id.clone(),
                    },
                ));
            }
        }

        if let Some((index, newest)) = entries
            .iter()
            .enumerate()
            .max_by_key(|(_, entry)| entry.date)
        {
            if document.last_update < newest.date {
                violations.push(Violation::new(
                    suite,
                    index,
                    Kind::LastUpdateBehind {
                        last_update: document.last_update,
                        date: newest.date,
                    },
                ));
            }
        }
    }

    violations
}

///
/// Returns the number of error-severity violations.
///
pub fn error_count(violations: &[Violation]) -> usize {
    violations
        .iter()
        .filter(|violation| violation.severity() == Severity::Error)
        .count()
}
