//!
//! Benchmark log operation error.
//!

///
/// Benchmark log operation error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested suite is absent.
    #[error("Suite `{suite}` not found")]
    SuiteNotFound {
        /// The requested suite name.
        suite: String,
    },
    /// The entry is not structurally well-formed.
    #[error("Malformed entry for commit `{commit}`: {reason}")]
    MalformedEntry {
        /// The commit hash of the entry.
        commit: String,
        /// The violated constraint.
        reason: String,
    },
    /// The entry is older than the last entry of the suite.
    #[error("Entry date {date} precedes the last date {previous} in suite `{suite}`")]
    OutOfOrder {
        /// The suite name.
        suite: String,
        /// The date of the last entry in the suite.
        previous: u64,
        /// The date of the appended entry.
        date: u64,
    },
}
