//!
//! A violated benchmark log invariant.
//!

///
/// The severity of a violation.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Unusual but tolerated by the dashboard.
    Warning,
    /// Breaks an invariant of the log.
    Error,
}

///
/// The kind of a violation.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    /// The run date is zero. Negative dates are rejected when the log is parsed.
    NonPositiveDate,
    /// The run date is older than the date of the previous entry.
    DateRegression {
        /// The date of the previous entry.
        previous: u64,
        /// The date of the entry.
        date: u64,
    },
    /// A measurement name occurs more than once in the entry.
    DuplicateMeasurement {
        /// The measurement name.
        name: String,
    },
    /// The entry has no measurements.
    EmptyBenches,
    /// A measurement value cannot be plotted.
    NonFiniteValue {
        /// The measurement name.
        name: String,
    },
    /// The entry repeats the run of the previous entry.
    DuplicateEntry {
        /// The commit hash of both entries.
        commit: String,
    },
    /// The `lastUpdate` field is older than the entry.
    LastUpdateBehind {
        /// The `lastUpdate` value.
        last_update: u64,
        /// The date of the entry.
        date: u64,
    },
}

impl Kind {
    ///
    /// Returns the severity of the violation kind.
    ///
    pub fn severity(&self) -> Severity {
        match self {
            Self::NonPositiveDate
            | Self::DateRegression { .. }
            | Self::DuplicateMeasurement { .. } => Severity::Error,
            Self::EmptyBenches
            | Self::NonFiniteValue { .. }
            | Self::DuplicateEntry { .. }
            | Self::LastUpdateBehind { .. } => Severity::Warning,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveDate => write!(f, "the run date is not positive"),
            Self::DateRegression { previous, date } => {
                write!(f, "the run date {date} precedes the previous date {previous}")
            }
            Self::DuplicateMeasurement { name } => {
                write!(f, "measurement `{name}` occurs more than once")
            }
            Self::EmptyBenches => write!(f, "there are no measurements"),
            Self::NonFiniteValue { name } => {
                write!(f, "measurement `{name}` has a non-finite value")
            }
            Self::DuplicateEntry { commit } => {
                write!(f, "commit {commit} repeats the run of the previous entry")
            }
            Self::LastUpdateBehind { last_update, date } => {
                write!(f, "`lastUpdate` {last_update} is older than the run date {date}")
            }
        }
    }
}

///
/// A violated benchmark log invariant, located at an entry.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The suite name.
    pub suite: String,
    /// The entry index within the suite.
    pub index: usize,
    /// The violation kind.
    pub kind: Kind,
}

impl Violation {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(suite: &str, index: usize, kind: Kind) -> Self {
        Self {
            suite: suite.to_owned(),
            index,
            kind,
        }
    }

    ///
    /// Returns the severity of the violation.
    ///
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.suite, self.index, self.kind)
    }
}
