//!
//! Options of appending an entry to the log.
//!

///
/// Options of appending an entry to the log.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppendOptions {
    /// Rejects entries older than the last entry of the suite.
    /// Otherwise, such entries are appended with a warning.
    pub strict_order: bool,
    /// Sets `lastUpdate` to the current time instead of the entry date.
    pub stamp_now: bool,
}

impl AppendOptions {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(strict_order: bool, stamp_now: bool) -> Self {
        Self {
            strict_order,
            stamp_now,
        }
    }
}
