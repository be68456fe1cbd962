//!
//! The benchmark log library.
//!

pub mod input;
pub mod model;
pub mod output;
pub mod results;
pub mod series;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::input::error::Error as InputError;
pub use crate::input::layout::Layout;
pub use crate::input::EntryReport;
pub use crate::input::Input;
pub use crate::model::document::entry::commit::person::Person;
pub use crate::model::document::entry::commit::Commit;
pub use crate::model::document::entry::measurement::machine::MachineInfo;
pub use crate::model::document::entry::measurement::Measurement;
pub use crate::model::document::entry::tool::Direction;
pub use crate::model::document::entry::tool::Tool;
pub use crate::model::document::entry::Entry;
pub use crate::model::document::error::Error as LogError;
pub use crate::model::document::options::AppendOptions;
pub use crate::model::document::Document;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::Output;
pub use crate::results::change::Change;
pub use crate::results::Comparison;
pub use crate::series::point::Point;
pub use crate::series::Series;
pub use crate::validation::validate;
pub use crate::validation::violation::Kind as ViolationKind;
pub use crate::validation::violation::Severity;
pub use crate::validation::violation::Violation;
