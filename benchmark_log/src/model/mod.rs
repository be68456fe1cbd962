//!
//! The benchmark log data model.
//!

pub mod document;
