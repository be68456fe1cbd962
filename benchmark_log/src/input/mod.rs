//!
//! Benchmark log input.
//!


pub mod error;
pub mod layout;

use std::path::Path;
use std::path::PathBuf;

use crate::model::document::entry::Entry;
use crate::model::document::Document;

use self::error::Error as InputError;
use self::layout::Layout;

///
/// A benchmark log read from a file, together with its layout.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    /// The parsed document.
    pub document: Document,
    /// The layout to write the document back with.
    pub layout: Layout,
}

impl Input {
    ///
    /// Parses the log text, reporting errors against the given path.
    ///
    pub fn parse(text: &str, path: &Path) -> Result<Self, InputError> {
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let (layout, body) = Layout::detect(text).map_err(|reason| InputError::Assignment {
            reason,
            path: path.to_path_buf(),
        })?;
        let document: Document =
            serde_json::from_str(body).map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        tracing::debug!(
            path = %path.display(),
            %layout,
            suites = document.entries.len(),
            entries = document.len(),
            "benchmark log parsed"
        );
        Ok(Self { document, layout })
    }
}

impl TryFrom<&Path> for Input {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = read_to_string(path)?;
        Self::parse(text.as_str(), path)
    }
}

///
/// Entries produced by a benchmark run, to be appended to the log.
///
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum EntryReport {
    /// Several entries in the order of appending.
    Multiple(Vec<Entry>),
    /// A single entry.
    Single(Box<Entry>),
}

impl EntryReport {
    ///
    /// Returns the entries in the order of appending.
    ///
    pub fn into_entries(self) -> Vec<Entry> {
        match self {
            Self::Single(entry) => vec![*entry],
            Self::Multiple(entries) => entries,
        }
    }

    ///
    /// Resolves the entry file paths.
    ///
    /// A single directory path is expanded to all JSON files inside it, sorted by path.
    ///
    pub fn resolve_paths(paths: Vec<PathBuf>) -> anyhow::Result<Vec<PathBuf>> {
        match paths.as_slice() {
            [] => anyhow::bail!("No entry files provided. Use `--entry` to specify entry files."),
            [directory] if directory.is_dir() => {
                let resolution_pattern = format!("{}/**/*.json", directory.to_string_lossy());
                let mut paths: Vec<PathBuf> = glob::glob(resolution_pattern.as_str())?
                    .filter_map(Result::ok)
                    .collect();
                paths.sort();
                if paths.is_empty() {
                    anyhow::bail!("Directory {directory:?} contains no JSON entry files");
                }
                Ok(paths)
            }
            _ => Ok(paths),
        }
    }
}

impl TryFrom<&Path> for EntryReport {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = read_to_string(path)?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        serde_json::from_str(text.as_str()).map_err(|error| InputError::Parsing {
            error,
            path: path.to_path_buf(),
        })
    }
}

///
/// Reads the whole file.
///
fn read_to_string(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|error| InputError::Reading {
        error,
        path: path.to_path_buf(),
    })
}
