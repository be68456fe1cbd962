//!
//! Benchmark log output.
//!


pub mod csv;
pub mod format;
pub mod json;
pub mod xlsx;

use std::io::Write;
use std::path::Path;

use crate::input::layout::Layout;
use crate::model::document::Document;
use crate::output::csv::Csv;
use crate::output::format::Format;
use crate::output::json::Json;
use crate::output::xlsx::Xlsx;
use crate::series::Series;

///
/// The rendered output, ready to be written.
///
pub enum Output {
    /// A single text file.
    SingleFile(String),
    /// A single spreadsheet file.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
}

impl Output {
    ///
    /// Writes the output to a file, replacing it atomically.
    ///
    /// The content is written to a temporary file in the same directory, which is then
    /// renamed over the target, so readers never see a partially written file.
    ///
    pub fn write_to_file(self, path: &Path) -> anyhow::Result<()> {
        let bytes = self.into_bytes()?;
        let directory = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut file = tempfile::NamedTempFile::new_in(directory)
            .map_err(|error| anyhow::anyhow!("Benchmark file {path:?} writing: {error}"))?;
        file.write_all(bytes.as_slice())
            .map_err(|error| anyhow::anyhow!("Benchmark file {path:?} writing: {error}"))?;
        file.persist(path)
            .map_err(|error| anyhow::anyhow!("Benchmark file {path:?} writing: {}", error.error))?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "benchmark file written");
        Ok(())
    }

    ///
    /// Writes the output to the standard output.
    ///
    pub fn write_to_stdout(self) -> anyhow::Result<()> {
        let bytes = self.into_bytes()?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(bytes.as_slice())?;
        if !bytes.ends_with(b"\n") {
            writeln!(stdout)?;
        }
        Ok(())
    }

    ///
    /// Writes the output to a file if the path is set, or to the standard output otherwise.
    ///
    pub fn write(self, path: Option<&Path>) -> anyhow::Result<()> {
        match path {
            Some(path) => self.write_to_file(path),
            None => self.write_to_stdout(),
        }
    }

    ///
    /// Returns the raw file content.
    ///
    pub fn into_bytes(self) -> anyhow::Result<Vec<u8>> {
        match self {
            Output::SingleFile(content) => Ok(content.into_bytes()),
            Output::SingleFileXlsx(mut workbook) => workbook
                .save_to_buffer()
                .map_err(|error| anyhow::anyhow!("Workbook serializing: {error}")),
        }
    }
}

impl TryFrom<(Document, Layout)> for Output {
    type Error = anyhow::Error;

    fn try_from((document, layout): (Document, Layout)) -> Result<Self, Self::Error> {
        let json = Json::new(&document)?;
        Ok(Output::SingleFile(layout.wrap(json.content)))
    }
}

impl TryFrom<(String, Vec<Series>, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from(
        (suite, series, output_format): (String, Vec<Series>, Format),
    ) -> Result<Self, Self::Error> {
        Ok(match output_format {
            Format::Json => Json::new(&series)?.into(),
            Format::Csv => Csv::from(series).into(),
            Format::Xlsx => Xlsx::try_from((suite, series))?.into(),
        })
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}
