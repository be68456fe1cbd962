//!
//! XLSX worksheet for metric series.
//!

use std::collections::HashMap;

///
/// XLSX worksheet for metric series.
///
/// Each row is a benchmark run, and each column after the headers is a metric.
///
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// Run indexes in the worksheet.
    pub rows: HashMap<(String, u64), u32>,
    /// Header names and their column widths.
    pub headers: Vec<(&'static str, usize)>,
}

impl Worksheet {
    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: usize = 16;
    /// Maximum length of a worksheet name.
    const NAME_MAX_LENGTH: usize = 31;

    ///
    /// Creates a new worksheet with the given name.
    ///
    pub fn new(name: &str, headers: Vec<(&'static str, usize)>) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(Self::sanitize_name(name))?;

        for (header_index, (header_name, column_width)) in headers.iter().enumerate() {
            worksheet.write_with_format(
                0,
                header_index as u16,
                header_name.to_owned(),
                &Self::worksheet_caption_format(),
            )?;
            worksheet.set_column_width(header_index as u16, *column_width as f64)?;
        }

        Ok(Self {
            worksheet,
            rows: HashMap::new(),
            headers,
        })
    }

    ///
    /// Adds a new column for a metric.
    ///
    pub fn add_metric_column(
        &mut self,
        name: &str,
        unit: &str,
        metric_id: u16,
    ) -> anyhow::Result<()> {
        let column_index = (self.headers.len() as u16) + metric_id;
        self.worksheet
            .set_column_width(column_index, Self::VALUE_COLUMN_WIDTH as f64)?;
        self.worksheet.write_with_format(
            0,
            column_index,
            format!("{name}\n({unit})"),
            &Self::column_header_format(),
        )?;
        Ok(())
    }

    ///
    /// Adds a new row for a run if it does not exist yet.
    ///
    pub fn add_run_row(&mut self, commit: &str, date: u64, time: &str) -> anyhow::Result<u32> {
        let row_identifier = (commit.to_owned(), date);
        if let Some(index) = self.rows.get(&row_identifier) {
            return Ok(*index);
        }

        let row_index = (self.rows.len() as u32) + 1;
        self.rows.insert(row_identifier, row_index);
        self.worksheet.write_with_format(
            row_index,
            0,
            commit.to_owned(),
            &Self::row_header_format(),
        )?;
        self.worksheet.write_with_format(
            row_index,
            1,
            time.to_owned(),
            &Self::row_header_format(),
        )?;
        Ok(row_index)
    }

    ///
    /// Writes a value to the row of a run, adding the row if necessary.
    ///
    pub fn write_value(
        &mut self,
        commit: &str,
        date: u64,
        time: &str,
        metric_id: u16,
        value: f64,
    ) -> anyhow::Result<()> {
        let row_index = self.add_run_row(commit, date, time)?;
        self.worksheet.write_with_format(
            row_index,
            (self.headers.len() as u16) + metric_id,
            value,
            &Self::value_format(),
        )?;
        Ok(())
    }

    ///
    /// Sets the median row for each metric column.
    ///
    pub fn set_medians(&mut self, column_count: usize) -> anyhow::Result<()> {
        if self.rows.is_empty() || column_count == 0 {
            return Ok(());
        }
        let last_data_row_index = self.rows.len() + 1;
        let summary_row_index = last_data_row_index as u32;

        for column_index in 0..self.headers.len() {
            let caption = if column_index == self.headers.len() - 1 {
                "Median"
            } else {
                ""
            };
            self.worksheet.write_with_format(
                summary_row_index,
                column_index as u16,
                caption,
                &Self::row_header_summary_format(),
            )?;
        }

        for column_index in 0..column_count {
            let column_name = Self::column_identifier((self.headers.len() + column_index) as u16);
            let formula = format!("MEDIAN({column_name}2:{column_name}{last_data_row_index})");
            self.worksheet.write_formula_with_format(
                summary_row_index,
                (self.headers.len() + column_index) as u16,
                formula.as_str(),
                &Self::value_format(),
            )?;
        }

        Ok(())
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the alphabetical column identifier by its zero-based index.
    ///
    pub fn column_identifier(index: u16) -> String {
        let mut identifier = String::new();
        let mut index = u32::from(index) + 1;

        while index > 0 {
            let remainder = (index - 1) % 26;
            identifier.insert(0, (b'A' + remainder as u8) as char);
            index = (index - 1) / 26;
        }

        identifier
    }

    ///
    /// Replaces the characters forbidden in worksheet names and truncates the name.
    ///
    pub fn sanitize_name(name: &str) -> String {
        let name: String = name
            .chars()
            .map(|character| match character {
                '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
                character => character,
            })
            .take(Self::NAME_MAX_LENGTH)
            .collect();
        let name = name.trim_matches('\'');
        if name.is_empty() {
            "Series".to_owned()
        } else {
            name.to_owned()
        }
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn worksheet_caption_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_bold()
            .set_font_size(16)
            .set_font_color("#FFFFFF")
            .set_background_color("#4C6EF5")
            .set_align(rust_xlsxwriter::FormatAlign::Center)
            .set_align(rust_xlsxwriter::FormatAlign::VerticalCenter)
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_bold()
            .set_font_size(12)
            .set_font_color("#1E1E1E")
            .set_background_color("#EEF3FF")
            .set_align(rust_xlsxwriter::FormatAlign::Center)
            .set_align(rust_xlsxwriter::FormatAlign::Top)
            .set_text_wrap()
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_font_size(12)
            .set_font_color("#1E1E1E")
            .set_background_color("#DDE6FF")
            .set_align(rust_xlsxwriter::FormatAlign::Left)
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_summary_format() -> rust_xlsxwriter::Format {
        Self::row_header_format()
            .set_font_size(16)
            .set_bold()
            .set_align(rust_xlsxwriter::FormatAlign::Right)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_font_size(12)
            .set_font_color("#000000")
            .set_background_color("#FFFFFF")
            .set_align(rust_xlsxwriter::FormatAlign::Right)
            .set_border(rust_xlsxwriter::FormatBorder::None)
            .set_num_format("0.000")
    }
}

#[cfg(test)]
mod tests {
    use super::Worksheet;

    #[test]
    fn column_identifier() {
        assert_eq!(Worksheet::column_identifier(0), "A");
        assert_eq!(Worksheet::column_identifier(2), "C");
        assert_eq!(Worksheet::column_identifier(25), "Z");
        assert_eq!(Worksheet::column_identifier(26), "AA");
        assert_eq!(Worksheet::column_identifier(701), "ZZ");
        assert_eq!(Worksheet::column_identifier(702), "AAA");
    }

    #[test]
    fn sanitize_name() {
        assert_eq!(Worksheet::sanitize_name("Benchmark"), "Benchmark");
        assert_eq!(Worksheet::sanitize_name("tps/block [ci]"), "tps_block _ci_");
        assert_eq!(Worksheet::sanitize_name(&"x".repeat(40)).len(), 31);
        assert_eq!(Worksheet::sanitize_name("''"), "Series");
    }
}
