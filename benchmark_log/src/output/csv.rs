//!
//! Serializing metric series to CSV.
//!

use std::fmt::Write;

use chrono::SecondsFormat;

use crate::series::point::Point;
use crate::series::Series;

///
/// Serialize the series to CSV in the following format:
/// "name", "unit", "commit", "date", "value"
///
#[derive(Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl Csv {
    /// The header row.
    const HEADER: &'static str = r#""name", "unit", "commit", "date", "value""#;

    ///
    /// Estimate the length of a CSV line based on the expected maximum lengths of each field.
    ///
    fn estimate_csv_line_length() -> usize {
        let metric_name_estimated_max = 40;
        let unit_estimated_max = 20;
        let commit_length = 40;
        let date_length = 24;
        let value_estimated_max = 15;
        metric_name_estimated_max
            + unit_estimated_max
            + commit_length
            + date_length
            + value_estimated_max
    }

    ///
    /// Quotes a text field, doubling the inner quotes.
    ///
    fn quote(field: &str) -> String {
        format!("\"{}\"", field.replace('"', "\"\""))
    }

    ///
    /// Formats the run date as RFC 3339, falling back to the raw timestamp.
    ///
    fn format_date(point: &Point) -> String {
        point
            .time()
            .map(|time| time.to_rfc3339_opts(SecondsFormat::Millis, true))
            .unwrap_or_else(|| point.date.to_string())
    }
}

impl From<Vec<Series>> for Csv {
    fn from(series: Vec<Series>) -> Csv {
        let points: usize = series.iter().map(|series| series.points.len()).sum();
        let mut content = String::with_capacity((points + 1) * Self::estimate_csv_line_length());
        content.push_str(Self::HEADER);
        content.push('\n');

        for Series { name, unit, points } in series.into_iter() {
            let name = Self::quote(name.as_str());
            let unit = Self::quote(unit.as_str());
            for point in points.iter() {
                let commit = Self::quote(point.commit.as_str());
                let date = Self::quote(Self::format_date(point).as_str());
                let value = point.value;
                writeln!(&mut content, "{name}, {unit}, {commit}, {date}, {value}")
                    .expect("Always valid");
            }
        }

        Self { content }
    }
}
