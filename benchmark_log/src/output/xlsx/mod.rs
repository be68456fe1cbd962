//!
//! XLSX output format for metric series.
//!

pub mod worksheet;

use chrono::SecondsFormat;

use crate::series::point::Point;
use crate::series::Series;

use self::worksheet::Worksheet;

///
/// XLSX output format for metric series.
///
pub struct Xlsx {
    /// Worksheet with a column per metric.
    pub series_worksheet: Worksheet,
    /// Number of metric columns.
    pub metric_count: u16,
}

impl Xlsx {
    ///
    /// Creates a new XLSX workbook with a worksheet named after the suite.
    ///
    pub fn new(suite: &str) -> anyhow::Result<Self> {
        let commit_header = ("Commit", 44);
        let date_header = ("Date", 26);

        let series_worksheet = Worksheet::new(suite, vec![commit_header, date_header])?;

        Ok(Self {
            series_worksheet,
            metric_count: 0,
        })
    }

    ///
    /// Formats the run date for the row header.
    ///
    fn format_time(point: &Point) -> String {
        point
            .time()
            .map(|time| time.to_rfc3339_opts(SecondsFormat::Secs, true))
            .unwrap_or_else(|| point.date.to_string())
    }

    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        workbook.push_worksheet(self.series_worksheet.into_inner());
        workbook
    }
}

impl TryFrom<(String, Vec<Series>)> for Xlsx {
    type Error = anyhow::Error;

    fn try_from((suite, series): (String, Vec<Series>)) -> Result<Self, Self::Error> {
        let mut xlsx = Self::new(suite.as_str())?;

        let mut runs: Vec<&Point> = series.iter().flat_map(|series| series.points.iter()).collect();
        runs.sort_by_key(|point| point.date);
        for point in runs.into_iter() {
            xlsx.series_worksheet.add_run_row(
                point.commit.as_str(),
                point.date,
                Self::format_time(point).as_str(),
            )?;
        }

        for Series { name, unit, points } in series.into_iter() {
            let metric_id = xlsx.metric_count;
            xlsx.metric_count += 1;
            xlsx.series_worksheet
                .add_metric_column(name.as_str(), unit.as_str(), metric_id)?;

            for point in points.into_iter() {
                xlsx.series_worksheet.write_value(
                    point.commit.as_str(),
                    point.date,
                    Self::format_time(&point).as_str(),
                    metric_id,
                    point.value,
                )?;
            }
        }

        xlsx.series_worksheet
            .set_medians(xlsx.metric_count as usize)?;

        Ok(xlsx)
    }
}
