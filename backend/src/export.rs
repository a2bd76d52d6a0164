//! CSV export of the live records.
//!
//! Row labels are each field's canonical label, which the ingest rule tables
//! map back to the same field, so an exported file can be re-uploaded as is.

use std::fmt;

use csv::Writer;

use crate::models::{AdminMetric, AdminRecord, EhsMetric, EhsRecord, MetricField, Month};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer flush failed: {0}")]
    Flush(String),

    #[error("CSV output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

fn month_headers() -> impl Iterator<Item = &'static str> {
    Month::ALL.iter().map(|m| m.label())
}

fn format_value(value: f64) -> String {
    value.to_string()
}

fn finish(writer: Writer<Vec<u8>>) -> ExportResult<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.error().to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

fn write_metric_row<F: MetricField>(
    writer: &mut Writer<Vec<u8>>,
    prefix: Option<&str>,
    field: F,
    record: &F::Record,
) -> ExportResult<()> {
    let series = field.series(record);
    let mut row: Vec<String> = Vec::with_capacity(14);
    if let Some(prefix) = prefix {
        row.push(prefix.to_string());
    }
    row.push(field.label().to_string());
    row.extend(series.iter().map(|(_, v)| format_value(v)));
    writer.write_record(&row)?;
    Ok(())
}

/// One record as `Metric,Jan..Dec`, one row per field in export order.
pub fn record_to_csv<F: MetricField>(record: &F::Record) -> ExportResult<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(std::iter::once("Metric").chain(month_headers()))?;
    for field in F::all() {
        write_metric_row(&mut writer, None, *field, record)?;
    }
    finish(writer)
}

pub fn admin_csv(record: &AdminRecord) -> ExportResult<String> {
    record_to_csv::<AdminMetric>(record)
}

pub fn ehs_csv(record: &EhsRecord) -> ExportResult<String> {
    record_to_csv::<EhsMetric>(record)
}

/// Both records in one sheet, `Category,Metric,Jan..Dec`; EHS rows first.
pub fn dashboard_report_csv(ehs: &EhsRecord, admin: &AdminRecord) -> ExportResult<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(["Category", "Metric"].into_iter().chain(month_headers()))?;
    for field in EhsMetric::all() {
        write_metric_row(&mut writer, Some(field.category()), *field, ehs)?;
    }
    for field in AdminMetric::all() {
        write_metric_row(&mut writer, Some(field.category()), *field, admin)?;
    }
    finish(writer)
}

/// Attachment name for the combined report, e.g. `ehs-dashboard-2024-03-01.csv`.
pub fn report_file_name(date: chrono::NaiveDate) -> String {
    format!("ehs-dashboard-{}.csv", date.format("%Y-%m-%d"))
}

/// `Content-Disposition` value for a CSV attachment.
pub struct Attachment<'a>(pub &'a str);

impl fmt::Display for Attachment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attachment; filename=\"{}\"", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::map_csv;
    use crate::models::fields::merge_update;
    use crate::models::{seed, MonthlySeries};
    use proptest::prelude::*;

    #[test]
    fn test_admin_csv_layout() {
        let csv = admin_csv(&seed::initial_admin_record()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Metric,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Total Working Hours of Site (Total of A+B+C+D),54650,55780,56890,57900,58010,58120,58230,58340,58450,58560,58670,59770"
        );
        assert_eq!(csv.lines().count(), 1 + AdminMetric::all().len());
    }

    #[test]
    fn test_fractions_are_written_exactly() {
        let mut record = EhsRecord::default();
        record.carbon_footprint.set(Month::Feb, 0.1 + 0.2);
        record.carbon_footprint.set(Month::Mar, -3.25);
        let csv = ehs_csv(&record).unwrap();
        let row = csv
            .lines()
            .find(|l| l.starts_with("Carbon Footprint"))
            .unwrap();
        assert_eq!(row, "Carbon Footprint,0,0.30000000000000004,-3.25,0,0,0,0,0,0,0,0,0");
    }

    #[test]
    fn test_dashboard_report_has_category_column() {
        let csv = dashboard_report_csv(
            &seed::initial_ehs_record(),
            &seed::initial_admin_record(),
        )
        .unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "Category,Metric,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec"
        );
        assert!(lines[1].starts_with("EHS Core Metrics,Total Number of Accidents,12,"));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("HR Metrics,Staff Turnover %,5,")));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("Training & Hazards,Target Leading Indicator Index (LII),125,")));
        assert_eq!(
            lines.len(),
            1 + EhsMetric::all().len() + AdminMetric::all().len()
        );
    }

    #[test]
    fn test_report_file_name() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(report_file_name(date), "ehs-dashboard-2024-03-01.csv");
        assert_eq!(
            Attachment("kpi.csv").to_string(),
            "attachment; filename=\"kpi.csv\""
        );
    }

    #[test]
    fn test_seed_records_round_trip_through_mapper() {
        let admin = seed::initial_admin_record();
        let outcome = map_csv::<AdminMetric>(admin_csv(&admin).unwrap().as_bytes());
        assert_eq!(outcome.matched_rows, AdminMetric::all().len());
        assert!(outcome.unmatched.is_empty());
        let mut rebuilt = AdminRecord::default();
        merge_update::<AdminMetric>(&mut rebuilt, &outcome.update);
        assert_eq!(rebuilt, admin);

        let ehs = seed::initial_ehs_record();
        let outcome = map_csv::<EhsMetric>(ehs_csv(&ehs).unwrap().as_bytes());
        assert_eq!(outcome.matched_rows, EhsMetric::all().len());
        let mut rebuilt = EhsRecord::default();
        merge_update::<EhsMetric>(&mut rebuilt, &outcome.update);
        assert_eq!(rebuilt, ehs);
    }

    fn finite_series() -> impl Strategy<Value = MonthlySeries> {
        prop::array::uniform12(-1.0e12f64..1.0e12).prop_map(MonthlySeries::from_array)
    }

    proptest! {
        #[test]
        fn prop_admin_round_trip_is_exact(values in prop::collection::vec(finite_series(), 16)) {
            let mut record = AdminRecord::default();
            for (field, series) in AdminMetric::all().iter().zip(values) {
                *field.series_mut(&mut record) = series;
            }
            let csv = admin_csv(&record).unwrap();
            let outcome = map_csv::<AdminMetric>(csv.as_bytes());
            let mut rebuilt = AdminRecord::default();
            merge_update::<AdminMetric>(&mut rebuilt, &outcome.update);
            prop_assert_eq!(rebuilt, record);
        }

        #[test]
        fn prop_ehs_round_trip_is_exact(values in prop::collection::vec(finite_series(), 18)) {
            let mut record = EhsRecord::default();
            for (field, series) in EhsMetric::all().iter().zip(values) {
                *field.series_mut(&mut record) = series;
            }
            let csv = ehs_csv(&record).unwrap();
            let outcome = map_csv::<EhsMetric>(csv.as_bytes());
            let mut rebuilt = EhsRecord::default();
            merge_update::<EhsMetric>(&mut rebuilt, &outcome.update);
            prop_assert_eq!(rebuilt, record);
        }
    }
}
