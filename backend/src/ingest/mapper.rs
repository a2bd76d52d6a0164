//! The Field Mapper: CSV rows in, partial record out.

use crate::models::{Month, MonthlySeries, PartialMonthlySeries};

use super::number::parse_lenient_number;
use super::reader::{read_rows, RawRow};
use super::rules::{match_metric, Vocabulary};

/// Result of mapping a batch of rows onto a partial record.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingOutcome<U> {
    /// Only fields whose metric name matched are populated
    pub update: U,
    /// Rows assigned to a field
    pub matched_rows: usize,
    /// Rows with an empty metric name
    pub skipped_rows: usize,
    /// Metric names that matched no rule, in file order
    pub unmatched: Vec<String>,
}

impl<U> MappingOutcome<U> {
    pub fn is_empty(&self) -> bool {
        self.matched_rows == 0
    }
}

/// Parse all twelve month cells of a row; bad or missing cells become `0`.
pub fn row_series(row: &RawRow) -> MonthlySeries {
    let mut series = MonthlySeries::zeroed();
    for month in Month::ALL {
        series.set(month, parse_lenient_number(row.cell(month)));
    }
    series
}

/// Map rows onto the partial record of `F`'s dataset.
///
/// Each matched row supplies all twelve months of its field; a later row for
/// the same field replaces the earlier one. Nothing here fails.
pub fn map_rows<F: Vocabulary>(rows: &[RawRow]) -> MappingOutcome<F::Update> {
    let mut outcome = MappingOutcome {
        update: F::Update::default(),
        matched_rows: 0,
        skipped_rows: 0,
        unmatched: Vec::new(),
    };

    for row in rows {
        let name = row.metric.trim();
        if name.is_empty() {
            outcome.skipped_rows += 1;
            continue;
        }

        match match_metric::<F>(name) {
            Some(field) => {
                let slot = field.update_slot_mut(&mut outcome.update);
                if slot.is_some() {
                    log::debug!("Metric row '{}' overrides an earlier {:?} row", name, field);
                }
                *slot = Some(PartialMonthlySeries::from(row_series(row)));
                outcome.matched_rows += 1;
            }
            None => {
                log::debug!("Dropping unrecognised metric row '{}'", name);
                outcome.unmatched.push(name.to_string());
            }
        }
    }

    outcome
}

/// Read a CSV document and map it; see [`read_rows`] and [`map_rows`].
pub fn map_csv<F: Vocabulary>(bytes: &[u8]) -> MappingOutcome<F::Update> {
    map_rows::<F>(&read_rows(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fields::{merge_update, populated_fields};
    use crate::models::{seed, AdminMetric, AdminUpdate, EhsMetric, MetricField};

    const HEADER: &str = "Metric,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec\n";

    fn csv(body: &str) -> Vec<u8> {
        format!("{}{}", HEADER, body).into_bytes()
    }

    #[test]
    fn test_unknown_metric_is_dropped() {
        let outcome = map_csv::<AdminMetric>(&csv("unknown metric,1,2,3,4,5,6,7,8,9,10,11,12\n"));

        assert_eq!(outcome.update, AdminUpdate::default());
        assert_eq!(outcome.matched_rows, 0);
        assert_eq!(outcome.unmatched, vec!["unknown metric".to_string()]);
        assert!(outcome.is_empty());

        let mut record = seed::initial_admin_record();
        let before = record.clone();
        let report = merge_update::<AdminMetric>(&mut record, &outcome.update);
        assert_eq!(report.fields_updated, 0);
        assert_eq!(record, before);
    }

    #[test]
    fn test_invalid_cells_parse_to_zero() {
        let outcome = map_csv::<EhsMetric>(&csv("Near misses,abc,,3,x,5,6,7,8,9,10,11,12\n"));
        let series = outcome.update.near_misses.unwrap();
        assert_eq!(series.jan, Some(0.0));
        assert_eq!(series.feb, Some(0.0));
        assert_eq!(series.mar, Some(3.0));
        assert_eq!(series.apr, Some(0.0));
    }

    #[test]
    fn test_missing_month_columns_parse_to_zero() {
        let outcome = map_csv::<EhsMetric>(b"Metric,Jan\nCarbon footprint,2.5\n");
        let series = outcome.update.carbon_footprint.unwrap();
        assert_eq!(series.jan, Some(2.5));
        assert_eq!(series.dec, Some(0.0));
    }

    #[test]
    fn test_a1_row_maps_to_overtime_not_total() {
        let outcome = map_csv::<AdminMetric>(&csv(
            "A1. Overtime Working Hours Management (MDM),5,5,5,5,5,5,5,5,5,5,5,5\n",
        ));
        assert_eq!(
            populated_fields::<AdminMetric>(&outcome.update),
            vec![AdminMetric::ManagementMdmOvertime]
        );
        let mdm = outcome
            .update
            .working_hours
            .as_ref()
            .and_then(|wh| wh.management_mdm.as_ref())
            .unwrap();
        assert!(mdm.total.is_none());
        assert_eq!(mdm.overtime.unwrap().jul, Some(5.0));
    }

    #[test]
    fn test_empty_metric_rows_are_skipped() {
        let outcome = map_csv::<AdminMetric>(&csv(",1,2\n   ,3\nVacant positions,1\n"));
        assert_eq!(outcome.skipped_rows, 2);
        assert_eq!(outcome.matched_rows, 1);
        assert!(outcome.unmatched.is_empty());
    }

    #[test]
    fn test_later_row_overwrites_earlier() {
        let outcome = map_csv::<EhsMetric>(&csv("Accidents,1\nTotal number of accidents,9\n"));
        assert_eq!(outcome.matched_rows, 2);
        let accidents = outcome.update.accidents.unwrap();
        assert_eq!(accidents.jan, Some(9.0));
        assert_eq!(accidents.feb, Some(0.0));
    }

    #[test]
    fn test_same_rows_map_differently_per_dataset() {
        let body = csv("Staff turnover %,4\nElectricity consumed,100\n");
        let admin = map_csv::<AdminMetric>(&body);
        let ehs = map_csv::<EhsMetric>(&body);

        assert_eq!(admin.matched_rows, 1);
        assert_eq!(admin.unmatched, vec!["Electricity consumed".to_string()]);
        assert_eq!(ehs.matched_rows, 1);
        assert_eq!(ehs.unmatched, vec!["Staff turnover %".to_string()]);
    }

    #[test]
    fn test_matched_row_fills_all_twelve_months() {
        let outcome = map_csv::<EhsMetric>(&csv("EHS walks,1,2,3,4,5,6,7,8,9,10,11,12\n"));
        let slot = EhsMetric::EhsWalks.update_slot(&outcome.update).unwrap();
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(slot.get(*month), Some(i as f64 + 1.0));
        }
    }
}
