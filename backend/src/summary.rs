//! Headline KPI figures for the dashboard landing view.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::models::{AdminRecord, EhsRecord, Month, MonthlySeries};

/// Direction of a month-over-month change.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn between(current: f64, previous: f64) -> Self {
        if current > previous {
            Trend::Up
        } else if current < previous {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }
}

/// A metric's value in the selected month against the month before.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthComparison {
    pub current: f64,
    pub previous: f64,
    pub trend: Trend,
}

impl MonthComparison {
    pub fn of(series: &MonthlySeries, month: Month) -> Self {
        let current = series.get(month);
        let previous = series.get(month.previous());
        Self {
            current,
            previous,
            trend: Trend::between(current, previous),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub month: Month,

    // yearly totals
    pub total_accidents: f64,
    pub total_hazards_reported: f64,
    pub total_near_misses: f64,
    pub total_electricity: f64,
    pub total_gas: f64,
    pub total_water: f64,
    pub total_working_hours: f64,
    pub total_resignations: f64,
    pub total_vacancies: f64,
    pub average_turnover: f64,

    pub accidents: MonthComparison,
    pub hazards_reported: MonthComparison,
    pub working_hours: MonthComparison,
}

/// Summarise both records for `month`. January compares against December
/// of the same series.
pub fn summarize(ehs: &EhsRecord, admin: &AdminRecord, month: Month) -> KpiSummary {
    let wh = &admin.working_hours;
    let hr = &admin.hr_metrics;
    KpiSummary {
        month,
        total_accidents: ehs.accidents.total(),
        total_hazards_reported: ehs.hazard_reporting.actual.total(),
        total_near_misses: ehs.near_misses.total(),
        total_electricity: ehs.electricity_consumed.total(),
        total_gas: ehs.gas_consumed.total(),
        total_water: ehs.water_consumption.total(),
        total_working_hours: wh.total_site.total(),
        total_resignations: hr.resignations.total(),
        total_vacancies: hr.vacant_positions.total(),
        average_turnover: hr.staff_turnover.average(),
        accidents: MonthComparison::of(&ehs.accidents, month),
        hazards_reported: MonthComparison::of(&ehs.hazard_reporting.actual, month),
        working_hours: MonthComparison::of(&wh.total_site, month),
    }
}

/// Calendar month of the local clock.
pub fn current_month() -> Month {
    Month::from_index(chrono::Local::now().month0() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed;

    #[test]
    fn test_trend_between() {
        assert_eq!(Trend::between(2.0, 1.0), Trend::Up);
        assert_eq!(Trend::between(1.0, 2.0), Trend::Down);
        assert_eq!(Trend::between(1.0, 1.0), Trend::Neutral);
    }

    #[test]
    fn test_seed_totals() {
        let summary = summarize(
            &seed::initial_ehs_record(),
            &seed::initial_admin_record(),
            Month::Mar,
        );
        assert_eq!(summary.total_accidents, 194.0);
        assert_eq!(summary.total_near_misses, 60.0);
        assert_eq!(summary.total_resignations, 28.0);
        assert_eq!(summary.average_turnover, 92.0 / 12.0);
    }

    #[test]
    fn test_month_over_month() {
        let summary = summarize(
            &seed::initial_ehs_record(),
            &seed::initial_admin_record(),
            Month::Jun,
        );
        // accidents: may 20 -> jun 12
        assert_eq!(summary.accidents.current, 12.0);
        assert_eq!(summary.accidents.previous, 20.0);
        assert_eq!(summary.accidents.trend, Trend::Down);
        assert_eq!(summary.working_hours.trend, Trend::Up);
    }

    #[test]
    fn test_january_compares_with_december() {
        let mut ehs = EhsRecord::default();
        ehs.accidents.set(Month::Jan, 3.0);
        ehs.accidents.set(Month::Dec, 3.0);
        let summary = summarize(&ehs, &AdminRecord::default(), Month::Jan);
        assert_eq!(summary.accidents.previous, 3.0);
        assert_eq!(summary.accidents.trend, Trend::Neutral);
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = summarize(&EhsRecord::default(), &AdminRecord::default(), Month::Feb);
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["month"], "feb");
        assert_eq!(json["accidents"]["trend"], "neutral");
        assert!(json.get("totalWorkingHours").is_some());
    }
}
