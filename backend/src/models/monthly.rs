//! Twelve-slot monthly series, the atomic unit of every dashboard metric.
//!
//! A [`MonthlySeries`] always carries a value for each calendar month; a
//! [`PartialMonthlySeries`] carries only the months an update supplies and is
//! merged slot by slot into a full series.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar month, January first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Zero-based position, January = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Month at a zero-based position; wraps modulo 12.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// JSON key (`"jan"`).
    pub fn key(self) -> &'static str {
        match self {
            Month::Jan => "jan",
            Month::Feb => "feb",
            Month::Mar => "mar",
            Month::Apr => "apr",
            Month::May => "may",
            Month::Jun => "jun",
            Month::Jul => "jul",
            Month::Aug => "aug",
            Month::Sep => "sep",
            Month::Oct => "oct",
            Month::Nov => "nov",
            Month::Dec => "dec",
        }
    }

    /// CSV column header (`"Jan"`).
    pub fn label(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// The month before this one; January wraps to December.
    pub fn previous(self) -> Self {
        Self::from_index(self.index() + 11)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("Unknown month: {}", s))
    }
}

/// A value for each of the twelve months.
///
/// Serialized as `{"jan": .., "feb": .., ..}`. Keys missing on input read as `0`.
/// Values are never range-checked: negatives and fractions are kept as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlySeries {
    pub jan: f64,
    pub feb: f64,
    pub mar: f64,
    pub apr: f64,
    pub may: f64,
    pub jun: f64,
    pub jul: f64,
    pub aug: f64,
    pub sep: f64,
    pub oct: f64,
    pub nov: f64,
    pub dec: f64,
}

impl MonthlySeries {
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Build from values ordered January to December.
    pub fn from_array(values: [f64; 12]) -> Self {
        let [jan, feb, mar, apr, may, jun, jul, aug, sep, oct, nov, dec] = values;
        Self {
            jan,
            feb,
            mar,
            apr,
            may,
            jun,
            jul,
            aug,
            sep,
            oct,
            nov,
            dec,
        }
    }

    pub fn to_array(&self) -> [f64; 12] {
        [
            self.jan, self.feb, self.mar, self.apr, self.may, self.jun, self.jul, self.aug,
            self.sep, self.oct, self.nov, self.dec,
        ]
    }

    pub fn get(&self, month: Month) -> f64 {
        *self.slot(month)
    }

    pub fn set(&mut self, month: Month, value: f64) {
        *self.slot_mut(month) = value;
    }

    /// `(month, value)` pairs, January first.
    pub fn iter(&self) -> impl Iterator<Item = (Month, f64)> + '_ {
        Month::ALL.iter().map(move |m| (*m, self.get(*m)))
    }

    pub fn total(&self) -> f64 {
        self.to_array().iter().sum()
    }

    pub fn average(&self) -> f64 {
        self.total() / 12.0
    }

    fn slot(&self, month: Month) -> &f64 {
        match month {
            Month::Jan => &self.jan,
            Month::Feb => &self.feb,
            Month::Mar => &self.mar,
            Month::Apr => &self.apr,
            Month::May => &self.may,
            Month::Jun => &self.jun,
            Month::Jul => &self.jul,
            Month::Aug => &self.aug,
            Month::Sep => &self.sep,
            Month::Oct => &self.oct,
            Month::Nov => &self.nov,
            Month::Dec => &self.dec,
        }
    }

    fn slot_mut(&mut self, month: Month) -> &mut f64 {
        match month {
            Month::Jan => &mut self.jan,
            Month::Feb => &mut self.feb,
            Month::Mar => &mut self.mar,
            Month::Apr => &mut self.apr,
            Month::May => &mut self.may,
            Month::Jun => &mut self.jun,
            Month::Jul => &mut self.jul,
            Month::Aug => &mut self.aug,
            Month::Sep => &mut self.sep,
            Month::Oct => &mut self.oct,
            Month::Nov => &mut self.nov,
            Month::Dec => &mut self.dec,
        }
    }
}

/// Month values supplied by an update. `None` (absent key or JSON `null`)
/// leaves the live value untouched on merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialMonthlySeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jan: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub may: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jun: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jul: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aug: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sep: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nov: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dec: Option<f64>,
}

impl PartialMonthlySeries {
    pub fn get(&self, month: Month) -> Option<f64> {
        match month {
            Month::Jan => self.jan,
            Month::Feb => self.feb,
            Month::Mar => self.mar,
            Month::Apr => self.apr,
            Month::May => self.may,
            Month::Jun => self.jun,
            Month::Jul => self.jul,
            Month::Aug => self.aug,
            Month::Sep => self.sep,
            Month::Oct => self.oct,
            Month::Nov => self.nov,
            Month::Dec => self.dec,
        }
    }

    pub fn set(&mut self, month: Month, value: f64) {
        let slot = match month {
            Month::Jan => &mut self.jan,
            Month::Feb => &mut self.feb,
            Month::Mar => &mut self.mar,
            Month::Apr => &mut self.apr,
            Month::May => &mut self.may,
            Month::Jun => &mut self.jun,
            Month::Jul => &mut self.jul,
            Month::Aug => &mut self.aug,
            Month::Sep => &mut self.sep,
            Month::Oct => &mut self.oct,
            Month::Nov => &mut self.nov,
            Month::Dec => &mut self.dec,
        };
        *slot = Some(value);
    }

    pub fn is_empty(&self) -> bool {
        Month::ALL.iter().all(|m| self.get(*m).is_none())
    }

    /// Overwrite each supplied month in `target`, keeping the rest.
    ///
    /// Returns the number of slots whose value actually changed.
    pub fn merge_into(&self, target: &mut MonthlySeries) -> usize {
        let mut changed = 0;
        for month in Month::ALL {
            if let Some(value) = self.get(month) {
                if target.get(month) != value {
                    changed += 1;
                }
                target.set(month, value);
            }
        }
        changed
    }
}

impl From<MonthlySeries> for PartialMonthlySeries {
    fn from(series: MonthlySeries) -> Self {
        let mut partial = PartialMonthlySeries::default();
        for (month, value) in series.iter() {
            partial.set(month, value);
        }
        partial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_to_twelve() -> MonthlySeries {
        MonthlySeries::from_array([
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0,
        ])
    }

    #[test]
    fn test_month_order_and_keys() {
        assert_eq!(Month::ALL.len(), 12);
        assert_eq!(Month::Jan.index(), 0);
        assert_eq!(Month::Dec.index(), 11);
        assert_eq!(Month::Mar.key(), "mar");
        assert_eq!(Month::Mar.label(), "Mar");
        assert_eq!(Month::Jan.previous(), Month::Dec);
        assert_eq!(Month::Jul.previous(), Month::Jun);
    }

    #[test]
    fn test_month_from_str_is_case_insensitive() {
        assert_eq!("jan".parse::<Month>().unwrap(), Month::Jan);
        assert_eq!("SEP".parse::<Month>().unwrap(), Month::Sep);
        assert_eq!(" Oct ".parse::<Month>().unwrap(), Month::Oct);
        assert!("january".parse::<Month>().is_err());
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut series = MonthlySeries::zeroed();
        series.set(Month::Aug, -2.5);
        assert_eq!(series.get(Month::Aug), -2.5);
        assert_eq!(series.to_array()[7], -2.5);
        assert_eq!(series.total(), -2.5);
    }

    #[test]
    fn test_missing_json_keys_default_to_zero() {
        let series: MonthlySeries = serde_json::from_str(r#"{"jan": 4, "dec": 9.5}"#).unwrap();
        assert_eq!(series.jan, 4.0);
        assert_eq!(series.feb, 0.0);
        assert_eq!(series.dec, 9.5);
    }

    #[test]
    fn test_partial_merge_is_month_scoped() {
        let mut live = one_to_twelve();
        let mut partial = PartialMonthlySeries::default();
        partial.set(Month::Jan, 99.0);

        let changed = partial.merge_into(&mut live);

        assert_eq!(changed, 1);
        assert_eq!(
            live.to_array(),
            [99.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]
        );
    }

    #[test]
    fn test_partial_null_means_absent() {
        let partial: PartialMonthlySeries =
            serde_json::from_str(r#"{"jan": null, "feb": 7}"#).unwrap();
        assert_eq!(partial.jan, None);
        assert_eq!(partial.feb, Some(7.0));

        let json = serde_json::to_value(partial).unwrap();
        assert_eq!(json, serde_json::json!({"feb": 7.0}));
    }

    #[test]
    fn test_unchanged_values_are_not_counted() {
        let mut live = one_to_twelve();
        let full = PartialMonthlySeries::from(one_to_twelve());
        assert_eq!(full.merge_into(&mut live), 0);
        assert!(!full.is_empty());
        assert!(PartialMonthlySeries::default().is_empty());
    }
}
