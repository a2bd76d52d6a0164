//! Administrative / HR dataset: working-hours breakdown and HR metrics.

use serde::{Deserialize, Serialize};

use super::monthly::{Month, MonthlySeries, PartialMonthlySeries};

/// Working hours of one worker category.
///
/// `total` is expected to equal `overtime + routine`, but nothing enforces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoursBreakdown {
    pub total: MonthlySeries,
    pub overtime: MonthlySeries,
    pub routine: MonthlySeries,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkingHours {
    pub total_site: MonthlySeries,
    #[serde(rename = "managementMDM")]
    pub management_mdm: HoursBreakdown,
    pub management_contractual: HoursBreakdown,
    #[serde(rename = "nonManagementMDM")]
    pub non_management_mdm: HoursBreakdown,
    pub non_management_contractual: HoursBreakdown,
}

impl WorkingHours {
    /// The four worker categories in report order (A, B, C, D).
    pub fn categories(&self) -> [(&'static str, &HoursBreakdown); 4] {
        [
            ("managementMDM", &self.management_mdm),
            ("managementContractual", &self.management_contractual),
            ("nonManagementMDM", &self.non_management_mdm),
            ("nonManagementContractual", &self.non_management_contractual),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HrMetrics {
    pub resignations: MonthlySeries,
    pub vacant_positions: MonthlySeries,
    pub staff_turnover: MonthlySeries,
}

/// Full administrative record held by the KPI store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdminRecord {
    pub working_hours: WorkingHours,
    pub hr_metrics: HrMetrics,
}

/// A month where the working-hours arithmetic does not add up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyIssue {
    /// `"totalSite"` or the worker category key
    pub scope: String,
    pub month: Month,
    pub expected: f64,
    pub actual: f64,
}

const CONSISTENCY_TOLERANCE: f64 = 1e-6;

impl AdminRecord {
    /// Months where a category's `total` differs from `overtime + routine`,
    /// or where `totalSite` differs from the sum of the category totals.
    ///
    /// Report-only; merges never reject inconsistent data.
    pub fn consistency_issues(&self) -> Vec<ConsistencyIssue> {
        let mut issues = Vec::new();
        let categories = self.working_hours.categories();

        for (scope, breakdown) in categories.iter() {
            for month in Month::ALL {
                let expected = breakdown.overtime.get(month) + breakdown.routine.get(month);
                let actual = breakdown.total.get(month);
                if (expected - actual).abs() > CONSISTENCY_TOLERANCE {
                    issues.push(ConsistencyIssue {
                        scope: scope.to_string(),
                        month,
                        expected,
                        actual,
                    });
                }
            }
        }

        for month in Month::ALL {
            let expected: f64 = categories.iter().map(|(_, b)| b.total.get(month)).sum();
            let actual = self.working_hours.total_site.get(month);
            if (expected - actual).abs() > CONSISTENCY_TOLERANCE {
                issues.push(ConsistencyIssue {
                    scope: "totalSite".to_string(),
                    month,
                    expected,
                    actual,
                });
            }
        }

        issues
    }
}

// ==================== Partial records ====================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoursBreakdownUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<PartialMonthlySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overtime: Option<PartialMonthlySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routine: Option<PartialMonthlySeries>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkingHoursUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_site: Option<PartialMonthlySeries>,
    #[serde(rename = "managementMDM", skip_serializing_if = "Option::is_none")]
    pub management_mdm: Option<HoursBreakdownUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_contractual: Option<HoursBreakdownUpdate>,
    #[serde(rename = "nonManagementMDM", skip_serializing_if = "Option::is_none")]
    pub non_management_mdm: Option<HoursBreakdownUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_management_contractual: Option<HoursBreakdownUpdate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HrMetricsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resignations: Option<PartialMonthlySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vacant_positions: Option<PartialMonthlySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_turnover: Option<PartialMonthlySeries>,
}

/// Partial [`AdminRecord`]: only the populated fields are merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdminUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<WorkingHoursUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_metrics: Option<HrMetricsUpdate>,
}
