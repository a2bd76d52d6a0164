//! Environment, health and safety dataset.

use serde::{Deserialize, Serialize};

use super::monthly::{MonthlySeries, PartialMonthlySeries};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetActual {
    pub target: MonthlySeries,
    pub actual: MonthlySeries,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetOnly {
    pub target: MonthlySeries,
}

/// Full EHS record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EhsRecord {
    pub training_hours: TargetActual,
    pub hazard_reporting: TargetActual,
    pub near_misses: MonthlySeries,
    pub leading_indicator_index: TargetOnly,
    pub accidents: MonthlySeries,
    pub first_aid_cases: MonthlySeries,
    pub medical_cases: MonthlySeries,
    pub ill_health_cases: MonthlySeries,
    pub lost_time_accidents: MonthlySeries,
    pub ehs_walks: MonthlySeries,
    pub ehs_risk_assessments: MonthlySeries,
    pub electricity_consumed: MonthlySeries,
    pub gas_consumed: MonthlySeries,
    pub water_consumption: MonthlySeries,
    pub paper_sheets_consumed: MonthlySeries,
    pub carbon_footprint: MonthlySeries,
}

// ==================== Partial records ====================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetActualUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<PartialMonthlySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<PartialMonthlySeries>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetOnlyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<PartialMonthlySeries>,
}

/// Partial [`EhsRecord`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EhsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_hours: Option<TargetActualUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hazard_reporting: Option<TargetActualUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub near_misses: Option<PartialMonthlySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading_indicator_index: Option<TargetOnlyUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accidents: Option<PartialMonthlySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_aid_cases: Option<PartialMonthlySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_cases: Option<PartialMonthlySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ill_health_cases: Option<PartialMonthlySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lost_time_accidents: Option<PartialMonthlySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ehs_walks: Option<PartialMonthlySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ehs_risk_assessments: Option<PartialMonthlySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electricity_consumed: Option<PartialMonthlySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_consumed: Option<PartialMonthlySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_consumption: Option<PartialMonthlySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_sheets_consumed: Option<PartialMonthlySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbon_footprint: Option<PartialMonthlySeries>,
}
