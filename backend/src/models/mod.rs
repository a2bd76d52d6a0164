//! Domain model: monthly series, the EHS and Admin records, users.

pub mod admin;
pub mod ehs;
pub mod fields;
pub mod monthly;
pub mod seed;
pub mod user;

pub use admin::{
    AdminRecord, AdminUpdate, ConsistencyIssue, HoursBreakdown, HoursBreakdownUpdate, HrMetrics,
    HrMetricsUpdate, WorkingHours, WorkingHoursUpdate,
};
pub use ehs::{EhsRecord, EhsUpdate, TargetActual, TargetActualUpdate, TargetOnly, TargetOnlyUpdate};
pub use fields::{merge_update, AdminMetric, EhsMetric, MergeReport, MetricField};
pub use monthly::{Month, MonthlySeries, PartialMonthlySeries};
pub use user::{User, UserAccount, UserId, UserRole};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which record an operation addresses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    /// Working hours and HR metrics
    Admin,
    /// Environment, health and safety metrics
    Ehs,
}

impl Dataset {
    pub fn as_str(self) -> &'static str {
        match self {
            Dataset::Admin => "admin",
            Dataset::Ehs => "ehs",
        }
    }

    /// Attachment name used by CSV export.
    pub fn export_file_name(self) -> &'static str {
        match self {
            Dataset::Admin => "kpi.csv",
            Dataset::Ehs => "ehs.csv",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A partial record tagged with the dataset it targets.
///
/// JSON form: `{"category": "admin", "data": {..}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", content = "data", rename_all = "lowercase")]
pub enum DatasetUpdate {
    Admin(AdminUpdate),
    Ehs(EhsUpdate),
}

impl DatasetUpdate {
    pub fn dataset(&self) -> Dataset {
        match self {
            DatasetUpdate::Admin(_) => Dataset::Admin,
            DatasetUpdate::Ehs(_) => Dataset::Ehs,
        }
    }

    /// Leaf paths populated by this update.
    pub fn populated_paths(&self) -> Vec<&'static str> {
        match self {
            DatasetUpdate::Admin(update) => fields::populated_fields::<AdminMetric>(update)
                .into_iter()
                .map(|f| f.path())
                .collect(),
            DatasetUpdate::Ehs(update) => fields::populated_fields::<EhsMetric>(update)
                .into_iter()
                .map(|f| f.path())
                .collect(),
        }
    }
}

/// Snapshot of one dataset's full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatasetRecord {
    Admin(AdminRecord),
    Ehs(EhsRecord),
}
