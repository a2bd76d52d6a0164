//! Data Transfer Objects for the HTTP API.
//!
//! Records, updates and reports already derive serde; these wrap them in the
//! response envelopes the dashboard client expects.

use serde::{Deserialize, Serialize};

use crate::models::{DatasetRecord, MergeReport, User};
use crate::services::IngestReport;

pub use crate::services::{Session, SignupInput};
pub use crate::summary::KpiSummary;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Whether the store answered its own health check
    pub store: String,
}

/// `{ "data": .. }` envelope for reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Response for a CSV upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Full record after the merge
    pub data: DatasetRecord,
    pub message: String,
    pub report: IngestReport,
}

/// Response for a manual edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub data: DatasetRecord,
    pub message: String,
    pub report: MergeReport,
}

/// Query parameters for the summary endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryQuery {
    /// `jan`..`dec`, case-insensitive; defaults to the current month
    pub month: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}
