//! Service layer: orchestration between the HTTP handlers and the store.
//!
//! Services are generic over the repository traits, so handlers pass the
//! shared `dyn FullRepository` and tests pass a fresh `LocalRepository`.

pub mod accounts;
pub mod kpi;

#[cfg(test)]
#[path = "kpi_tests.rs"]
mod kpi_tests;


pub use accounts::{current_user, ensure_bootstrap_admin, login, signup, Session, SignupInput};
pub use kpi::{
    apply_update, dashboard_report, export_csv, kpi_summary, read, upload_csv, IngestReport,
    Updated, Uploaded,
};

use crate::auth::AuthError;
use crate::db::repository::RepositoryError;
use crate::export::ExportError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Caller-supplied input was unusable
    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
