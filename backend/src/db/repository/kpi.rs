//! The KPI store: the live Admin and EHS records.

use async_trait::async_trait;
use serde::Serialize;

use super::error::RepositoryResult;
use crate::models::{AdminRecord, AdminUpdate, EhsRecord, EhsUpdate, MergeReport};

/// A record snapshot taken right after a merge, with what the merge changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Merged<R> {
    pub record: R,
    pub report: MergeReport,
}

/// Read and merge access to the live dashboard records.
///
/// Reads return snapshots; a merge is applied field by field and month by
/// month (last write wins) and is visible to every read that follows it.
#[async_trait]
pub trait KpiRepository: Send + Sync {
    async fn read_admin(&self) -> RepositoryResult<AdminRecord>;

    async fn read_ehs(&self) -> RepositoryResult<EhsRecord>;

    async fn merge_admin(&self, update: &AdminUpdate) -> RepositoryResult<Merged<AdminRecord>>;

    async fn merge_ehs(&self, update: &EhsUpdate) -> RepositoryResult<Merged<EhsRecord>>;

    /// Restore both records to the compiled-in seed figures.
    async fn reset(&self) -> RepositoryResult<()>;

    async fn health_check(&self) -> RepositoryResult<bool>;
}
