//! Dashboard data operations: CSV upload, manual edits, export, summary.

use serde::{Deserialize, Serialize};

use super::{ServiceError, ServiceResult};
use crate::db::repository::KpiRepository;
use crate::export;
use crate::ingest::{map_csv, MappingOutcome};
use crate::models::{
    AdminMetric, Dataset, DatasetRecord, DatasetUpdate, EhsMetric, MergeReport, Month,
};
use crate::summary::{self, KpiSummary};

/// What an upload did, row by row and then in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReport {
    pub matched_rows: usize,
    pub skipped_rows: usize,
    /// Metric names that matched nothing and were dropped
    pub unmatched: Vec<String>,
    pub fields_updated: usize,
    pub months_changed: usize,
}

impl IngestReport {
    fn new<U>(outcome: &MappingOutcome<U>, merge: MergeReport) -> Self {
        Self {
            matched_rows: outcome.matched_rows,
            skipped_rows: outcome.skipped_rows,
            unmatched: outcome.unmatched.clone(),
            fields_updated: merge.fields_updated,
            months_changed: merge.months_changed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Uploaded {
    pub data: DatasetRecord,
    pub report: IngestReport,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Updated {
    pub data: DatasetRecord,
    pub report: MergeReport,
}

/// Current full record of a dataset.
pub async fn read<R: KpiRepository + ?Sized>(
    repo: &R,
    dataset: Dataset,
) -> ServiceResult<DatasetRecord> {
    Ok(match dataset {
        Dataset::Admin => DatasetRecord::Admin(repo.read_admin().await?),
        Dataset::Ehs => DatasetRecord::Ehs(repo.read_ehs().await?),
    })
}

/// Map an uploaded CSV onto `dataset` and merge it into the store.
///
/// Rows that match nothing are reported, not rejected; an upload with no
/// usable rows still succeeds and changes nothing.
pub async fn upload_csv<R: KpiRepository + ?Sized>(
    repo: &R,
    dataset: Dataset,
    bytes: &[u8],
) -> ServiceResult<Uploaded> {
    if bytes.is_empty() {
        return Err(ServiceError::InvalidInput("Uploaded file is empty".to_string()));
    }

    let uploaded = match dataset {
        Dataset::Admin => {
            let outcome = map_csv::<AdminMetric>(bytes);
            let merged = repo.merge_admin(&outcome.update).await?;
            let issues = merged.record.consistency_issues();
            if !issues.is_empty() {
                log::debug!(
                    "Admin record has {} month(s) where working-hours totals do not add up",
                    issues.len()
                );
            }
            Uploaded {
                report: IngestReport::new(&outcome, merged.report),
                data: DatasetRecord::Admin(merged.record),
            }
        }
        Dataset::Ehs => {
            let outcome = map_csv::<EhsMetric>(bytes);
            let merged = repo.merge_ehs(&outcome.update).await?;
            Uploaded {
                report: IngestReport::new(&outcome, merged.report),
                data: DatasetRecord::Ehs(merged.record),
            }
        }
    };

    log::info!(
        "{} upload: {} row(s) matched, {} skipped, {} unmatched",
        dataset,
        uploaded.report.matched_rows,
        uploaded.report.skipped_rows,
        uploaded.report.unmatched.len()
    );
    Ok(uploaded)
}

/// Merge an already-structured partial record.
pub async fn apply_update<R: KpiRepository + ?Sized>(
    repo: &R,
    update: &DatasetUpdate,
) -> ServiceResult<Updated> {
    Ok(match update {
        DatasetUpdate::Admin(update) => {
            let merged = repo.merge_admin(update).await?;
            Updated {
                data: DatasetRecord::Admin(merged.record),
                report: merged.report,
            }
        }
        DatasetUpdate::Ehs(update) => {
            let merged = repo.merge_ehs(update).await?;
            Updated {
                data: DatasetRecord::Ehs(merged.record),
                report: merged.report,
            }
        }
    })
}

/// `Metric,Jan..Dec` export of one dataset.
pub async fn export_csv<R: KpiRepository + ?Sized>(
    repo: &R,
    dataset: Dataset,
) -> ServiceResult<String> {
    let csv = match dataset {
        Dataset::Admin => export::admin_csv(&repo.read_admin().await?)?,
        Dataset::Ehs => export::ehs_csv(&repo.read_ehs().await?)?,
    };
    Ok(csv)
}

/// Combined `Category,Metric,Jan..Dec` report of both datasets.
pub async fn dashboard_report<R: KpiRepository + ?Sized>(repo: &R) -> ServiceResult<String> {
    let ehs = repo.read_ehs().await?;
    let admin = repo.read_admin().await?;
    Ok(export::dashboard_report_csv(&ehs, &admin)?)
}

pub async fn kpi_summary<R: KpiRepository + ?Sized>(
    repo: &R,
    month: Month,
) -> ServiceResult<KpiSummary> {
    let ehs = repo.read_ehs().await?;
    let admin = repo.read_admin().await?;
    Ok(summary::summarize(&ehs, &admin, month))
}
