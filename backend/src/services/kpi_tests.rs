use super::kpi::*;
use super::ServiceError;
use crate::db::repository::KpiRepository;
use crate::db::LocalRepository;
use crate::models::{
    seed, AdminUpdate, Dataset, DatasetRecord, DatasetUpdate, EhsUpdate, Month,
    PartialMonthlySeries,
};

const HEADER: &str = "Metric,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec\n";

#[tokio::test]
async fn test_admin_upload_merges_and_reports() {
    let repo = LocalRepository::new();
    let csv = format!(
        "{}Number of Resignations,9,9,9,9,9,9,9,9,9,9,9,9\nunknown metric,1\n,5\n",
        HEADER
    );

    let uploaded = upload_csv(&repo, Dataset::Admin, csv.as_bytes()).await.unwrap();

    assert_eq!(uploaded.report.matched_rows, 1);
    assert_eq!(uploaded.report.skipped_rows, 1);
    assert_eq!(uploaded.report.unmatched, vec!["unknown metric".to_string()]);
    assert_eq!(uploaded.report.fields_updated, 1);
    let DatasetRecord::Admin(record) = uploaded.data else {
        panic!("expected admin record");
    };
    assert_eq!(record.hr_metrics.resignations.total(), 108.0);
    assert_eq!(repo.read_admin().await.unwrap(), record);
}

#[tokio::test]
async fn test_ehs_upload_persists() {
    let repo = LocalRepository::new();
    let csv = format!("{}Carbon Footprint,1.5\n", HEADER);

    upload_csv(&repo, Dataset::Ehs, csv.as_bytes()).await.unwrap();

    let ehs = repo.read_ehs().await.unwrap();
    assert_eq!(ehs.carbon_footprint.jan, 1.5);
    assert_eq!(ehs.carbon_footprint.feb, 0.0);
    assert_eq!(ehs.accidents, seed::initial_ehs_record().accidents);
}

#[tokio::test]
async fn test_upload_without_matches_changes_nothing() {
    let repo = LocalRepository::new();
    let csv = format!("{}unknown metric,1,2,3\n", HEADER);

    let uploaded = upload_csv(&repo, Dataset::Admin, csv.as_bytes()).await.unwrap();

    assert_eq!(uploaded.report.matched_rows, 0);
    assert_eq!(uploaded.report.months_changed, 0);
    assert_eq!(repo.read_admin().await.unwrap(), seed::initial_admin_record());
}

#[tokio::test]
async fn test_empty_upload_is_invalid() {
    let repo = LocalRepository::new();
    let err = upload_csv(&repo, Dataset::Ehs, b"").await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}

#[tokio::test]
async fn test_apply_update_routes_by_category() {
    let repo = LocalRepository::new();
    let mut partial = PartialMonthlySeries::default();
    partial.set(Month::Jan, 99.0);

    let update = DatasetUpdate::Ehs(EhsUpdate {
        accidents: Some(partial),
        ..Default::default()
    });
    let updated = apply_update(&repo, &update).await.unwrap();
    assert_eq!(updated.report.months_changed, 1);

    let ehs = repo.read_ehs().await.unwrap();
    assert_eq!(ehs.accidents.jan, 99.0);
    assert_eq!(ehs.accidents.feb, 16.0);
    assert_eq!(repo.read_admin().await.unwrap(), seed::initial_admin_record());

    let updated = apply_update(&repo, &DatasetUpdate::Admin(AdminUpdate::default()))
        .await
        .unwrap();
    assert_eq!(updated.report.fields_updated, 0);
}

#[tokio::test]
async fn test_export_reflects_merges() {
    let repo = LocalRepository::new();
    let csv = format!("{}Vacant Positions,42\n", HEADER);
    upload_csv(&repo, Dataset::Admin, csv.as_bytes()).await.unwrap();

    let exported = export_csv(&repo, Dataset::Admin).await.unwrap();
    assert!(exported
        .lines()
        .any(|l| l == "Vacant Positions,42,0,0,0,0,0,0,0,0,0,0,0"));

    let report = dashboard_report(&repo).await.unwrap();
    assert!(report
        .lines()
        .any(|l| l == "HR Metrics,Vacant Positions,42,0,0,0,0,0,0,0,0,0,0,0"));
}

#[tokio::test]
async fn test_read_and_summary() {
    let repo = LocalRepository::new();
    assert!(matches!(
        read(&repo, Dataset::Ehs).await.unwrap(),
        DatasetRecord::Ehs(_)
    ));
    let summary = kpi_summary(&repo, Month::Feb).await.unwrap();
    assert_eq!(summary.accidents.current, 16.0);
    assert_eq!(summary.accidents.previous, 12.0);
}

#[tokio::test]
async fn test_store_failure_surfaces_as_repository_error() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);
    let err = export_csv(&repo, Dataset::Ehs).await.unwrap_err();
    assert!(matches!(err, ServiceError::Repository(_)));
}
