//! LocalRepository under concurrent use and failure injection.

use std::sync::Arc;

use ehs_dashboard::db::repository::{KpiRepository, RepositoryError, UserRepository};
use ehs_dashboard::db::LocalRepository;
use ehs_dashboard::models::{
    seed, AdminUpdate, EhsUpdate, Month, PartialMonthlySeries, User, UserAccount, UserId,
    UserRole,
};

fn resignations_in(month: Month, value: f64) -> AdminUpdate {
    let mut series = PartialMonthlySeries::default();
    series.set(month, value);
    serde_json::from_value(serde_json::json!({
        "hrMetrics": { "resignations": series }
    }))
    .unwrap()
}

fn account(email: &str) -> UserAccount {
    UserAccount {
        user: User {
            id: UserId::generate(),
            email: email.to_string(),
            name: "Test".to_string(),
            role: UserRole::Public,
        },
        password_hash: "unused".to_string(),
    }
}

#[tokio::test]
async fn test_concurrent_merges_to_distinct_months_all_land() {
    let repo = Arc::new(LocalRepository::new());

    let handles: Vec<_> = Month::ALL
        .iter()
        .copied()
        .enumerate()
        .map(|(i, month)| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                repo.merge_admin(&resignations_in(month, 100.0 + i as f64))
                    .await
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    let admin = repo.read_admin().await.unwrap();
    for (i, month) in Month::ALL.iter().enumerate() {
        assert_eq!(admin.hr_metrics.resignations.get(*month), 100.0 + i as f64);
    }
    assert_eq!(
        admin.working_hours,
        seed::initial_admin_record().working_hours
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_readers_never_see_half_a_merge() {
    let repo = Arc::new(LocalRepository::new());
    let update: EhsUpdate = serde_json::from_value(serde_json::json!({
        "accidents": {"jan": -1}, "nearMisses": {"jan": -1}
    }))
    .unwrap();

    let writer = {
        let repo = Arc::clone(&repo);
        tokio::spawn(async move { repo.merge_ehs(&update).await.unwrap() })
    };
    for _ in 0..50 {
        let ehs = repo.read_ehs().await.unwrap();
        // both fields change together or not at all
        assert_eq!(ehs.accidents.jan == -1.0, ehs.near_misses.jan == -1.0);
        tokio::task::yield_now().await;
    }
    writer.await.unwrap();

    let ehs = repo.read_ehs().await.unwrap();
    assert_eq!(ehs.accidents.jan, -1.0);
    assert_eq!(ehs.near_misses.jan, -1.0);
}

#[tokio::test]
async fn test_reset_restores_seed() {
    let repo = LocalRepository::new();
    repo.merge_admin(&resignations_in(Month::Jan, 1000.0))
        .await
        .unwrap();

    repo.reset().await.unwrap();

    assert_eq!(repo.read_admin().await.unwrap(), seed::initial_admin_record());
    assert_eq!(repo.read_ehs().await.unwrap(), seed::initial_ehs_record());
}

#[tokio::test]
async fn test_unhealthy_store_fails_every_operation() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);

    assert!(!repo.health_check().await.unwrap_or(false));
    assert!(matches!(
        repo.read_admin().await,
        Err(RepositoryError::InternalError { .. })
    ));
    assert!(repo.merge_ehs(&EhsUpdate::default()).await.is_err());
    assert!(repo.find_by_email("a@example.com").await.is_err());

    repo.set_healthy(true);
    assert!(repo.read_admin().await.is_ok());
}

#[tokio::test]
async fn test_concurrent_signups_with_same_email_create_one_user() {
    let repo = Arc::new(LocalRepository::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let repo = Arc::clone(&repo);
            let email = if i % 2 == 0 {
                "Same@Example.com"
            } else {
                "same@example.com "
            };
            tokio::spawn(async move { repo.create_user(account(email)).await })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(RepositoryError::Conflict { .. }) => {}
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(repo.count_users().await.unwrap(), 1);
}
