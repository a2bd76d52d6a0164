//! In-memory repository: the process-lifetime KPI store and account list.
//!
//! Nothing is persisted; every process (and every test) that builds a
//! `LocalRepository` starts from the compiled-in seed records.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::repository::{
    ErrorContext, KpiRepository, Merged, RepositoryError, RepositoryResult, UserRepository,
};
use crate::models::fields::merge_update;
use crate::models::{
    seed, AdminMetric, AdminRecord, AdminUpdate, EhsMetric, EhsRecord, EhsUpdate, User,
    UserAccount, UserId,
};

/// In-memory repository.
///
/// Cloning is cheap and yields a handle onto the same data. A merge holds
/// the write lock for the whole update, so readers never observe half of
/// one.
///
/// # Example
/// ```
/// use ehs_dashboard::db::repositories::LocalRepository;
/// use ehs_dashboard::db::repository::KpiRepository;
///
/// # tokio_test_block(async {
/// let repo = LocalRepository::new();
/// let admin = repo.read_admin().await.unwrap();
/// assert_eq!(admin.working_hours.total_site.jan, 54650.0);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    admin: AdminRecord,
    ehs: EhsRecord,

    /// Keyed by normalised email
    users: HashMap<String, UserAccount>,

    // Health, toggled by tests to exercise failure paths
    is_healthy: bool,
}

impl LocalData {
    fn seeded() -> Self {
        Self {
            admin: seed::initial_admin_record(),
            ehs: seed::initial_ehs_record(),
            users: HashMap::new(),
            is_healthy: true,
        }
    }
}

fn email_key(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

impl LocalRepository {
    /// Create a repository holding the seed records and no users.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::seeded())),
        }
    }

    /// Create a repository holding the given records instead of the seed.
    pub fn with_records(admin: AdminRecord, ehs: EhsRecord) -> Self {
        let repo = Self::new();
        {
            let mut data = repo.data.write();
            data.admin = admin;
            data.ehs = ehs;
        }
        repo
    }

    /// Set the health status for testing failure paths.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::internal_with_context(
                "Store is not healthy",
                ErrorContext::new(operation),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KpiRepository for LocalRepository {
    async fn read_admin(&self) -> RepositoryResult<AdminRecord> {
        self.check_health("read_admin")?;
        Ok(self.data.read().admin.clone())
    }

    async fn read_ehs(&self) -> RepositoryResult<EhsRecord> {
        self.check_health("read_ehs")?;
        Ok(self.data.read().ehs.clone())
    }

    async fn merge_admin(&self, update: &AdminUpdate) -> RepositoryResult<Merged<AdminRecord>> {
        self.check_health("merge_admin")?;
        let mut data = self.data.write();
        let report = merge_update::<AdminMetric>(&mut data.admin, update);
        log::info!(
            "Merged admin update: {} field(s), {} month value(s) changed",
            report.fields_updated,
            report.months_changed
        );
        Ok(Merged {
            record: data.admin.clone(),
            report,
        })
    }

    async fn merge_ehs(&self, update: &EhsUpdate) -> RepositoryResult<Merged<EhsRecord>> {
        self.check_health("merge_ehs")?;
        let mut data = self.data.write();
        let report = merge_update::<EhsMetric>(&mut data.ehs, update);
        log::info!(
            "Merged EHS update: {} field(s), {} month value(s) changed",
            report.fields_updated,
            report.months_changed
        );
        Ok(Merged {
            record: data.ehs.clone(),
            report,
        })
    }

    async fn reset(&self) -> RepositoryResult<()> {
        let mut data = self.data.write();
        data.admin = seed::initial_admin_record();
        data.ehs = seed::initial_ehs_record();
        log::info!("KPI store reset to seed values");
        Ok(())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }
}

#[async_trait]
impl UserRepository for LocalRepository {
    async fn create_user(&self, account: UserAccount) -> RepositoryResult<User> {
        self.check_health("create_user")?;
        let key = email_key(&account.user.email);
        if key.is_empty() {
            return Err(RepositoryError::validation_with_context(
                "Email is required",
                ErrorContext::new("create_user").with_entity("user"),
            ));
        }

        let mut data = self.data.write();
        if data.users.contains_key(&key) {
            return Err(RepositoryError::conflict_with_context(
                "User already exists",
                ErrorContext::new("create_user")
                    .with_entity("user")
                    .with_entity_id(&key),
            ));
        }
        let user = account.user.clone();
        data.users.insert(key, account);
        log::info!("Created user {} with role {}", user.id, user.role);
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<UserAccount>> {
        self.check_health("find_by_email")?;
        Ok(self.data.read().users.get(&email_key(email)).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        self.check_health("find_by_id")?;
        Ok(self
            .data
            .read()
            .users
            .values()
            .find(|account| account.user.id == id)
            .map(|account| account.user.clone()))
    }

    async fn count_users(&self) -> RepositoryResult<usize> {
        Ok(self.data.read().users.len())
    }
}
