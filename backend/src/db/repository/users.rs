//! Account storage.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{User, UserAccount, UserId};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new account. Emails are unique ignoring ASCII case; a taken
    /// email is a `Conflict`.
    async fn create_user(&self, account: UserAccount) -> RepositoryResult<User>;

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<UserAccount>>;

    async fn find_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;

    async fn count_users(&self) -> RepositoryResult<usize>;
}
