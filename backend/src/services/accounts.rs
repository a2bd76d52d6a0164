//! Sign-up, login and the bootstrap administrator.

use serde::{Deserialize, Serialize};

use super::{ServiceError, ServiceResult};
use crate::auth::{hash_password, verify_password, AuthError, TokenSigner};
use crate::db::repository::{RepositoryError, UserRepository};
use crate::models::{User, UserAccount, UserId, UserRole};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<UserRole>,
}

/// A user together with a freshly issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Run PBKDF2 off the async executor.
async fn hash_off_thread(password: String, iterations: u32) -> ServiceResult<String> {
    tokio::task::spawn_blocking(move || hash_password(&password, iterations))
        .await
        .map_err(|e| ServiceError::Internal(format!("Password hashing task failed: {}", e)))
}

async fn verify_off_thread(password: String, stored: String) -> ServiceResult<bool> {
    tokio::task::spawn_blocking(move || verify_password(&password, &stored))
        .await
        .map_err(|e| ServiceError::Internal(format!("Password check task failed: {}", e)))?
        .map_err(ServiceError::from)
}

/// Create an account and log it in.
///
/// The caller picks the role and it defaults to `public`. Self-registration
/// can therefore claim `admin`; sign-up carries no authentication.
pub async fn signup<R: UserRepository + ?Sized>(
    repo: &R,
    signer: &TokenSigner,
    input: SignupInput,
    iterations: u32,
) -> ServiceResult<Session> {
    let email = input.email.trim().to_string();
    let name = input.name.trim().to_string();
    if email.is_empty() || input.password.is_empty() || name.is_empty() {
        return Err(ServiceError::InvalidInput(
            "Email, password, and name are required".to_string(),
        ));
    }

    let password_hash = hash_off_thread(input.password, iterations).await?;
    let account = UserAccount {
        user: User {
            id: UserId::generate(),
            email,
            name,
            role: input.role.unwrap_or_default(),
        },
        password_hash,
    };

    let user = match repo.create_user(account).await {
        Ok(user) => user,
        Err(RepositoryError::Conflict { .. }) => {
            return Err(ServiceError::InvalidInput("User already exists".to_string()))
        }
        Err(e) => return Err(e.into()),
    };
    let token = signer.issue(&user)?;
    Ok(Session { user, token })
}

/// Check credentials and issue a token.
///
/// An unknown email still pays for one key derivation at `iterations`, so
/// response time does not reveal which accounts exist.
pub async fn login<R: UserRepository + ?Sized>(
    repo: &R,
    signer: &TokenSigner,
    email: &str,
    password: &str,
    iterations: u32,
) -> ServiceResult<Session> {
    let Some(account) = repo.find_by_email(email).await? else {
        hash_off_thread(password.to_string(), iterations).await?;
        return Err(AuthError::InvalidCredentials.into());
    };
    if !verify_off_thread(password.to_string(), account.password_hash).await? {
        return Err(AuthError::InvalidCredentials.into());
    }
    let token = signer.issue(&account.user)?;
    Ok(Session {
        user: account.user,
        token,
    })
}

/// The account a verified token refers to. Accounts live in memory only, so
/// a token can outlive its user across a restart.
pub async fn current_user<R: UserRepository + ?Sized>(
    repo: &R,
    id: UserId,
) -> ServiceResult<User> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AuthError::InvalidToken.into())
}

/// Create the configured administrator unless the email is already taken.
pub async fn ensure_bootstrap_admin<R: UserRepository + ?Sized>(
    repo: &R,
    email: &str,
    password: &str,
    iterations: u32,
) -> ServiceResult<Option<User>> {
    if repo.find_by_email(email).await?.is_some() {
        log::debug!("Bootstrap admin {} already present", email);
        return Ok(None);
    }
    let password_hash = hash_off_thread(password.to_string(), iterations).await?;
    let user = repo
        .create_user(UserAccount {
            user: User {
                id: UserId::generate(),
                email: email.trim().to_string(),
                name: "Administrator".to_string(),
                role: UserRole::Admin,
            },
            password_hash,
        })
        .await?;
    log::info!("Created bootstrap admin {}", user.email);
    Ok(Some(user))
}
