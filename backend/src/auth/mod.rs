//! Authentication: password hashing, signed bearer tokens and role checks.

pub mod password;
pub mod token;

pub use password::{hash_password, verify_password, DEFAULT_PBKDF2_ITERATIONS};
pub use token::{Claims, TokenSigner, DEFAULT_TOKEN_TTL_HOURS};

use crate::models::{User, UserRole};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("No token provided")]
    MissingToken,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Insufficient permissions: {required} role required")]
    Forbidden { required: UserRole },

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Malformed password hash")]
    MalformedHash,

    #[error("Token encoding failed: {0}")]
    Encoding(String),
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Reject anyone who may not change dashboard data.
pub fn require_admin(user: &User) -> AuthResult<()> {
    if user.role.can_modify_data() {
        Ok(())
    } else {
        Err(AuthError::Forbidden {
            required: UserRole::Admin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;

    fn user(role: UserRole) -> User {
        User {
            id: UserId::generate(),
            email: "someone@example.com".to_string(),
            name: "Someone".to_string(),
            role,
        }
    }

    #[test]
    fn test_require_admin() {
        assert!(require_admin(&user(UserRole::Admin)).is_ok());
        assert_eq!(
            require_admin(&user(UserRole::SeniorExecutive)),
            Err(AuthError::Forbidden {
                required: UserRole::Admin
            })
        );
        assert!(require_admin(&user(UserRole::Public)).is_err());
    }

    #[test]
    fn test_forbidden_message_names_role() {
        let err = require_admin(&user(UserRole::Public)).unwrap_err();
        assert_eq!(err.to_string(), "Insufficient permissions: admin role required");
    }
}
