//! Dashboard users and roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account identifier, serialized as a bare UUID string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub uuid::Uuid);

impl UserId {
    pub fn generate() -> Self {
        UserId(uuid::Uuid::new_v4())
    }

    pub fn value(&self) -> uuid::Uuid {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s.trim()).map(UserId)
    }
}

/// Access level carried by a bearer token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    SeniorExecutive,
    #[default]
    Public,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::SeniorExecutive => "senior_executive",
            UserRole::Public => "public",
        }
    }

    /// Only administrators may change dashboard data.
    pub fn can_modify_data(self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "senior_executive" => Ok(Self::SeniorExecutive),
            "public" => Ok(Self::Public),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Public view of an account. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

/// Stored account: the public user plus its password hash.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub user: User,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde_names() {
        assert_eq!(
            serde_json::to_string(&UserRole::SeniorExecutive).unwrap(),
            "\"senior_executive\""
        );
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(
            "senior_executive".parse::<UserRole>().unwrap(),
            UserRole::SeniorExecutive
        );
        assert!("root".parse::<UserRole>().is_err());
        assert_eq!(UserRole::default(), UserRole::Public);
    }

    #[test]
    fn test_only_admin_modifies_data() {
        assert!(UserRole::Admin.can_modify_data());
        assert!(!UserRole::SeniorExecutive.can_modify_data());
        assert!(!UserRole::Public.can_modify_data());
    }

    #[test]
    fn test_user_id_display_matches_uuid() {
        let id = UserId::generate();
        assert_eq!(id.to_string(), id.value().to_string());
        assert_eq!(id.to_string().parse::<UserId>().unwrap(), id);
        assert!("not-a-uuid".parse::<UserId>().is_err());
    }
}
