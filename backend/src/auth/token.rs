//! Signed bearer tokens.
//!
//! A token is `<payload>.<signature>`: the payload is the JSON [`Claims`] in
//! unpadded base64url, the signature is the hex HMAC-SHA256 of the payload
//! text under the server secret.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use super::{AuthError, AuthResult};
use crate::models::{User, UserId, UserRole};

type HmacSha256 = Hmac<Sha256>;

pub const DEFAULT_TOKEN_TTL_HOURS: u64 = 24 * 7;

/// Upper bound on the configured lifetime (ten years).
const MAX_TOKEN_TTL_HOURS: u64 = 24 * 365 * 10;

/// What a token asserts about its bearer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: UserId,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    /// Expiry, Unix seconds
    pub exp: i64,
}

impl Claims {
    pub fn user(&self) -> User {
        User {
            id: self.sub,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

/// Issues and verifies tokens under one secret.
#[derive(Clone)]
pub struct TokenSigner {
    secret: Vec<u8>,
    ttl: Duration,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenSigner {
    pub fn new(secret: impl AsRef<[u8]>, ttl_hours: u64) -> Self {
        let hours = ttl_hours.clamp(1, MAX_TOKEN_TTL_HOURS) as i64;
        Self {
            secret: secret.as_ref().to_vec(),
            ttl: Duration::hours(hours),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn mac(&self) -> AuthResult<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret).map_err(|e| AuthError::Encoding(e.to_string()))
    }

    pub fn issue(&self, user: &User) -> AuthResult<String> {
        self.issue_at(user, Utc::now())
    }

    pub fn issue_at(&self, user: &User, now: DateTime<Utc>) -> AuthResult<String> {
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            exp: (now + self.ttl).timestamp(),
        };
        let json = serde_json::to_vec(&claims).map_err(|e| AuthError::Encoding(e.to_string()))?;
        let payload = URL_SAFE_NO_PAD.encode(json);

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());

        Ok(format!("{}.{}", payload, signature))
    }

    /// Claims of a well-formed, correctly signed, unexpired token.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Option<Claims> {
        let (payload, signature) = token.trim().split_once('.')?;
        let signature = hex::decode(signature).ok()?;

        let mut mac = self.mac().ok()?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature).ok()?;

        let json = URL_SAFE_NO_PAD.decode(payload).ok()?;
        let claims: Claims = serde_json::from_slice(&json).ok()?;
        if claims.exp <= now.timestamp() {
            return None;
        }
        Some(claims)
    }

    /// Like [`verify`](Self::verify) but with the reason spelled out.
    pub fn authenticate(&self, token: &str) -> AuthResult<User> {
        self.verify(token)
            .map(|claims| claims.user())
            .ok_or(AuthError::InvalidToken)
    }
}
