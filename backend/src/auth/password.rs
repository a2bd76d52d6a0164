//! PBKDF2-HMAC-SHA256 password hashes.
//!
//! Stored form: `pbkdf2-sha256$<iterations>$<salt>$<hash>`, salt and hash in
//! standard base64.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;

use super::{AuthError, AuthResult};

pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 100_000;

const SCHEME: &str = "pbkdf2-sha256";
const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;

fn derive_key(password: &str, salt: &[u8], iterations: u32) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    key
}

/// Hash `password` with a fresh random salt.
pub fn hash_password(password: &str, iterations: u32) -> String {
    let iterations = iterations.max(1);
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let key = derive_key(password, &salt, iterations);
    format!(
        "{}${}${}${}",
        SCHEME,
        iterations,
        B64.encode(salt),
        B64.encode(key)
    )
}

/// Check `password` against a stored hash.
///
/// Returns `Ok(false)` on mismatch and `Err` only when `stored` is not a hash
/// this module produced.
pub fn verify_password(password: &str, stored: &str) -> AuthResult<bool> {
    let mut parts = stored.split('$');
    let (Some(scheme), Some(iterations), Some(salt), Some(hash), None) = (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) else {
        return Err(AuthError::MalformedHash);
    };
    if scheme != SCHEME {
        return Err(AuthError::MalformedHash);
    }
    let iterations: u32 = iterations.parse().map_err(|_| AuthError::MalformedHash)?;
    let salt = B64.decode(salt).map_err(|_| AuthError::MalformedHash)?;
    let expected = B64.decode(hash).map_err(|_| AuthError::MalformedHash)?;

    let key = derive_key(password, &salt, iterations.max(1));
    Ok(constant_time_eq(&key, &expected))
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
