//! Service configuration.
//!
//! Settings come from an optional `dashboard.toml` and are then overridden by
//! environment variables, so a container can run with no file at all.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::auth::{DEFAULT_PBKDF2_ITERATIONS, DEFAULT_TOKEN_TTL_HOURS};

/// Secret used when none is configured. Tokens signed with it are only fit
/// for local development.
pub const DEVELOPMENT_TOKEN_SECRET: &str = "ehs-dashboard-development-secret";

pub const CONFIG_PATH_ENV: &str = "DASHBOARD_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Request body limit, applied to uploads
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub token_secret: Option<String>,
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: u64,
    #[serde(default = "default_pbkdf2_iterations")]
    pub pbkdf2_iterations: u32,
    /// Account created at startup when both email and password are set
    #[serde(default)]
    pub bootstrap_admin_email: Option<String>,
    #[serde(default)]
    pub bootstrap_admin_password: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_token_ttl_hours() -> u64 {
    DEFAULT_TOKEN_TTL_HOURS
}

fn default_pbkdf2_iterations() -> u32 {
    DEFAULT_PBKDF2_ITERATIONS
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            token_secret: None,
            token_ttl_hours: default_token_ttl_hours(),
            pbkdf2_iterations: default_pbkdf2_iterations(),
            bootstrap_admin_email: None,
            bootstrap_admin_password: None,
        }
    }
}

impl AuthSettings {
    /// The configured secret, or the development one.
    pub fn token_secret_or_default(&self) -> &str {
        self.token_secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEVELOPMENT_TOKEN_SECRET)
    }

    pub fn uses_development_secret(&self) -> bool {
        self.token_secret.as_deref().map_or(true, str::is_empty)
    }

    /// `(email, password)` when both are configured.
    pub fn bootstrap_admin(&self) -> Option<(&str, &str)> {
        match (
            self.bootstrap_admin_email.as_deref(),
            self.bootstrap_admin_password.as_deref(),
        ) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Some((email, password))
            }
            _ => None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find `dashboard.toml`.
    ///
    /// `DASHBOARD_CONFIG` wins when set; otherwise searches:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn locate() -> Option<PathBuf> {
        if let Ok(explicit) = std::env::var(CONFIG_PATH_ENV) {
            if !explicit.trim().is_empty() {
                return Some(PathBuf::from(explicit));
            }
        }
        [
            "dashboard.toml",
            "backend/dashboard.toml",
            "../dashboard.toml",
        ]
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
    }

    /// File settings (or defaults if there is no file) with environment
    /// overrides applied.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::locate() {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(&path)?
            }
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Override settings from `HOST`, `PORT`, `MAX_UPLOAD_BYTES`,
    /// `JWT_SECRET`, `TOKEN_TTL_HOURS`, `PBKDF2_ITERATIONS`, `ADMIN_EMAIL`
    /// and `ADMIN_PASSWORD`.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(host) = env_string("HOST") {
            self.server.host = host;
        }
        if let Some(port) = env_parsed("PORT")? {
            self.server.port = port;
        }
        if let Some(limit) = env_parsed("MAX_UPLOAD_BYTES")? {
            self.server.max_upload_bytes = limit;
        }
        if let Some(secret) = env_string("JWT_SECRET") {
            self.auth.token_secret = Some(secret);
        }
        if let Some(ttl) = env_parsed("TOKEN_TTL_HOURS")? {
            self.auth.token_ttl_hours = ttl;
        }
        if let Some(iterations) = env_parsed("PBKDF2_ITERATIONS")? {
            self.auth.pbkdf2_iterations = iterations;
        }
        if let Some(email) = env_string("ADMIN_EMAIL") {
            self.auth.bootstrap_admin_email = Some(email);
        }
        if let Some(password) = env_string("ADMIN_PASSWORD") {
            self.auth.bootstrap_admin_password = Some(password);
        }
        Ok(())
    }

    /// `host:port` to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parsed<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match env_string(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value,
            }),
    }
}
