//! Application state for the HTTP server.

use std::sync::Arc;

use crate::auth::TokenSigner;
use crate::config::AppConfig;
use crate::db::repository::FullRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The KPI store and account list
    pub repository: Arc<dyn FullRepository>,
    pub tokens: Arc<TokenSigner>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build state from a repository and configuration; the token signer
    /// is derived from the auth settings.
    pub fn new(repository: Arc<dyn FullRepository>, config: AppConfig) -> Self {
        let tokens = TokenSigner::new(
            config.auth.token_secret_or_default(),
            config.auth.token_ttl_hours,
        );
        Self {
            repository,
            tokens: Arc::new(tokens),
            config: Arc::new(config),
        }
    }
}
