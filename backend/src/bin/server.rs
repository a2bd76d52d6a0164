//! EHS dashboard HTTP server.
//!
//! # Usage
//!
//! ```bash
//! JWT_SECRET=change-me ADMIN_EMAIL=admin@example.com ADMIN_PASSWORD=secret \
//!   cargo run --bin ehs-server
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_CONFIG`: Path to a `dashboard.toml` (optional)
//! - `HOST` / `PORT`: Bind address (default: 0.0.0.0:8080)
//! - `MAX_UPLOAD_BYTES`: Request body limit (default: 10 MiB)
//! - `JWT_SECRET`: Token signing secret
//! - `TOKEN_TTL_HOURS`, `PBKDF2_ITERATIONS`
//! - `ADMIN_EMAIL` / `ADMIN_PASSWORD`: Administrator created at startup
//! - `RUST_LOG`: Log filter (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ehs_dashboard::config::AppConfig;
use ehs_dashboard::db::LocalRepository;
use ehs_dashboard::http::{create_router, AppState};
use ehs_dashboard::services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting EHS dashboard server");

    let config = AppConfig::load()?;
    if config.auth.uses_development_secret() {
        warn!("JWT_SECRET is not set; tokens are signed with the development secret");
    }

    let repository = Arc::new(LocalRepository::new());
    info!("In-memory store seeded");

    if let Some((email, password)) = config.auth.bootstrap_admin() {
        if let Some(admin) = services::ensure_bootstrap_admin(
            repository.as_ref(),
            email,
            password,
            config.auth.pbkdf2_iterations,
        )
        .await?
        {
            info!("Administrator account {} is ready", admin.email);
        }
    } else {
        warn!("No ADMIN_EMAIL/ADMIN_PASSWORD configured; only self-registered accounts exist");
    }

    let addr: SocketAddr = config.bind_address().parse()?;
    let state = AppState::new(repository, config);
    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
