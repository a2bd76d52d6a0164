//! Router configuration for the HTTP server.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = state.config.server.max_upload_bytes;

    let api_v1 = Router::new()
        // Admin dataset
        .route("/kpi", get(handlers::get_kpi))
        .route("/kpi/upload", post(handlers::upload_kpi))
        .route("/kpi/manual", post(handlers::manual_kpi))
        .route("/kpi/export/csv", get(handlers::export_kpi_csv))
        // EHS dataset
        .route("/ehs", get(handlers::get_ehs))
        .route("/ehs/upload", post(handlers::upload_ehs))
        .route("/ehs/manual", post(handlers::manual_ehs))
        .route("/ehs/export/csv", get(handlers::export_ehs_csv))
        // Both
        .route("/update", post(handlers::post_update))
        .route("/export/report", get(handlers::export_report))
        .route("/summary", get(handlers::get_summary))
        // Accounts
        .route("/auth/signup", post(handlers::signup))
        .route("/auth/login", post(handlers::login))
        .route("/auth/me", get(handlers::me));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
