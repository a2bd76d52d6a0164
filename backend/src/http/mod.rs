//! HTTP server module for the dashboard backend.
//!
//! Exposes the service layer as a REST API under `/v1`.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers, extractors)                   │
//! │  - Bearer token and role checks                           │
//! │  - Multipart / JSON parsing, CSV attachments              │
//! │  - CORS, compression, error mapping                       │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Upload → map → merge, export, summary, accounts        │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository Layer (db/)                                   │
//! │  - LocalRepository                                        │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, AppError};
pub use extract::{AdminUser, AuthUser};
pub use router::create_router;
pub use state::AppState;
