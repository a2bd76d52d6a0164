//! Storage behind the dashboard.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers / service layer                          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │  Arc<dyn FullRepository>
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository traits (KpiRepository, UserRepository)      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  LocalRepository (in-memory, seeded at construction)    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is built once by the caller and handed down explicitly; there
//! is no process-global instance.

pub mod repositories;
pub mod repository;

pub use repositories::LocalRepository;
pub use repository::{
    ErrorContext, FullRepository, KpiRepository, Merged, RepositoryError, RepositoryResult,
    UserRepository,
};
