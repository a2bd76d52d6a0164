//! Repository traits.

pub mod error;
pub mod kpi;
pub mod users;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use kpi::{KpiRepository, Merged};
pub use users::UserRepository;

/// Everything the HTTP layer needs from one backend.
pub trait FullRepository: KpiRepository + UserRepository {}

impl<T: KpiRepository + UserRepository> FullRepository for T {}
