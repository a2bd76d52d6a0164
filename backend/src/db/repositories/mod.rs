//! Repository implementations.
//!
//! - `local`: in-memory store, the only backend; nothing is persisted

pub mod local;

pub use local::LocalRepository;
