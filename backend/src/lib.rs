//! # EHS Dashboard Backend
//!
//! Monthly environment, health and safety (EHS) and administrative KPIs for
//! a single site, kept in memory and edited through CSV uploads or manual
//! updates.
//!
//! ## Architecture
//!
//! - [`models`]: Monthly series, the EHS and Admin records, users
//! - [`ingest`]: Lenient CSV reading and metric-name matching
//! - [`export`]: CSV export of either record and the combined report
//! - [`summary`]: Month-over-month KPI summary
//! - [`auth`]: Password hashing, bearer tokens, role checks
//! - [`db`]: Repository traits and the in-memory store
//! - [`services`]: Upload, edit, export and account workflows
//! - [`config`]: TOML and environment configuration
//! - [`http`]: Axum-based REST API

// RepositoryError carries a structured context
#![allow(clippy::result_large_err)]

pub mod auth;
pub mod config;
pub mod db;
pub mod export;
pub mod ingest;
pub mod models;
pub mod services;
pub mod summary;

#[cfg(feature = "http-server")]
pub mod http;
