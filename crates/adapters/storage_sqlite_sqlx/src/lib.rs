//! # statusboard-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `LocationRepository` port defined in `statusboard-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `statusboard-app` (for port traits) and `statusboard-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod location_repo;
mod pool;

pub use error::StorageError;
pub use location_repo::SqliteLocationRepository;
pub use pool::{Config, Database};
