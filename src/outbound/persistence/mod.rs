//! PostgreSQL persistence adapters.
//!
//! Implements the `UserStore` and `FileStore` ports with Diesel over an
//! async bb8 pool. Embedded migrations keep deployed schemas in step with
//! the table definitions in [`schema`].

mod diesel_file_store;
mod diesel_user_store;
mod error_mapping;
mod models;
mod pool;
pub(crate) mod schema;

pub use diesel_file_store::DieselFileStore;
pub use diesel_user_store::DieselUserStore;
pub use pool::{DbPool, PoolConfig, PoolError};

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while bringing the schema up to date.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("failed to connect for migrations: {0}")]
    Connect(#[from] diesel::ConnectionError),
    #[error("failed to run pending migrations: {0}")]
    Run(String),
    #[error("migration task was cancelled: {0}")]
    Join(String),
}

/// Run all pending migrations against `database_url`.
///
/// Diesel migrations are synchronous, so the work is pushed onto a blocking
/// thread rather than stalling the async runtime.
pub async fn run_pending_migrations(database_url: &str) -> Result<(), MigrationError> {
    let database_url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&database_url)?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|err| MigrationError::Run(err.to_string()))?;
        Ok(())
    })
    .await
    .map_err(|err| MigrationError::Join(err.to_string()))?
}
