//! Data access for the Pagila sample database.
//!
//! Two interchangeable strategies sit behind the traits in [`services`]:
//!
//! - the entity strategy ([`repositories`], [`graph`], [`conversions`]) loads
//!   root rows as entities and resolves their associations with one batched
//!   query per association level;
//! - the SQL-builder strategy ([`sql`]) composes a single statement per call,
//!   nesting associated rows as JSON objects and arrays.

pub mod conversions;
pub mod entities;
pub mod error;
pub mod graph;
pub mod repositories;
pub mod services;
pub mod sql;

use sqlx::postgres::PgPoolOptions;
use sqlx::{Postgres, Transaction};

pub use error::{DbError, DbResult};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the bundled Pagila schema migrations.
///
/// Only needed for an empty database; a database restored from the public
/// Pagila dump already has the schema.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Begin a read-only transaction. Every service call runs inside one.
pub async fn begin_read_only(pool: &DbPool) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION READ ONLY")
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}
