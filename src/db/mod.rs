//! Database layer for wishbox.
//!
//! Provides SQLite connection pooling and the gift wish queries.

mod pool;
mod wishes;

pub use pool::*;
pub use wishes::*;

use crate::config::DatabaseConfig;
use crate::Result;
use tracing::info;

/// Type alias for the SQLite connection pool.
pub type DbPool = sqlx::SqlitePool;

/// Initialize the database connection pool.
///
/// Creates parent directories if needed. A `:memory:` path yields a
/// single-connection pool holding a private database.
pub async fn init_pool(config: &DatabaseConfig) -> Result<DbPool> {
    let pool = create_pool_with_config(&config.path, PoolConfig::for_database(config)).await?;

    info!(path = %config.path, "Database pool initialized");

    Ok(pool)
}

/// Initialize the database schema.
///
/// Applies the complete schema from schema.sql. Uses IF NOT EXISTS
/// clauses so it's safe to run multiple times.
pub async fn initialize_schema(pool: &DbPool) -> Result<()> {
    let schema = include_str!("../../schema.sql");

    info!("Initializing database schema");

    for statement in schema_statements(schema) {
        sqlx::query(&statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully");

    Ok(())
}

/// Split a schema script into statements.
///
/// `--` comments are removed before splitting on `;`, so a semicolon inside
/// a comment never starts a new statement.
fn schema_statements(schema: &str) -> Vec<String> {
    let without_comments: String = schema
        .lines()
        .map(|line| match line.find("--") {
            Some(pos) => &line[..pos],
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n");

    without_comments
        .split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty())
        .map(str::to_string)
        .collect()
}
