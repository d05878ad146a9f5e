//! Application state for wishbox.
//!
//! Contains the shared state that is passed to all handlers. It is built
//! once in `main` and dropped on shutdown; nothing here is global.

use std::sync::Arc;

use crate::config::Config;
use crate::db::DbPool;
use crate::services::{AccessGate, WishStore};
use crate::Result;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DbPool,
    /// Gift wish persistence.
    pub wishes: WishStore,
    /// Admin password gate.
    pub gate: AccessGate,
    /// Loaded configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Open the database, apply the schema and wire up services.
    pub async fn new(config: Config) -> Result<Self> {
        let db = crate::db::init_pool(&config.database).await?;
        crate::db::initialize_schema(&db).await?;

        Ok(Self::with_pool(db, config))
    }

    /// Build state around an already initialized pool.
    pub fn with_pool(db: DbPool, config: Config) -> Self {
        let wishes = WishStore::new(db.clone());
        let gate = AccessGate::new(&config.admin);

        Self {
            db,
            wishes,
            gate,
            config: Arc::new(config),
        }
    }

    /// Close the database pool, waiting for in-flight queries.
    pub async fn close(&self) {
        self.db.close().await;
    }
}
