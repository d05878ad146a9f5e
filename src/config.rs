//! Configuration management for wishbox.
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present). The resulting [`Config`] is an owned value handed to
//! [`AppState`](crate::AppState) at startup.

use std::env;
use std::net::SocketAddr;

use anyhow::Context;

use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub admin: AdminConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Address to bind the listener to.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub path: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Default)]
pub struct AdminConfig {
    /// Shared secret for the admin view. `None` when unset or empty.
    pub password: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let port = env_or("PORT", "3000")
            .parse()
            .map_err(|e| Error::InvalidConfig(format!("PORT: {}", e)))?;

        let max_connections = env_or("DATABASE_MAX_CONNECTIONS", "5")
            .parse()
            .map_err(|e| Error::InvalidConfig(format!("DATABASE_MAX_CONNECTIONS: {}", e)))?;

        let format = env_or("LOG_FORMAT", "pretty")
            .parse()
            .map_err(Error::InvalidConfig)?;

        Ok(Self {
            server: ServerConfig {
                host: env_or("HOST", "0.0.0.0"),
                port,
            },
            database: DatabaseConfig {
                path: env_or("DATABASE_PATH", "./data/wishbox.db"),
                max_connections,
            },
            admin: AdminConfig {
                password: admin_password(
                    env::var("ADMIN_PASSWORD").ok(),
                    env::var("PASSWORD").ok(),
                ),
            },
            log: LogConfig { format },
        })
    }

    /// In-memory configuration for tests and local experiments.
    pub fn in_memory(password: Option<&str>) -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                path: ":memory:".to_string(),
                max_connections: 1,
            },
            admin: AdminConfig {
                password: admin_password(password.map(str::to_string), None),
            },
            log: LogConfig::default(),
        }
    }
}

/// `ADMIN_PASSWORD` wins over the legacy `PASSWORD`; empty counts as unset.
fn admin_password(primary: Option<String>, legacy: Option<String>) -> Option<String> {
    primary
        .filter(|p| !p.is_empty())
        .or_else(|| legacy.filter(|p| !p.is_empty()))
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
