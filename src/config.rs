// src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Connection parameters for the Postgres the service writes to.
#[derive(Debug, Clone)]
pub struct DbConfig {
  pub host: String,
  pub port: u16,
  pub user: String,
  /// Optional on purpose: the deployment may rely on trust auth, but the
  /// variable exists so credentialed setups do not need code changes.
  pub password: Option<String>,
  pub dbname: String,
  /// Upper bound on a single pool checkout attempt.
  pub acquire_timeout: Duration,
}

/// Bounded-retry policy for connection acquisition. Exists to absorb startup
/// ordering races with the database process, not steady-state outages.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
  pub max_attempts: u32,
  pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub db: DbConfig,
  pub db_retry: RetryPolicy,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let db_host = get_env("DB_HOST")?;
    let db_port = get_env("DB_PORT")
      .unwrap_or_else(|_| "5432".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid DB_PORT: {}", e)))?;
    let db_user = get_env("DB_USER")?;
    let db_dbname = get_env("DB_DBNAME")?;
    let db_password = env::var("DB_PASSWORD").ok();
    if db_password.is_none() {
      tracing::warn!("DB_PASSWORD is not set; connecting without a password.");
    }

    let acquire_timeout_secs = get_env("DB_ACQUIRE_TIMEOUT_SECS")
      .unwrap_or_else(|_| "3".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid DB_ACQUIRE_TIMEOUT_SECS: {}", e)))?;

    let max_attempts = get_env("DB_CONNECT_ATTEMPTS")
      .unwrap_or_else(|_| "10".to_string())
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DB_CONNECT_ATTEMPTS: {}", e)))?;
    if max_attempts == 0 {
      return Err(AppError::Config("DB_CONNECT_ATTEMPTS must be at least 1".to_string()));
    }
    let retry_delay_secs = get_env("DB_CONNECT_RETRY_DELAY_SECS")
      .unwrap_or_else(|_| "5".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid DB_CONNECT_RETRY_DELAY_SECS: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      db: DbConfig {
        host: db_host,
        port: db_port,
        user: db_user,
        password: db_password,
        dbname: db_dbname,
        acquire_timeout: Duration::from_secs(acquire_timeout_secs),
      },
      db_retry: RetryPolicy {
        max_attempts,
        delay: Duration::from_secs(retry_delay_secs),
      },
    })
  }
}
