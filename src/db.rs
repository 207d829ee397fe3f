// src/db.rs

//! Connection provider: builds the lazy Postgres pool and checks connections
//! out of it with a bounded retry policy, so requests arriving while the
//! database process is still coming up are absorbed instead of failed.

use crate::config::{DbConfig, RetryPolicy};
use crate::errors::AppError;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{PgPool, Postgres};
use std::future::Future;

/// Builds the process-wide pool. Lazy: no connection is opened until a
/// request needs one, so the service starts cleanly before the database does.
pub fn build_pool(db: &DbConfig) -> PgPool {
  let mut options = PgConnectOptions::new()
    .host(&db.host)
    .port(db.port)
    .username(&db.user)
    .database(&db.dbname);
  if let Some(password) = &db.password {
    options = options.password(password);
  }

  PgPoolOptions::new()
    .acquire_timeout(db.acquire_timeout)
    .connect_lazy_with(options)
}

/// Runs `operation` up to `policy.max_attempts` times, sleeping `policy.delay`
/// between failed attempts. The 1-based attempt number is passed to the
/// operation. The last error is returned once the policy is exhausted.
pub async fn with_retry<T, E, F, Fut>(policy: &RetryPolicy, mut operation: F) -> std::result::Result<T, E>
where
  E: std::fmt::Display,
  F: FnMut(u32) -> Fut,
  Fut: Future<Output = std::result::Result<T, E>>,
{
  let mut attempt = 1u32;
  loop {
    match operation(attempt).await {
      Ok(value) => return Ok(value),
      Err(e) if attempt < policy.max_attempts => {
        tracing::warn!(
          attempt,
          max_attempts = policy.max_attempts,
          error = %e,
          "Database connection failed. Retrying..."
        );
        tokio::time::sleep(policy.delay).await;
        attempt += 1;
      }
      Err(e) => return Err(e),
    }
  }
}

/// Checks one connection out of the pool for the current request, retrying
/// per `policy`. Exhaustion maps to `AppError::ServiceUnavailable` (503); the
/// returned guard goes back to the pool when dropped.
pub async fn acquire_with_retry(pool: &PgPool, policy: &RetryPolicy) -> Result<PoolConnection<Postgres>, AppError> {
  match with_retry(policy, |_| pool.acquire()).await {
    Ok(conn) => {
      tracing::info!("Successfully connected to the database.");
      Ok(conn)
    }
    Err(e) => {
      tracing::error!(error = %e, "Could not connect to the database after several retries.");
      Err(AppError::ServiceUnavailable)
    }
  }
}
