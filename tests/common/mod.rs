// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::Arc;
use std::time::Duration;

use actix_web::web::Data;
use orders_service::config::{AppConfig, DbConfig, RetryPolicy};
use orders_service::db;
use orders_service::state::AppState;

/// A configuration whose database address has nothing listening on it, with a
/// retry policy shrunk to keep tests fast. Any code path that tries to open a
/// connection under this config fails quickly and deterministically.
pub fn unreachable_config() -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    db: DbConfig {
      host: "127.0.0.1".to_string(),
      port: 1, // Nothing listens here
      user: "orders".to_string(),
      password: None,
      dbname: "orders".to_string(),
      acquire_timeout: Duration::from_millis(100),
    },
    db_retry: RetryPolicy {
      max_attempts: 2,
      delay: Duration::from_millis(10),
    },
  }
}

/// Builds the shared application state for an in-process test service.
pub fn app_state(config: AppConfig) -> Data<AppState> {
  let db_pool = db::build_pool(&config.db);
  Data::new(AppState {
    db_pool,
    config: Arc::new(config),
  })
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
