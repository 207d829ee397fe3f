// src/web/mod.rs

// Declare child modules
pub mod handlers;
pub mod routes;

// Re-export routing configuration so main.rs and tests can reach it directly.
pub use routes::configure_app_routes;
