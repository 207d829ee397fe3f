// src/web/routes.rs

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;
use crate::web::handlers::{health_handlers, order_handlers};

// Payload errors (malformed JSON, missing fields, wrong-typed values) surface
// before the handler runs; route them through the validation taxonomy so the
// client sees 422 with a detail string instead of a bare 400.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(err.to_string()).into()
}

// This function is called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    // Health Check Route
    .route("/health", web::get().to(health_handlers::health_check_handler))
    // Order Ingestion Route
    .route("/orders", web::post().to(order_handlers::create_order_handler));
}
