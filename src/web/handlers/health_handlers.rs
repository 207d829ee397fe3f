// src/web/handlers/health_handlers.rs

use actix_web::HttpResponse;
use serde_json::json;

/// Liveness probe. Touches nothing on purpose: it must answer 200 whether or
/// not the database is reachable.
pub async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "status": "ok" }))
}
