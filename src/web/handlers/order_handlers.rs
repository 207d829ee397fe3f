// src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::db;
use crate::errors::AppError;
use crate::models::OrderCreate;
use crate::services::order_service;
use crate::state::AppState;

#[instrument(name = "handler::create_order", skip(app_state, payload))]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<OrderCreate>,
) -> Result<HttpResponse, AppError> {
  let order = payload.into_inner();

  // Validate before touching the database: malformed input must not consume
  // a connection.
  order.validate()?;

  // One pooled connection per request. The checkout guard is dropped on every
  // exit path below, which returns the connection to the pool exactly once.
  let mut conn = db::acquire_with_retry(&app_state.db_pool, &app_state.config.db_retry).await?;

  let order_id = order_service::create_order(&mut conn, &order).await?;

  info!(order_id, "Order submission accepted.");
  Ok(HttpResponse::Created().json(json!({
    "message": "Order created successfully",
    "order_id": order_id
  })))
}
