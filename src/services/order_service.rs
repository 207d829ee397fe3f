// src/services/order_service.rs

//! Persists an order header and its line items as a single transaction.

use sqlx::{Connection, PgConnection};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::OrderCreate;

/// Writes `order` to the database atomically and returns the generated order
/// id.
///
/// The header insert runs first so every item row can reference the generated
/// id. Any failure makes this function return early with the driver error;
/// the uncommitted transaction guard rolls back on drop, so no partial order
/// is ever observable from another connection.
#[instrument(
  name = "order_service::create_order",
  skip(conn, order),
  fields(user_id = %order.user_id, item_count = order.items.len())
)]
pub async fn create_order(conn: &mut PgConnection, order: &OrderCreate) -> Result<i64, AppError> {
  let mut tx = conn.begin().await?;

  // 1. Insert into the main 'orders' table and take the generated id.
  let order_id: i64 = sqlx::query_scalar("INSERT INTO orders (user_id, total_amount) VALUES ($1, $2) RETURNING id")
    .bind(&order.user_id)
    .bind(order.total_amount)
    .fetch_one(&mut *tx)
    .await?;

  // 2. Insert each item into the 'order_items' table, in input order.
  for item in &order.items {
    sqlx::query("INSERT INTO order_items (order_id, product_id, quantity, price_per_item) VALUES ($1, $2, $3, $4)")
      .bind(order_id)
      .bind(&item.product_id)
      .bind(item.quantity)
      .bind(item.price_per_item)
      .execute(&mut *tx)
      .await?;
  }

  tx.commit().await?;

  info!(order_id, "Order created successfully.");
  Ok(order_id)
}
