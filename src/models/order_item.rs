// src/models/order_item.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A line item row, as persisted. Matches the `order_items` table in
/// schema.sql. Line items have no identity outside their parent order.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderItem {
  pub id: i64,
  pub order_id: i64,
  pub product_id: String,
  pub quantity: i32,
  pub price_per_item: f64,
}

/// One product line of an incoming order submission.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemCreate {
  pub product_id: String,
  pub quantity: i32,
  pub price_per_item: f64,
}
