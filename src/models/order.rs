// src/models/order.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;
use crate::models::order_item::OrderItemCreate;

/// An order header row, as persisted. Matches the `orders` table in schema.sql.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub id: i64,
  pub user_id: String,
  pub total_amount: f64,
}

/// An incoming order submission. `user_id` is a UUID by convention but is
/// carried as an opaque string and never parsed.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreate {
  pub user_id: String,
  pub total_amount: f64,
  pub items: Vec<OrderItemCreate>,
}

impl OrderCreate {
  /// Structural validation of a submission. Collects every violation so the
  /// response names all offending fields, not just the first one found.
  ///
  /// An empty `items` list is deliberately accepted: a header-only order is
  /// not rejected here.
  pub fn validate(&self) -> Result<(), AppError> {
    let mut violations = Vec::new();

    if self.user_id.is_empty() {
      violations.push("user_id must be a non-empty string".to_string());
    }
    // `>` is false for NaN, so NaN is rejected along with zero and negatives.
    if !(self.total_amount > 0.0) {
      violations.push("total_amount must be greater than 0".to_string());
    }
    for (index, item) in self.items.iter().enumerate() {
      if item.quantity <= 0 {
        violations.push(format!("items[{}].quantity must be greater than 0", index));
      }
      if !(item.price_per_item > 0.0) {
        violations.push(format!("items[{}].price_per_item must be greater than 0", index));
      }
    }

    if violations.is_empty() {
      Ok(())
    } else {
      Err(AppError::Validation(violations.join("; ")))
    }
  }
}
