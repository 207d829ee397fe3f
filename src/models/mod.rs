// src/models/mod.rs

//! Contains data structures representing database entities and request payloads.

// Declare child modules for each model
pub mod order;
pub mod order_item;

// Re-export the model structs for convenient access
pub use order::{Order, OrderCreate};
pub use order_item::{OrderItem, OrderItemCreate};
