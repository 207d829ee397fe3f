// src/lib.rs

//! Order-ingestion HTTP service.
//!
//! Accepts an order submission over HTTP and persists the order header and
//! its line items atomically across the `orders` / `order_items` table pair.
//! The schema itself is owned externally (see `schema.sql`); this service
//! only ever inserts.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;
