//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod analyze;
pub mod health;

pub use analyze::analyze;
pub use health::health;
