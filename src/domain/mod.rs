//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for reports and scoring outcomes
//! - `ports`: Trait definitions for optional inference backends

pub mod entities;
pub mod ports;
