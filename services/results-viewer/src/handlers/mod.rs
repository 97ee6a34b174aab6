//! HTTP request handlers for the results viewer.
//!
//! - `index`: the view / compare page
//! - `health`: health check and Prometheus metrics

pub mod health;
pub mod index;

pub use health::{health_handler, metrics_handler};
pub use index::index_handler;
