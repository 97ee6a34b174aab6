//! HTTP request handlers for the static viewer.

pub mod health;
pub mod index;

pub use health::{health_handler, metrics_handler};
pub use index::index_handler;
