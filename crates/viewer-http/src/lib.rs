//! HTTP plumbing shared by both viewer services.
//!
//! - `files`: the results directory mounted under a URL prefix
//! - `export`: render a page through a router and save it
//! - `metrics`: asset counters and the Prometheus endpoint body
//! - `serve`: bind and run a router

pub mod export;
pub mod files;
pub mod metrics;

mod serve;

pub use export::export_page;
pub use files::results_files;
pub use serve::serve;
