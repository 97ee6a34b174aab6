//! Static viewer service library.
//!
//! Serves sensor-data and simulated-field tabs over a fixed catalog of
//! dates, sensor variables and kernels loaded once at startup.

pub mod config;
pub mod handlers;
pub mod metrics;
pub mod page;
pub mod paths;
pub mod resolve;
pub mod server;
pub mod state;

pub use config::CatalogConfig;
pub use server::build_router;
pub use state::AppState;
