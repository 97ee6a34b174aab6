//! Results viewer service library.
//!
//! Discovers dates, variables and kernels from the results tree on every
//! request and renders view / compare pages over the matching images.

pub mod config;
pub mod handlers;
pub mod metrics;
pub mod page;
pub mod resolve;
pub mod server;
pub mod state;

pub use config::ViewerConfig;
pub use server::build_router;
pub use state::AppState;
