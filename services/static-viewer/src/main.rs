//! Static viewer server.
//!
//! Serves sensor-data and simulated-field result images from a fixed
//! catalog, or exports the default page to a static HTML file.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use static_viewer::{build_router, AppState, CatalogConfig};
use viewer_http::{export_page, serve};

#[derive(Parser, Debug)]
#[command(name = "static-viewer")]
#[command(about = "Browse GP regression result images from a fixed catalog")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:5000", env = "STATIC_VIEWER_LISTEN_ADDR")]
    listen: String,

    /// Directory served under /results
    #[arg(short, long, default_value = "results", env = "STATIC_VIEWER_RESULTS_ROOT")]
    root: PathBuf,

    /// Catalog YAML file (built-in catalog when omitted)
    #[arg(short, long, env = "STATIC_VIEWER_CATALOG")]
    catalog: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "STATIC_VIEWER_WORKER_THREADS")]
    worker_threads: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the default page once and write it to a file
    Export {
        /// Output file
        #[arg(short, long, default_value = "site.html")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(args))
}

async fn async_main(args: Args) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    let catalog = match CatalogConfig::load(args.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(code = e.code(), error = %e, "Failed to load catalog");
            return Err(e.into());
        }
    };

    match args.command {
        Some(Command::Export { output }) => {
            let state = Arc::new(AppState::new(catalog, args.root, None));
            export_page(build_router(state), &output).await?;
            Ok(())
        }
        None => {
            let prometheus = metrics_exporter_prometheus::PrometheusBuilder::new()
                .install_recorder()?;
            info!("Prometheus metrics exporter initialized");

            let state = Arc::new(AppState::new(catalog, args.root, Some(prometheus)));
            let addr: SocketAddr = args.listen.parse()?;

            info!("Starting static viewer");
            serve(build_router(state), addr).await
        }
    }
}
