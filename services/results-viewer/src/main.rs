//! Results viewer server.
//!
//! Serves the view / compare page over a results tree discovered at request
//! time, or exports that page to a static HTML file.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use gp_common::IgnoreSet;
use results_viewer::{build_router, AppState, ViewerConfig};
use viewer_http::{export_page, serve};

#[derive(Parser, Debug)]
#[command(name = "results-viewer")]
#[command(about = "Browse and compare GP regression result images")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:5001", env = "RESULTS_VIEWER_LISTEN_ADDR")]
    listen: String,

    /// Directory holding <date>/<variable>/kernels/<kernel>/ trees
    #[arg(short, long, default_value = "images", env = "RESULTS_VIEWER_RESULTS_ROOT")]
    root: PathBuf,

    /// Directory names never offered as options (repeatable)
    #[arg(long = "ignore", default_value = "arti")]
    ignore: Vec<String>,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "RESULTS_VIEWER_WORKER_THREADS")]
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

    let config = ViewerConfig::new(args.root, IgnoreSet::from_names(args.ignore));
    info!(
        root = %config.results_root.display(),
        ignore = ?config.ignore.iter().collect::<Vec<_>>(),
        "Loaded configuration"
    );

    match args.command {
        Some(Command::Export { output }) => {
            let state = Arc::new(AppState::new(config, None));
            export_page(build_router(state), &output).await?;
            Ok(())
        }
        None => {
            let prometheus = metrics_exporter_prometheus::PrometheusBuilder::new()
                .install_recorder()?;
            info!("Prometheus metrics exporter initialized");

            let state = Arc::new(AppState::new(config, Some(prometheus)));
            let addr: SocketAddr = args.listen.parse()?;

            info!("Starting results viewer");
            serve(build_router(state), addr).await
        }
    }
}
