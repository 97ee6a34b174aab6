use std::net::SocketAddr;

use axum::Router;
use tracing::info;

/// Bind `addr` and serve `app` until the process is stopped.
pub async fn serve(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    info!(address = %addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
