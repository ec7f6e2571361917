//! Keep-alive HTTP responder for hosts that stop idle processes.
//!
//! Runs as an independent task and shares no state with the bot.

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tracing::{error, info};

/// Body returned by `GET /`
pub const ALIVE: &str = "Bot is alive!";

/// Router answering `GET /` with 200
pub fn router() -> Router {
    Router::new().route("/", get(|| async { ALIVE }))
}

/// Serves the liveness router on an already bound listener.
pub async fn serve(listener: TcpListener) -> std::io::Result<()> {
    info!("Liveness endpoint listening on {}", listener.local_addr()?);
    axum::serve(listener, router()).await
}

/// Binds `addr` and serves in a background task.
///
/// Bind or serve failures are logged; the bot keeps running without the endpoint.
pub fn spawn(addr: String) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let listener = match TcpListener::bind(&addr).await {
            Ok(listener) => listener,
            Err(err) => {
                error!("failed to bind liveness listener on {addr}: {err}");
                return;
            }
        };
        if let Err(err) = serve(listener).await {
            error!("liveness endpoint failed: {err}");
        }
    })
}
