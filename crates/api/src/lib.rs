//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   GET    /api/jobs?_limit=<n>
//!   GET    /api/jobs/:id
//!   POST   /api/jobs
//!   PUT    /api/jobs/:id
//!   DELETE /api/jobs/:id

pub mod error;
pub mod handlers;
pub mod router;

use tokio::net::TcpListener;
use tracing::{info, warn};

pub use error::ApiError;
pub use handlers::AppState;
pub use router::{build_routes, JOBS_PREFIX};

/// Bind `bind` and serve the API until Ctrl-C is received.
pub async fn serve(bind: &str, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, build_routes(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received ctrl+c interrupt, closing server"),
        Err(e) => {
            warn!("Unable to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    }
}
