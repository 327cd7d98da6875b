//! HTTP server entry point.

use crate::routes::build_router;
use crate::state::SharedState;

/// Bind and serve until the process is stopped.
pub async fn run(state: SharedState) -> std::io::Result<()> {
    let addr = state.config.http.bind_addr;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "bigfive-api listening");
    axum::serve(listener, app).await
}
