mod error;
mod handlers;
mod router;
mod state;

pub use router::create_router;
pub use state::AppState;

use anyhow::Context;

use crate::Config;

/// Run the HTTP server until the process is stopped
pub async fn run(config: Config, state: AppState) -> anyhow::Result<()> {
    let router = create_router(state);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    tracing::info!("names server listening on http://{}", addr);

    axum::serve(listener, router).await.context("serving HTTP")?;

    Ok(())
}
