//! atrium-web server binary

use anyhow::Result;
use atrium_web::{config::SiteConfig, handlers, observability, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = SiteConfig::load()?;
    observability::init(&config.logging)?;

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "starting atrium-web"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::with_config(config)?;
    tracing::info!(projects = state.catalog().len(), "project catalog loaded");

    let app = handlers::router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
