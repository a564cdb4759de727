mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("farmtech_server=info,tower_http=info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!(code = e.error_code(), error = %e, "farmtech server stopped");
        return Err(e);
    }
    Ok(())
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    tracing::info!(port = config.port, site_root = %config.site_root.display(), "loaded server configuration");

    let app = routes::app(&config)?;
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "farmtech listening");
    axum::serve(listener, app).await?;
    Ok(())
}
