use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use kuulemma::config::AppConfig;
use kuulemma::database;
use kuulemma::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;
    let db = database::init_db(&config.database.url).await?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let state = AppState { db, config };
    let app = kuulemma::build_router(state);

    info!("Kuulemma listening at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
