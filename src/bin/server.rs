//! Portal server: builds the in-memory store, mounts common and content routes, and serves.

use ministry_portal::{build_router, AppState, MemStorage, ServerConfig};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ministry_portal=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let storage = if config.seed {
        MemStorage::new()
    } else {
        MemStorage::empty()
    };
    let state = AppState::new(Arc::new(storage));
    let app = build_router(state, &config);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(seed = config.seed, "listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
