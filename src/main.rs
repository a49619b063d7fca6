use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{info, warn};

use mergington_activities::logging;
use mergington_activities::web::{build_router, AppState};
use mergington_activities::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    dotenv().ok();

    // 1. Config
    let config = ServerConfig::from_env()?;

    // 2. Logging
    logging::init_logger(config.log_format);

    // 3. Roster, seeded once for the lifetime of the process
    let state = Arc::new(AppState::seeded());
    let seeded = state.roster.snapshot().await.activities.len();
    info!(activities = seeded, "Roster loaded from seed data");

    let app = build_router(state, &config.static_dir);

    // 4. Bind (with fallback port)
    let addr = config.addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let Some(fallback) = config.fallback_addr() else {
                return Err(e.into());
            };
            warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server running on http://{}", bound_addr);
    info!("Open http://{}/ to get started", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
