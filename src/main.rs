use anyhow::Context;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities_site::config::ServerConfig;
use activities_site::database::{activities_repo::RosterStore, seed};
use activities_site::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    // 2. Seed the rosters
    let activities = match &config.seed_file {
        Some(path) => seed::load_from_file(path)?,
        None => seed::default_activities()?,
    };
    info!(activities = activities.len(), "Activity rosters ready");
    let store = RosterStore::new(activities);

    // 3. Build the app
    let app = web::app(store, &config.static_dir);

    // 4. Start the server (with fallback port)
    let addr: SocketAddr = config
        .bind_addr()
        .parse()
        .with_context(|| format!("invalid bind address {}", config.bind_addr()))?;

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let Some(fallback) = config.fallback_addr() else {
                return Err(e).with_context(|| format!("could not bind {}", addr));
            };
            let fallback: SocketAddr = fallback
                .parse()
                .with_context(|| format!("invalid fallback address {}", fallback))?;
            warn!(%addr, %fallback, error = %e, "Could not bind, trying fallback");
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind fallback address {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server running on http://{}", bound_addr);
    info!("Open http://{}{} to sign up", bound_addr, web::INDEX_PATH);

    axum::serve(listener, app).await?;
    Ok(())
}
