use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use mergington::config::ServerConfig;
use mergington::database::ActivityDirectory;
use mergington::web::{build_router, AppState};

const BUILD_ID: &str = env!("MERGINGTON_BUILD_ID");

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // 2. Config + directory
    let config = ServerConfig::from_env();
    let directory = ActivityDirectory::seeded();
    info!(activities = directory.len(), build = BUILD_ID, "activity directory loaded");

    let app = build_router(AppState::new(directory), &config.static_dir);

    // 3. Bind (with fallback port)
    let addr = match config.bind_addr() {
        Ok(a) => a,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = match config.fallback_addr() {
                Ok(f) => f,
                Err(e) => {
                    error!("{}", e);
                    std::process::exit(1);
                }
            };
            warn!(%addr, %fallback, "bind failed: {}; trying fallback", e);
            match TcpListener::bind(fallback).await {
                Ok(l) => l,
                Err(e) => {
                    error!(%fallback, "bind failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    match listener.local_addr() {
        Ok(bound) => info!(
            "serving on http://{}/ (static from {})",
            bound,
            config.static_dir.display()
        ),
        Err(e) => warn!("cannot read bound address: {}", e),
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!("server stopped: {}", e);
        std::process::exit(1);
    }
}
