use anyhow::Context;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::AppConfig;
use activities::database::ActivityStore;
use activities::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,activities=debug,tower_http=debug".into()),
        )
        .init();

    let config = AppConfig::from_env();
    let store = ActivityStore::seeded();
    let app = web::app_router(store, &config.static_dir);

    let addr: SocketAddr = config
        .bind_addr()
        .parse()
        .with_context(|| format!("invalid bind address {}", config.bind_addr()))?;

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback: SocketAddr = config
                .fallback_bind_addr()
                .parse()
                .with_context(|| format!("invalid bind address {}", config.fallback_bind_addr()))?;
            warn!("could not bind {}: {}; trying {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind fallback {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("serving activities on http://{}", bound_addr);
    info!(static_dir = %config.static_dir.display(), "front-end at http://{}/", bound_addr);

    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
