use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use propbot_catalog::{CatalogSource, JsonFileCatalog};
use propbot_config::{ReplyTable, Settings};
use propbot_engine::ChatEngine;
use propbot_server::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load().context("loading settings")?;

    let replies = match &settings.replies_path {
        Some(path) => {
            ReplyTable::load(path).with_context(|| format!("loading reply table from {path}"))?
        },
        None => ReplyTable::default(),
    };

    let catalog: Arc<dyn CatalogSource> = Arc::new(JsonFileCatalog::new(
        &settings.catalog.basics,
        &settings.catalog.characteristics,
        &settings.catalog.images,
    ));
    // Fail fast on unreadable data files instead of at first request.
    let snapshot = catalog
        .snapshot()
        .await
        .context("loading property catalog")?;
    tracing::info!(listings = snapshot.len(), "catalog loaded");

    let state = AppState::new(ChatEngine::new(replies), catalog);
    let addr = settings.bind_addr();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to install shutdown handler");
        return;
    }
    tracing::info!("shutting down");
}
