use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use cinematch::{
    config::Config,
    routes::create_router,
    services::{
        providers::{PosterProvider, StreamingProvider, TmdbProvider, WatchmodeProvider},
        HttpBackend, PosterResolver, StreamingResolver,
    },
    ui::Controller,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cinematch=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    let poster_provider: Option<Arc<dyn PosterProvider>> = config.tmdb_credential().map(|key| {
        Arc::new(TmdbProvider::new(
            key.to_string(),
            config.tmdb_search_url.clone(),
            config.tmdb_image_base.clone(),
        )) as Arc<dyn PosterProvider>
    });
    let streaming_provider: Option<Arc<dyn StreamingProvider>> =
        config.watchmode_credential().map(|key| {
            Arc::new(WatchmodeProvider::new(
                key.to_string(),
                config.watchmode_api_url.clone(),
            )) as Arc<dyn StreamingProvider>
        });

    let posters = PosterResolver::new(poster_provider);
    let streaming = StreamingResolver::new(streaming_provider);
    if !posters.is_configured() {
        tracing::warn!("TMDB API key not configured, posters disabled");
    }
    if !streaming.is_configured() {
        tracing::warn!("Watchmode API key not configured, streaming info disabled");
    }

    let controller = Controller::new(
        Arc::new(HttpBackend::new(config.backend_url.clone())),
        posters,
        streaming,
        Duration::from_millis(config.suggestion_debounce_ms),
    );
    controller.set_model(config.default_model).await;
    controller.boot().await;

    let app = create_router(controller);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        address = %addr,
        backend = %config.backend_url,
        "Server running"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
