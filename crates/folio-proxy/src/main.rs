use anyhow::Context;
use clap::Parser;
use folio_proxy::logging::init_logging;
use folio_proxy::{Config, ObjectStorage, ProxyState, SpotifyPlaylist, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging();

    let credentials = config.spotify_credentials();
    if credentials.is_none() {
        tracing::warn!("Spotify credentials missing; playlist endpoint will answer 500");
    }

    let playlist = SpotifyPlaylist::new(credentials, config.playlist_id.clone());
    let video = ObjectStorage::new(config.video_origin.clone(), config.video_timeout())
        .context("building video origin client")?;

    let site_dir = config.site_dir.is_dir().then_some(config.site_dir.as_path());
    if site_dir.is_none() {
        tracing::warn!(dir = %config.site_dir.display(), "Site directory not found; serving API only");
    }

    let app = router(ProxyState::new(playlist, video), site_dir);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    tracing::info!(addr = %config.bind, origin = %config.video_origin, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
