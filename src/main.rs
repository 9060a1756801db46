//! SiteSearch-RS: sitewide search and autosuggest API
//!
//! This is the main entry point for the application.

use anyhow::Result;
use sitesearch_rs::{
    config::Settings,
    engine::ElasticClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Starting SiteSearch-RS v{}", sitesearch_rs::VERSION);

    // Load configuration
    let settings = load_settings()?;
    info!(
        "Search alias: {}, autosuggest alias: {}",
        settings.search.alias_name, settings.autosuggest.alias_name
    );

    // Initialize the engine client
    let engine = ElasticClient::with_settings(&settings.elasticsearch)?;
    info!("Engine client initialized for {}", settings.elasticsearch.url);

    // Create application state
    let bind_address = settings.server.bind_address.clone();
    let port = settings.server.port;
    let state = AppState::new(settings, Arc::new(engine));

    // Create router
    let app = create_router(state);

    // Bind address
    let addr = SocketAddr::new(bind_address.parse()?, port);

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Check for settings file in various locations
    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/sitesearch/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("sitesearch-rs/settings.yml"))
            .unwrap_or_default(),
    ];

    // Check environment variable first
    if let Ok(path) = std::env::var("SITESEARCH_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Try each default path
    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
