use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lunchbot_core::{
    load_config, validate_config, Dispatcher, HipChatMessenger, MemoryCache, Messenger,
    RestaurantCache, RestaurantSearcher, SlackMessenger, TenbisSearcher,
};

use lunchbot_server::api::create_router;
use lunchbot_server::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("LUNCHBOT_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Search endpoint: {}", config.tenbis.url);
    if config.cache.enabled {
        info!("Result cache enabled (ttl: {}h)", config.cache.ttl_hours);
    } else {
        info!("Result cache disabled");
    }

    // Wire up the dispatcher
    let messengers: Vec<Arc<dyn Messenger>> = vec![
        Arc::new(HipChatMessenger::new()),
        Arc::new(SlackMessenger::new()),
    ];
    info!(
        "Messengers initialized: {}",
        messengers
            .iter()
            .map(|m| m.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let searcher: Arc<dyn RestaurantSearcher> =
        Arc::new(TenbisSearcher::new(config.tenbis.clone()));
    let cache: Arc<dyn RestaurantCache> = Arc::new(MemoryCache::new());
    let dispatcher = Arc::new(Dispatcher::new(
        messengers,
        searcher,
        Arc::clone(&cache),
        &config,
    ));

    // Create app state
    let state = Arc::new(AppState::new(config.clone(), dispatcher, cache));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
