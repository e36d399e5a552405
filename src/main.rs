use std::sync::Arc;

use actix_web::{App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront::app::{self, AppState};
use storefront::config::Config;
use storefront::middleware::RequestId;
use storefront::storage::JsonFileStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting Storefront Mock Commerce Backend");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Data directory: {}", config.storage.data_dir.display());

    // Prepare the flat-file store
    let store = Arc::new(JsonFileStore::new(config.storage.data_dir.clone()));
    store
        .ensure_files()
        .await
        .expect("Failed to prepare data files");

    let state = AppState::new(store);

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestId)
            .configure(|cfg| app::configure(cfg, &state))
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Mock service running on port {}", config.server.port);

    server.await
}
