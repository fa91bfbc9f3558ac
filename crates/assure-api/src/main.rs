//! Assure Scanner mock API server

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assure_api::config::AppConfig;
use assure_api::store::{MemoryScanStore, ScanStore};
use assure_api::{app, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "assure_api=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Assure mock API server");

    let config = AppConfig::default();

    let store = MemoryScanStore::new();
    if config.seed_demo_data {
        store.seed_demo_data().await;
        info!("Seeded demo scan records");
    }

    let auth = assure_core::auth::provider_for(config.auth_provider);

    let state = Arc::new(AppState {
        store: Arc::new(store) as Arc<dyn ScanStore>,
        auth,
        config: config.clone(),
    });

    let router = app(state);

    info!("Listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, router)
        .await
        .expect("Server error");
}
