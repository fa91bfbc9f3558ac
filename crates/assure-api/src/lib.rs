//! Assure Scanner mock backend
//!
//! An in-process stand-in for the real scan backend, used for local
//! development without a server. Scan records live in process memory and
//! are lost on restart; a freshly created scan flips from running to
//! completed after a configurable delay.

pub mod config;
pub mod middleware;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use assure_core::AuthProvider;

use crate::config::AppConfig;
use crate::store::ScanStore;

/// Application state shared across handlers
pub struct AppState {
    pub store: Arc<dyn ScanStore>,
    pub auth: Arc<dyn AuthProvider>,
    pub config: AppConfig,
}

/// Build the full router: scan routes, identity route, health check,
/// permissive CORS for the dev UI, request tracing, and the security
/// header layer.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(routes::health_check))

        // Identity
        .route("/api/v1/me", get(routes::auth::me))

        // Compliance analysis
        .route("/api/v1/rag/query", post(routes::rag::rag_query))

        // Scans
        .route("/api/v1/scans", post(routes::scans::create_scan))
        .route("/api/v1/scans", get(routes::scans::list_scans))
        .route("/api/v1/scans/:id", get(routes::scans::get_scan))
        .route("/api/v1/scans/:id/status", get(routes::scans::scan_status))
        .route(
            "/api/v1/organizations/:org_id/scans",
            get(routes::scans::organization_scans),
        )

        // CORS
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )

        // Tracing
        .layer(TraceLayer::new_for_http())

        // Security headers
        .layer(axum::middleware::from_fn(middleware::security_headers))

        // State
        .with_state(state)
}
