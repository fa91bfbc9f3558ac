//! API routes

pub mod auth;
pub mod rag;
pub mod scans;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Error body shape the API client knows how to unwrap.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub(crate) fn not_found(message: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}

pub(crate) fn internal_error(message: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}

/// Handler result carrying either a JSON payload or a JSON error body.
pub type RouteResult<T> = Result<Json<T>, (StatusCode, Json<ErrorBody>)>;
