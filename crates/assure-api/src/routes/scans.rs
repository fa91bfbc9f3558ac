//! Scan routes
//!
//! The mock lifecycle: POST creates a record in the `running` state and
//! answers with it immediately; a store-owned timer flips it to
//! `completed` with pseudo-random counts after the configured delay.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use tracing::info;
use uuid::Uuid;

use assure_core::{CreateScanRequest, ScanRecord};

use crate::routes::{internal_error, not_found, RouteResult};
use crate::AppState;

pub async fn create_scan(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateScanRequest>,
) -> RouteResult<ScanRecord> {
    let branch = payload.branch_or_default();
    let scan = ScanRecord::new(payload.repository_url, branch, payload.enable_ai_analysis);

    state
        .store
        .insert(scan.clone())
        .await
        .map_err(|e| internal_error(&e.to_string()))?;
    state
        .store
        .schedule_completion(scan.scan_id, state.config.completion_delay)
        .await;

    info!(scan_id = %scan.scan_id, repository_url = %scan.repository_url, "scan created");

    // Pre-completion state; the caller polls for the transition.
    Ok(Json(scan))
}

pub async fn list_scans(State(state): State<Arc<AppState>>) -> RouteResult<Vec<ScanRecord>> {
    // Simulated backend latency.
    tokio::time::sleep(state.config.list_delay).await;

    let scans = state
        .store
        .list()
        .await
        .map_err(|e| internal_error(&e.to_string()))?;
    Ok(Json(scans))
}

pub async fn get_scan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> RouteResult<ScanRecord> {
    find_scan(&state, id).await
}

pub async fn scan_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> RouteResult<ScanRecord> {
    find_scan(&state, id).await
}

/// The mock records carry no organization id, so this returns the whole
/// list; the real backend filters server-side.
pub async fn organization_scans(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<String>,
) -> RouteResult<Vec<ScanRecord>> {
    info!(%org_id, "organization scan listing served from mock store");
    let scans = state
        .store
        .list()
        .await
        .map_err(|e| internal_error(&e.to_string()))?;
    Ok(Json(scans))
}

async fn find_scan(state: &AppState, id: Uuid) -> RouteResult<ScanRecord> {
    state
        .store
        .find_by_id(id)
        .await
        .map_err(|e| internal_error(&e.to_string()))?
        .map(Json)
        .ok_or_else(|| not_found("scan not found"))
}
