//! Identity route
//!
//! Serves whatever the configured auth provider reports. With the stub
//! provider this is always the unauthenticated empty context, matching
//! the UI's expectation until a real identity provider is wired in.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use assure_core::UserContext;

use crate::AppState;

pub async fn me(State(state): State<Arc<AppState>>) -> Json<UserContext> {
    Json(state.auth.user_context())
}
