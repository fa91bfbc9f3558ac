//! Compliance analysis route
//!
//! Stand-in for the RAG-backed analysis endpoint of the real backend.
//! No document retrieval and no model call: the handler answers with a
//! canned analysis scoped to the requested framework, after the same
//! simulated latency as the scan list.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use tracing::info;

use assure_core::{RagAnalysis, RagQueryRequest};

use crate::routes::RouteResult;
use crate::AppState;

pub async fn rag_query(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RagQueryRequest>,
) -> RouteResult<RagAnalysis> {
    info!(
        compliance_framework = %payload.compliance_framework,
        "processing compliance query"
    );

    // Simulated backend latency.
    tokio::time::sleep(state.config.list_delay).await;

    let mut answer = format!(
        "No {} violations detected for the submitted query. \
         Review credential handling and data retention against the \
         framework's logging requirements.",
        payload.compliance_framework
    );
    if payload.include_examples {
        answer.push_str(
            " Example: store secrets in a managed vault rather than \
             environment files checked into the repository.",
        );
    }

    Ok(Json(RagAnalysis {
        answer,
        confidence: "High".to_string(),
        sources: vec![
            "Mock Analysis Engine".to_string(),
            format!("{} Framework", payload.compliance_framework),
            "Internal Security Guidelines".to_string(),
        ],
        timestamp: Utc::now().to_rfc3339(),
    }))
}
