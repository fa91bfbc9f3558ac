//! Compliance analysis models
//!
//! Request/response shapes for the RAG-backed compliance endpoint: the
//! caller submits a query scoped to a compliance framework, optionally
//! with code context, and gets back an analysis with its sources.

use serde::{Deserialize, Serialize};

fn default_include_examples() -> bool {
    true
}

/// Request body for a compliance analysis query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagQueryRequest {
    pub query: String,
    pub compliance_framework: String,
    pub code_context: Option<String>,
    #[serde(default = "default_include_examples")]
    pub include_examples: bool,
}

/// Analysis produced for a compliance query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagAnalysis {
    pub answer: String,
    pub confidence: String,
    pub sources: Vec<String>,
    pub timestamp: String,
}
