//! Assure Scanner API client
//!
//! A thin typed wrapper over the backend REST surface. Every method builds a
//! path under a configurable base URL, sends JSON with credentials, and
//! normalizes non-success responses into [`ClientError::Api`] carrying the
//! best-effort message extracted from the error body.

pub mod client;

use thiserror::Error;

pub use client::ApiClient;

/// Fallback message when the error body carries no usable message.
pub const GENERIC_API_ERROR: &str = "API request failed";

#[derive(Error, Debug)]
pub enum ClientError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    /// Transport-level failure (connection refused, DNS, decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;
