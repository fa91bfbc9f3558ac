//! Typed methods over the backend REST surface

use assure_core::{CreateScanRequest, RagAnalysis, RagQueryRequest, ScanRecord};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::{ClientError, ClientResult, GENERIC_API_ERROR};

/// Environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "ASSURE_API_URL";

/// Base URL used when [`API_URL_ENV`] is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Client for the scan API.
///
/// No retries, no caching; transport failures and non-success statuses
/// surface directly as [`ClientError`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Client against an explicit base URL (no trailing slash expected).
    pub fn new(base_url: impl Into<String>) -> Self {
        // Session cookies ride along on every call, matching the browser
        // client's credentialed fetches.
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Client against the URL from `ASSURE_API_URL`, falling back to
    /// `http://localhost:8080`.
    pub fn from_env() -> Self {
        Self::new(resolve_base_url(std::env::var(API_URL_ENV).ok()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a scan of a repository branch.
    pub async fn create_scan(&self, request: &CreateScanRequest) -> ClientResult<ScanRecord> {
        self.send(Method::POST, "/api/v1/scans", Some(request)).await
    }

    /// All scans visible to the caller, newest first.
    pub async fn list_scans(&self) -> ClientResult<Vec<ScanRecord>> {
        self.send::<Vec<ScanRecord>, ()>(Method::GET, "/api/v1/scans", None)
            .await
    }

    /// Current lifecycle state of one scan.
    pub async fn scan_status(&self, scan_id: Uuid) -> ClientResult<ScanRecord> {
        self.send::<ScanRecord, ()>(
            Method::GET,
            &format!("/api/v1/scans/{scan_id}/status"),
            None,
        )
        .await
    }

    /// Full results for one scan.
    pub async fn scan_results(&self, scan_id: Uuid) -> ClientResult<ScanRecord> {
        self.send::<ScanRecord, ()>(Method::GET, &format!("/api/v1/scans/{scan_id}"), None)
            .await
    }

    /// Compliance analysis of a query (optionally with code context)
    /// against a compliance framework.
    pub async fn rag_query(&self, request: &RagQueryRequest) -> ClientResult<RagAnalysis> {
        self.send(Method::POST, "/api/v1/rag/query", Some(request))
            .await
    }

    /// Scans belonging to an organization.
    pub async fn organization_scans(&self, org_id: &str) -> ClientResult<Vec<ScanRecord>> {
        self.send::<Vec<ScanRecord>, ()>(
            Method::GET,
            &format!("/api/v1/organizations/{org_id}/scans"),
            None,
        )
        .await
    }

    async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: serde::Serialize,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "sending API request");

        let mut request = self
            .http
            .request(method, &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        Ok(response.json().await?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::from_env()
    }
}

fn resolve_base_url(configured: Option<String>) -> String {
    configured.unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Extract the backend's error message from a non-success response.
///
/// The backend reports failures as `{"error": "..."}` (FastAPI variants use
/// `{"detail": "..."}`); anything else collapses to the generic message.
async fn error_from_response(response: Response) -> ClientError {
    let status = response.status();
    let message = match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("error")
            .or_else(|| body.get("detail"))
            .and_then(|v| v.as_str())
            .unwrap_or(GENERIC_API_ERROR)
            .to_string(),
        Err(_) => GENERIC_API_ERROR.to_string(),
    };
    ClientError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_falls_back_to_localhost() {
        assert_eq!(resolve_base_url(None), DEFAULT_API_URL);
        assert_eq!(
            resolve_base_url(Some("https://api.example.com".to_string())),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_explicit_base_url() {
        let client = ApiClient::new("https://api.example.com");
        assert_eq!(client.base_url(), "https://api.example.com");
    }
}
