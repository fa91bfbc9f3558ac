//! Mock-server tests for [`ApiClient`].
//!
//! Uses [`wiremock`] to stand up a local HTTP server emulating the scan
//! backend, exercising the full request/response path without a real
//! server.
//!
//! Coverage:
//! - 2xx responses deserialize to the exact body
//! - POST body shape for scan creation
//! - error message extraction from `error` and `detail` fields
//! - generic fallback for unparseable / message-less error bodies
//! - path construction for the status / results / organization routes

use assure_client::{ApiClient, ClientError, GENERIC_API_ERROR};
use assure_core::{CreateScanRequest, RagQueryRequest, ScanStatus};
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn scan_json(scan_id: Uuid, status: &str) -> serde_json::Value {
    serde_json::json!({
        "scan_id": scan_id,
        "repository_url": "https://github.com/example/secure-app",
        "branch": "main",
        "status": status,
        "created_at": "2026-08-01T12:00:00Z",
        "files_scanned": if status == "completed" { Some(127) } else { None },
        "findings_count": if status == "completed" { Some(8) } else { None },
        "enable_ai_analysis": false,
    })
}

#[tokio::test]
async fn list_scans_returns_parsed_body() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/api/v1/scans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![scan_json(id, "completed")]))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let scans = client.list_scans().await.unwrap();

    assert_eq!(scans.len(), 1);
    assert_eq!(scans[0].scan_id, id);
    assert_eq!(scans[0].status, ScanStatus::Completed);
    assert_eq!(scans[0].files_scanned, Some(127));
}

#[tokio::test]
async fn create_scan_posts_request_body() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/api/v1/scans"))
        .and(body_partial_json(serde_json::json!({
            "repository_url": "https://github.com/example/secure-app",
            "branch": "develop",
            "enable_ai_analysis": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(scan_json(id, "running")))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let scan = client
        .create_scan(&CreateScanRequest {
            repository_url: "https://github.com/example/secure-app".to_string(),
            branch: Some("develop".to_string()),
            enable_ai_analysis: true,
        })
        .await
        .unwrap();

    assert_eq!(scan.scan_id, id);
    assert_eq!(scan.status, ScanStatus::Running);
    assert!(scan.files_scanned.is_none());
}

#[tokio::test]
async fn scan_status_hits_status_path() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/scans/{id}/status")))
        .respond_with(ResponseTemplate::new(200).set_body_json(scan_json(id, "running")))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let scan = client.scan_status(id).await.unwrap();
    assert_eq!(scan.status, ScanStatus::Running);
}

#[tokio::test]
async fn organization_scans_hits_org_path() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/api/v1/organizations/org-42/scans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![scan_json(id, "completed")]))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let scans = client.organization_scans("org-42").await.unwrap();
    assert_eq!(scans.len(), 1);
}

#[tokio::test]
async fn rag_query_posts_framework_and_parses_analysis() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/rag/query"))
        .and(body_partial_json(serde_json::json!({
            "query": "is credential storage compliant?",
            "compliance_framework": "PCI-DSS",
            "include_examples": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "answer": "No violations detected.",
            "confidence": "High",
            "sources": ["PCI-DSS Framework"],
            "timestamp": "2026-08-01T12:00:00Z",
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let analysis = client
        .rag_query(&RagQueryRequest {
            query: "is credential storage compliant?".to_string(),
            compliance_framework: "PCI-DSS".to_string(),
            code_context: None,
            include_examples: true,
        })
        .await
        .unwrap();

    assert_eq!(analysis.answer, "No violations detected.");
    assert_eq!(analysis.confidence, "High");
    assert_eq!(analysis.sources, vec!["PCI-DSS Framework"]);
}

#[tokio::test]
async fn rag_query_surfaces_detail_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/rag/query"))
        .respond_with(ResponseTemplate::new(500).set_body_json(
            serde_json::json!({"detail": "AI service error: quota exceeded"}),
        ))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client
        .rag_query(&RagQueryRequest {
            query: "anything".to_string(),
            compliance_framework: "SOC2".to_string(),
            code_context: None,
            include_examples: false,
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "AI service error: quota exceeded");
}

#[tokio::test]
async fn error_field_becomes_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/scans"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(serde_json::json!({"error": "organization suspended"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client.list_scans().await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status.as_u16(), 403);
            assert_eq!(message, "organization suspended");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn detail_field_becomes_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/scans"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"detail": "scan not found"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client.list_scans().await.unwrap_err();
    assert_eq!(err.to_string(), "scan not found");
}

#[tokio::test]
async fn error_field_wins_over_detail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/scans"))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            serde_json::json!({"error": "bad branch", "detail": "ignored"}),
        ))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client.list_scans().await.unwrap_err();
    assert_eq!(err.to_string(), "bad branch");
}

#[tokio::test]
async fn unparseable_error_body_falls_back_to_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/scans"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client.list_scans().await.unwrap_err();
    assert_eq!(err.to_string(), GENERIC_API_ERROR);
}

#[tokio::test]
async fn messageless_error_body_falls_back_to_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/scans"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(serde_json::json!({"code": 17})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client.list_scans().await.unwrap_err();
    assert_eq!(err.to_string(), GENERIC_API_ERROR);
}
