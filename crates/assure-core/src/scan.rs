//! Scan models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a scan.
///
/// The only legal transition is `Running` -> `Completed`; a completed scan
/// never goes back to running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Running,
    Completed,
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanStatus::Running => write!(f, "running"),
            ScanStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A single scan of a repository branch.
///
/// `files_scanned` and `findings_count` stay `None` until the scan
/// completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRecord {
    pub scan_id: Uuid,
    pub repository_url: String,
    pub branch: String,
    pub status: ScanStatus,
    pub created_at: DateTime<Utc>,
    pub files_scanned: Option<u32>,
    pub findings_count: Option<u32>,
    #[serde(default)]
    pub enable_ai_analysis: bool,
}

impl ScanRecord {
    /// Build a fresh record in the pre-completion state.
    pub fn new(repository_url: String, branch: String, enable_ai_analysis: bool) -> Self {
        Self {
            scan_id: Uuid::new_v4(),
            repository_url,
            branch,
            status: ScanStatus::Running,
            created_at: Utc::now(),
            files_scanned: None,
            findings_count: None,
            enable_ai_analysis,
        }
    }
}

/// Request body for creating a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateScanRequest {
    pub repository_url: String,
    pub branch: Option<String>,
    #[serde(default)]
    pub enable_ai_analysis: bool,
}

impl CreateScanRequest {
    /// Branch to scan, defaulting to `main` when unspecified.
    pub fn branch_or_default(&self) -> String {
        self.branch.clone().unwrap_or_else(|| "main".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ScanStatus::Running).unwrap(),
            "\"running\""
        );
        assert_eq!(
            serde_json::to_string(&ScanStatus::Completed).unwrap(),
            "\"completed\""
        );
    }

    #[test]
    fn test_new_record_is_running_with_null_counts() {
        let scan = ScanRecord::new(
            "https://github.com/example/app".to_string(),
            "main".to_string(),
            false,
        );
        assert_eq!(scan.status, ScanStatus::Running);
        assert!(scan.files_scanned.is_none());
        assert!(scan.findings_count.is_none());
    }

    #[test]
    fn test_branch_defaults_to_main() {
        let req: CreateScanRequest =
            serde_json::from_str(r#"{"repository_url": "https://github.com/example/app"}"#)
                .unwrap();
        assert_eq!(req.branch_or_default(), "main");
        assert!(!req.enable_ai_analysis);
    }
}
