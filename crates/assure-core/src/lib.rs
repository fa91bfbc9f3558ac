//! Assure Scanner shared model
//!
//! This crate holds the data types exchanged between the API client and the
//! backend (scan records, user context) plus the authentication provider
//! seam used by UI call sites.

pub mod auth;
pub mod rag;
pub mod scan;
pub mod user;

pub use auth::{AuthProvider, AuthProviderKind, StubAuthProvider};
pub use rag::{RagAnalysis, RagQueryRequest};
pub use scan::{CreateScanRequest, ScanRecord, ScanStatus};
pub use user::{UserContext, UserRole};
