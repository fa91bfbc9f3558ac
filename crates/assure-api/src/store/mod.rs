//! Scan storage
//!
//! The mock backend keeps scans in process memory, but handlers only see
//! the [`ScanStore`] trait so a persistent backend can be substituted
//! without touching them. The store also owns the one-shot completion
//! timers, keyed by scan id, so dropping a pending completion is an
//! explicit operation instead of an implicit race.

pub mod memory;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use assure_core::ScanRecord;

pub use memory::MemoryScanStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("duplicate scan id: {0}")]
    DuplicateId(Uuid),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage capability for scan records.
#[async_trait]
pub trait ScanStore: Send + Sync {
    /// Insert a new record at the head of the list.
    async fn insert(&self, scan: ScanRecord) -> StoreResult<()>;

    /// All records, newest first.
    async fn list(&self) -> StoreResult<Vec<ScanRecord>>;

    async fn find_by_id(&self, scan_id: Uuid) -> StoreResult<Option<ScanRecord>>;

    /// Mark a running scan completed with the given counts.
    ///
    /// Returns `false` when the record is missing or already completed;
    /// a completed scan never transitions back.
    async fn complete(&self, scan_id: Uuid, files_scanned: u32, findings_count: u32)
        -> StoreResult<bool>;

    /// Arrange for the scan to complete with pseudo-random counts after
    /// `delay`. Re-scheduling for the same id replaces the pending timer.
    async fn schedule_completion(&self, scan_id: Uuid, delay: Duration);

    /// Drop a pending completion timer. Returns `false` for unknown ids.
    /// The record stays `running` forever afterwards.
    async fn cancel_completion(&self, scan_id: Uuid) -> bool;
}
