//! In-memory scan store
//!
//! Process-local and unsynchronized across instances: contents are lost on
//! restart, and a completion timer that outlives the process simply never
//! fires, leaving its record `running`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use uuid::Uuid;

use assure_core::{ScanRecord, ScanStatus};

use super::{ScanStore, StoreError, StoreResult};

/// Range of `files_scanned` assigned on completion.
pub const FILES_SCANNED_RANGE: std::ops::Range<u32> = 50..250;

/// Range of `findings_count` assigned on completion.
pub const FINDINGS_RANGE: std::ops::Range<u32> = 5..35;

/// A pending completion timer. The generation distinguishes a timer from
/// any replacement scheduled later for the same scan id.
struct TimerEntry {
    generation: u64,
    handle: JoinHandle<()>,
}

#[derive(Default)]
struct Inner {
    scans: RwLock<Vec<ScanRecord>>,
    timers: Mutex<HashMap<Uuid, TimerEntry>>,
    timer_generation: AtomicU64,
}

/// Scan store backed by a process-wide list.
#[derive(Clone, Default)]
pub struct MemoryScanStore {
    inner: Arc<Inner>,
}

impl MemoryScanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completion timers that have not fired or been cancelled.
    pub async fn pending_completions(&self) -> usize {
        let mut timers = self.inner.timers.lock().await;
        timers.retain(|_, entry| !entry.handle.is_finished());
        timers.len()
    }

    /// Populate the store with the demo records served before any scan has
    /// been created: two completed scans and one still running.
    pub async fn seed_demo_data(&self) {
        let now = Utc::now();
        let demo = [
            (
                "https://github.com/example/legacy-api",
                "develop",
                now - chrono::Duration::hours(24),
                Some((203, 23)),
            ),
            (
                "https://github.com/example/secure-app",
                "main",
                now - chrono::Duration::hours(1),
                Some((127, 8)),
            ),
            (
                "https://github.com/example/mobile-app",
                "main",
                now - chrono::Duration::minutes(5),
                None,
            ),
        ];

        let mut scans = self.inner.scans.write().await;
        for (repository_url, branch, created_at, counts) in demo {
            scans.insert(
                0,
                ScanRecord {
                    scan_id: Uuid::new_v4(),
                    repository_url: repository_url.to_string(),
                    branch: branch.to_string(),
                    status: if counts.is_some() {
                        ScanStatus::Completed
                    } else {
                        ScanStatus::Running
                    },
                    created_at,
                    files_scanned: counts.map(|(files, _)| files),
                    findings_count: counts.map(|(_, findings)| findings),
                    enable_ai_analysis: false,
                },
            );
        }
    }
}

#[async_trait]
impl ScanStore for MemoryScanStore {
    async fn insert(&self, scan: ScanRecord) -> StoreResult<()> {
        let mut scans = self.inner.scans.write().await;
        if scans.iter().any(|s| s.scan_id == scan.scan_id) {
            return Err(StoreError::DuplicateId(scan.scan_id));
        }
        scans.insert(0, scan);
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<ScanRecord>> {
        Ok(self.inner.scans.read().await.clone())
    }

    async fn find_by_id(&self, scan_id: Uuid) -> StoreResult<Option<ScanRecord>> {
        let scans = self.inner.scans.read().await;
        Ok(scans.iter().find(|s| s.scan_id == scan_id).cloned())
    }

    async fn complete(
        &self,
        scan_id: Uuid,
        files_scanned: u32,
        findings_count: u32,
    ) -> StoreResult<bool> {
        let mut scans = self.inner.scans.write().await;
        let Some(scan) = scans
            .iter_mut()
            .find(|s| s.scan_id == scan_id && s.status == ScanStatus::Running)
        else {
            return Ok(false);
        };
        scan.status = ScanStatus::Completed;
        scan.files_scanned = Some(files_scanned);
        scan.findings_count = Some(findings_count);
        Ok(true)
    }

    async fn schedule_completion(&self, scan_id: Uuid, delay: Duration) {
        let generation = self.inner.timer_generation.fetch_add(1, Ordering::Relaxed);
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let (files_scanned, findings_count) = {
                let mut rng = rand::thread_rng();
                (
                    rng.gen_range(FILES_SCANNED_RANGE),
                    rng.gen_range(FINDINGS_RANGE),
                )
            };

            {
                let mut scans = inner.scans.write().await;
                if let Some(scan) = scans
                    .iter_mut()
                    .find(|s| s.scan_id == scan_id && s.status == ScanStatus::Running)
                {
                    scan.status = ScanStatus::Completed;
                    scan.files_scanned = Some(files_scanned);
                    scan.findings_count = Some(findings_count);
                    tracing::info!(%scan_id, files_scanned, findings_count, "scan completed");
                }
            }

            // Untrack only our own entry; a replacement scheduled in the
            // meantime carries a newer generation and must stay tracked.
            let mut timers = inner.timers.lock().await;
            if timers
                .get(&scan_id)
                .is_some_and(|entry| entry.generation == generation)
            {
                timers.remove(&scan_id);
            }
        });

        // A second schedule for the same scan replaces the first.
        if let Some(previous) = self
            .inner
            .timers
            .lock()
            .await
            .insert(scan_id, TimerEntry { generation, handle })
        {
            previous.handle.abort();
        }
    }

    async fn cancel_completion(&self, scan_id: Uuid) -> bool {
        match self.inner.timers.lock().await.remove(&scan_id) {
            // A timer that already fired is not pending; nothing to cancel.
            Some(entry) if entry.handle.is_finished() => false,
            Some(entry) => {
                entry.handle.abort();
                true
            }
            None => false,
        }
    }
}
