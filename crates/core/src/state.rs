use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::models::dataset::Dataset;

/// Sequence token for one load attempt. Tickets are handed out in
/// strictly increasing order; only the newest outstanding ticket may
/// install its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// Holds the single current dataset snapshot and enforces the
/// swap-on-success discipline.
///
/// The snapshot is immutable once installed: derivation always works
/// on a complete dataset, never a half-populated one. A load in flight
/// does not disturb the current snapshot; its result replaces it
/// wholesale on commit, or is discarded if a newer load already
/// committed (last-writer-wins, guarded by the ticket sequence).
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: Option<Arc<Dataset>>,
    issued: u64,
    applied: u64,
    loaded_at: Option<DateTime<Utc>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a load attempt and get its sequence ticket.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    /// Install a completed snapshot, unless a newer load already
    /// committed. Returns `false` when the result was stale and
    /// discarded; the caller should not treat that as an error.
    pub fn commit(&mut self, ticket: LoadTicket, dataset: Dataset) -> bool {
        if ticket.0 <= self.applied {
            return false;
        }
        self.applied = ticket.0;
        self.current = Some(Arc::new(dataset));
        self.loaded_at = Some(Utc::now());
        true
    }

    /// Cheap handle to the current snapshot for one render pass.
    /// `None` until the first successful load.
    pub fn current(&self) -> Option<Arc<Dataset>> {
        self.current.clone()
    }

    pub fn has_snapshot(&self) -> bool {
        self.current.is_some()
    }

    /// When the current snapshot was installed.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }
}
