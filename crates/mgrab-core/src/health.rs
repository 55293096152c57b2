//! Health tracking: which clients are temporarily out of rotation.
//!
//! The tracker itself lives outside the selection core (it is fed by download
//! failures and refreshed on its own schedule); the engine only consumes a
//! snapshot of currently blocked identities per call.

use std::time::SystemTime;

use anyhow::Result;

use crate::client::ClientId;

/// A client temporarily excluded from selection after recent failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockedEntry {
    pub id: ClientId,
    /// When the exclusion lapses. Entries are refreshed externally.
    pub blocked_until: SystemTime,
}

/// Source of the currently blocked client set.
pub trait HealthTracker {
    fn blocked(&self) -> Result<Vec<BlockedEntry>>;
}

/// Tracker over a fixed set of entries. Used by the CLI for what-if checks
/// and by tests; expired entries drop out at read time.
#[derive(Debug, Clone, Default)]
pub struct StaticHealthTracker {
    entries: Vec<BlockedEntry>,
}

impl StaticHealthTracker {
    pub fn new(entries: Vec<BlockedEntry>) -> Self {
        Self { entries }
    }

    /// Block the given ids for `ttl` from now.
    pub fn blocking(ids: &[ClientId], ttl: std::time::Duration) -> Self {
        let until = SystemTime::now() + ttl;
        Self {
            entries: ids
                .iter()
                .map(|&id| BlockedEntry {
                    id,
                    blocked_until: until,
                })
                .collect(),
        }
    }
}

impl HealthTracker for StaticHealthTracker {
    fn blocked(&self) -> Result<Vec<BlockedEntry>> {
        let now = SystemTime::now();
        Ok(self
            .entries
            .iter()
            .copied()
            .filter(|e| e.blocked_until > now)
            .collect())
    }
}
