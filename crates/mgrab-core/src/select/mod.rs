//! Download-client selection.
//!
//! Given a release that needs handing to an external downloader, pick exactly
//! one configured client instance: filter the registry's enabled clients to
//! the release's protocol, drop currently blocked clients (unless that would
//! leave none), prefer clients that specialize in the release's category over
//! generic ones, then rotate fairly inside the winning pool.

pub mod affinity;
mod error;
pub mod rotation;

use std::collections::HashSet;

use crate::client::{ClientId, ClientInstance, Release};
use crate::health::HealthTracker;
use crate::registry::ClientRegistry;

pub use error::SelectError;
pub use rotation::RotationCursors;

/// Orchestrates registry, health tracker, capability filter and balancer.
/// Owns the rotation cursors for the process lifetime.
#[derive(Debug)]
pub struct SelectionEngine<R, H> {
    registry: R,
    health: H,
    cursors: RotationCursors,
}

impl<R: ClientRegistry, H: HealthTracker> SelectionEngine<R, H> {
    pub fn new(registry: R, health: H) -> Self {
        Self::with_cursors(registry, health, RotationCursors::new())
    }

    /// Construct with pre-seeded rotation state (tests).
    pub fn with_cursors(registry: R, health: H, cursors: RotationCursors) -> Self {
        Self {
            registry,
            health,
            cursors,
        }
    }

    /// Rotation state, for inspection.
    pub fn cursors(&self) -> &RotationCursors {
        &self.cursors
    }

    /// Pick the client that should receive this release.
    ///
    /// `Ok(None)` is the normal "nothing can download this yet" outcome; the
    /// rotation cursor moves only when a client is actually returned.
    pub fn select_client(&self, release: &Release) -> Result<Option<ClientInstance>, SelectError> {
        let protocol = release.protocol;
        let mut candidates = self
            .registry
            .enabled_for(protocol)
            .map_err(SelectError::Registry)?;
        if candidates.is_empty() {
            return Ok(None);
        }

        let blocked: HashSet<ClientId> = self
            .health
            .blocked()
            .map_err(SelectError::Health)?
            .into_iter()
            .map(|e| e.id)
            .collect();

        if !blocked.is_empty() {
            let unblocked: Vec<ClientInstance> = candidates
                .iter()
                .filter(|c| !blocked.contains(&c.id))
                .cloned()
                .collect();

            if unblocked.is_empty() {
                // Liveness over avoidance: with every candidate blocked we
                // still hand the release to one of them.
                tracing::trace!("no non-blocked {protocol} client available, retrying blocked one");
            } else {
                candidates = unblocked;
            }
        }

        let (specialized, generic) = affinity::partition(candidates, release.category);

        if let Some(client) = self.cursors.pick(&specialized, protocol) {
            return Ok(Some(client));
        }
        Ok(self.cursors.pick(&generic, protocol))
    }

    /// All enabled clients, across protocols, unfiltered.
    pub fn list_clients(&self) -> Result<Vec<ClientInstance>, SelectError> {
        self.registry.clients().map_err(SelectError::Registry)
    }

    /// Point lookup by identity.
    pub fn get_client(&self, id: ClientId) -> Result<ClientInstance, SelectError> {
        self.registry
            .get(id)
            .map_err(SelectError::Registry)?
            .ok_or(SelectError::NotFound(id))
    }
}
