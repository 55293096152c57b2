//! Selection error taxonomy.
//!
//! "No eligible client" is not in here on purpose: callers routinely hit it,
//! so it is `Ok(None)` from [`SelectionEngine::select_client`], not an error.

use thiserror::Error;

use crate::client::ClientId;

#[derive(Debug, Error)]
pub enum SelectError {
    /// Point lookup for an identity the registry does not know.
    #[error("no download client with id {0}")]
    NotFound(ClientId),

    /// The registry failed to produce a snapshot. Propagated rather than
    /// masked as "no candidate".
    #[error("client registry unavailable")]
    Registry(#[source] anyhow::Error),

    /// The health tracker failed to produce a snapshot.
    #[error("health tracker unavailable")]
    Health(#[source] anyhow::Error),
}
