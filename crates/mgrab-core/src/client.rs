//! Download-client data model: identities, protocols, categories and the
//! per-instance definition the selection engine works with.
//!
//! Instances are owned by the registry; everything in here is read-only from
//! the selection engine's point of view.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identity of a configured download client. Assigned once by the
/// registry, never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ClientId(pub i64);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Transport protocol a client speaks. Clients and releases only ever match
/// within one protocol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Usenet,
    Torrent,
}

impl Protocol {
    /// All known protocols, used to pre-build per-protocol rotation slots.
    pub const ALL: [Protocol; 2] = [Protocol::Usenet, Protocol::Torrent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Usenet => "usenet",
            Protocol::Torrent => "torrent",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "usenet" => Ok(Protocol::Usenet),
            "torrent" => Ok(Protocol::Torrent),
            other => Err(format!("unknown protocol '{other}' (usenet, torrent)")),
        }
    }
}

/// Content classification of a release, produced upstream. A client's
/// affinity set declares which of these it specializes in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Standard,
    Daily,
    Anime,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "standard",
            Category::Daily => "daily",
            Category::Anime => "anime",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Category::Standard),
            "daily" => Ok(Category::Daily),
            "anime" => Ok(Category::Anime),
            other => Err(format!(
                "unknown category '{other}' (standard, daily, anime)"
            )),
        }
    }
}

/// One configured download-client instance as seen by the selection engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientInstance {
    pub id: ClientId,
    pub name: String,
    pub protocol: Protocol,
    /// Priority tier; numerically lower tiers are served first.
    pub priority: i32,
    /// Affinity set. Empty means "no preference": the client will take any
    /// category, but only after specialized clients have had their turn.
    pub categories: BTreeSet<Category>,
    pub enable: bool,
}

impl ClientInstance {
    /// Whether this client can serve the given category at all.
    /// An empty affinity set accepts everything.
    pub fn accepts(&self, category: Category) -> bool {
        self.categories.is_empty() || self.categories.contains(&category)
    }
}

/// The per-request input to selection: which protocol the release needs and
/// what kind of content it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Release {
    pub protocol: Protocol,
    pub category: Category,
}
