//! Round-robin balancer and its per-protocol rotation state.
//!
//! The whole rotation memory is one scalar per protocol: the identity of the
//! last client handed out. Picking "the smallest id strictly greater than the
//! cursor, wrapping to the first" walks same-tier peers in a fixed order and
//! self-heals when the candidate set changes between calls (a client added,
//! disabled or re-enabled still leaves the threshold search with a valid next
//! member, or a wrap).

use std::collections::HashMap;
use std::sync::Mutex;

use crate::client::{ClientId, ClientInstance, Protocol};

/// Last-selected client identity per protocol.
///
/// One lock per protocol: selections for different protocols never contend,
/// selections for the same protocol serialize their read-modify-write so the
/// rotation never skips or double-serves a client. Process-local; starts
/// unset (before any valid identity) for every protocol.
#[derive(Debug)]
pub struct RotationCursors {
    cursors: HashMap<Protocol, Mutex<Option<ClientId>>>,
}

impl Default for RotationCursors {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationCursors {
    pub fn new() -> Self {
        let cursors = Protocol::ALL
            .iter()
            .map(|&p| (p, Mutex::new(None)))
            .collect();
        Self { cursors }
    }

    fn slot(&self, protocol: Protocol) -> &Mutex<Option<ClientId>> {
        // new() seeds every protocol variant.
        self.cursors
            .get(&protocol)
            .expect("rotation cursor missing for protocol")
    }

    /// Last-selected id for the protocol, if any selection happened yet.
    /// Exposed so tests can inspect rotation state deterministically.
    pub fn last(&self, protocol: Protocol) -> Option<ClientId> {
        *self.slot(protocol).lock().unwrap()
    }

    /// Seed the cursor for a protocol. Test hook; selection itself only moves
    /// the cursor through [`pick`](Self::pick).
    pub fn set(&self, protocol: Protocol, id: ClientId) {
        *self.slot(protocol).lock().unwrap() = Some(id);
    }

    /// Pick the next client from `pool` for `protocol`, advancing the cursor.
    ///
    /// Only the numerically smallest priority tier present competes; within
    /// it, members rotate in ascending-id order. An empty pool returns `None`
    /// and leaves the cursor untouched.
    pub fn pick(&self, pool: &[ClientInstance], protocol: Protocol) -> Option<ClientInstance> {
        let top_tier = pool.iter().map(|c| c.priority).min()?;
        let mut tier: Vec<&ClientInstance> =
            pool.iter().filter(|c| c.priority == top_tier).collect();
        tier.sort_by_key(|c| c.id);

        let mut cursor = self.slot(protocol).lock().unwrap();

        // Threshold search: first member past the cursor, else wrap to the
        // start of the rotation sequence.
        let chosen = match *cursor {
            Some(last) => tier.iter().find(|c| c.id > last).unwrap_or(&tier[0]),
            None => &tier[0],
        };
        let chosen = (*chosen).clone();

        *cursor = Some(chosen.id);
        Some(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn client(id: i64, priority: i32) -> ClientInstance {
        ClientInstance {
            id: ClientId(id),
            name: format!("client-{id}"),
            protocol: Protocol::Torrent,
            priority,
            categories: BTreeSet::new(),
            enable: true,
        }
    }

    fn pick_id(cursors: &RotationCursors, pool: &[ClientInstance]) -> i64 {
        cursors.pick(pool, Protocol::Torrent).unwrap().id.0
    }

    #[test]
    fn empty_pool_returns_none_and_keeps_cursor() {
        let cursors = RotationCursors::new();
        cursors.set(Protocol::Torrent, ClientId(7));
        assert!(cursors.pick(&[], Protocol::Torrent).is_none());
        assert_eq!(cursors.last(Protocol::Torrent), Some(ClientId(7)));
    }

    #[test]
    fn unset_cursor_starts_at_smallest_id() {
        let cursors = RotationCursors::new();
        let pool = vec![client(3, 0), client(1, 0), client(2, 0)];
        assert_eq!(pick_id(&cursors, &pool), 1);
        assert_eq!(cursors.last(Protocol::Torrent), Some(ClientId(1)));
    }

    #[test]
    fn rotation_visits_each_member_once_before_wrapping() {
        let cursors = RotationCursors::new();
        let pool = vec![client(1, 0), client(2, 0), client(3, 0)];
        let picks: Vec<_> = (0..6).map(|_| pick_id(&cursors, &pool)).collect();
        assert_eq!(picks, vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn rotation_continues_from_seeded_cursor() {
        let cursors = RotationCursors::new();
        cursors.set(Protocol::Torrent, ClientId(2));
        let pool = vec![client(1, 0), client(2, 0), client(3, 0)];
        assert_eq!(pick_id(&cursors, &pool), 3);
        assert_eq!(pick_id(&cursors, &pool), 1);
    }

    #[test]
    fn cursor_past_every_id_wraps_to_first() {
        let cursors = RotationCursors::new();
        cursors.set(Protocol::Torrent, ClientId(99));
        let pool = vec![client(1, 0), client(2, 0)];
        assert_eq!(pick_id(&cursors, &pool), 1);
    }

    #[test]
    fn lowest_priority_tier_always_wins() {
        let cursors = RotationCursors::new();
        let pool = vec![client(1, 5), client(2, 0), client(3, 5)];
        // Only id 2 is in the top tier, so it is picked every time.
        assert_eq!(pick_id(&cursors, &pool), 2);
        assert_eq!(pick_id(&cursors, &pool), 2);
    }

    #[test]
    fn single_member_pool_always_returns_that_member() {
        let cursors = RotationCursors::new();
        cursors.set(Protocol::Torrent, ClientId(42));
        let pool = vec![client(5, 0)];
        assert_eq!(pick_id(&cursors, &pool), 5);
        assert_eq!(pick_id(&cursors, &pool), 5);
    }

    #[test]
    fn cursors_are_independent_per_protocol() {
        let cursors = RotationCursors::new();
        let pool = vec![client(1, 0), client(2, 0)];
        assert_eq!(pick_id(&cursors, &pool), 1);
        assert_eq!(cursors.last(Protocol::Usenet), None);
        assert!(cursors
            .pick(&pool, Protocol::Usenet)
            .is_some_and(|c| c.id.0 == 1));
    }

    #[test]
    fn membership_changes_self_heal() {
        let cursors = RotationCursors::new();
        let full = vec![client(1, 0), client(2, 0), client(3, 0)];
        assert_eq!(pick_id(&cursors, &full), 1);
        assert_eq!(pick_id(&cursors, &full), 2);
        // Client 3 disappears; the threshold search wraps instead of stalling.
        let reduced = vec![client(1, 0), client(2, 0)];
        assert_eq!(pick_id(&cursors, &reduced), 1);
        // Client 3 comes back; rotation picks it up where the ids lead.
        assert_eq!(pick_id(&cursors, &full), 2);
        assert_eq!(pick_id(&cursors, &full), 3);
    }
}
