//! Capability filter: split candidates into specialized and generic pools.

use crate::client::{Category, ClientInstance};

/// Partition candidates by affinity for `category`.
///
/// Clients whose affinity set names the category land in the specialized
/// pool; clients with an empty set land in the generic pool. A client whose
/// non-empty set does not name the category is dropped from both: it will
/// never serve this category, even as a last resort.
pub fn partition(
    candidates: Vec<ClientInstance>,
    category: Category,
) -> (Vec<ClientInstance>, Vec<ClientInstance>) {
    let mut specialized = Vec::new();
    let mut generic = Vec::new();

    for client in candidates {
        if client.categories.is_empty() {
            generic.push(client);
        } else if client.categories.contains(&category) {
            specialized.push(client);
        }
    }

    (specialized, generic)
}
