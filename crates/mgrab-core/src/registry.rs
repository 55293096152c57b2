//! Client registry: the source of the current set of enabled download-client
//! instances.
//!
//! The selection engine only ever reads from the registry; instances are
//! created and mutated elsewhere (config file, future API layer). The trait
//! returns `anyhow::Result` so an implementation backed by something that can
//! fail (database, remote service) can surface that failure instead of
//! pretending no clients exist.

use anyhow::{bail, Result};

use crate::client::{ClientId, ClientInstance, Protocol};
use crate::config::MgrabConfig;

/// Read-only view of the configured download clients.
pub trait ClientRegistry {
    /// All enabled client instances, across protocols.
    fn clients(&self) -> Result<Vec<ClientInstance>>;

    /// Enabled instances speaking the given protocol.
    fn enabled_for(&self, protocol: Protocol) -> Result<Vec<ClientInstance>> {
        Ok(self
            .clients()?
            .into_iter()
            .filter(|c| c.protocol == protocol)
            .collect())
    }

    /// Point lookup by identity. `Ok(None)` when no such client is enabled.
    fn get(&self, id: ClientId) -> Result<Option<ClientInstance>> {
        Ok(self.clients()?.into_iter().find(|c| c.id == id))
    }
}

/// Registry backed by a fixed list of instances, typically built from the
/// config file at startup.
#[derive(Debug, Clone)]
pub struct ConfigRegistry {
    clients: Vec<ClientInstance>,
}

impl ConfigRegistry {
    /// Build a registry from instances, keeping only enabled ones.
    /// Rejects duplicate identities: ids must be unique within one view.
    pub fn new(instances: Vec<ClientInstance>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for c in &instances {
            if !seen.insert(c.id) {
                bail!("duplicate download client id {} in configuration", c.id);
            }
        }
        let clients = instances.into_iter().filter(|c| c.enable).collect();
        Ok(Self { clients })
    }

    pub fn from_config(cfg: &MgrabConfig) -> Result<Self> {
        Self::new(cfg.clients.iter().map(|c| c.to_instance()).collect())
    }
}

impl ClientRegistry for ConfigRegistry {
    fn clients(&self) -> Result<Vec<ClientInstance>> {
        Ok(self.clients.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn instance(id: i64, protocol: Protocol, enable: bool) -> ClientInstance {
        ClientInstance {
            id: ClientId(id),
            name: format!("client-{id}"),
            protocol,
            priority: 1,
            categories: BTreeSet::new(),
            enable,
        }
    }

    #[test]
    fn disabled_clients_are_not_listed() {
        let reg = ConfigRegistry::new(vec![
            instance(1, Protocol::Usenet, true),
            instance(2, Protocol::Usenet, false),
        ])
        .unwrap();
        let ids: Vec<_> = reg.clients().unwrap().iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn enabled_for_filters_by_protocol() {
        let reg = ConfigRegistry::new(vec![
            instance(1, Protocol::Usenet, true),
            instance(2, Protocol::Torrent, true),
            instance(3, Protocol::Torrent, true),
        ])
        .unwrap();
        let ids: Vec<_> = reg
            .enabled_for(Protocol::Torrent)
            .unwrap()
            .iter()
            .map(|c| c.id.0)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = ConfigRegistry::new(vec![
            instance(7, Protocol::Usenet, true),
            instance(7, Protocol::Torrent, true),
        ]);
        assert!(err.is_err());
    }

    #[test]
    fn get_finds_by_id() {
        let reg = ConfigRegistry::new(vec![instance(4, Protocol::Torrent, true)]).unwrap();
        assert_eq!(reg.get(ClientId(4)).unwrap().unwrap().id, ClientId(4));
        assert!(reg.get(ClientId(5)).unwrap().is_none());
    }
}
