use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use crate::client::{Category, ClientId, ClientInstance, Protocol};

fn default_priority() -> i32 {
    1
}

fn default_enable() -> bool {
    true
}

/// One `[[client]]` table in config.toml: a configured download client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Stable identity; must be unique across the file.
    pub id: i64,
    pub name: String,
    /// Transport protocol: "usenet" or "torrent".
    pub protocol: Protocol,
    /// Priority tier; lower is preferred. Default 1.
    #[serde(default = "default_priority")]
    pub priority: i32,
    /// Categories this client specializes in; empty means no preference.
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default = "default_enable")]
    pub enable: bool,
}

impl ClientConfig {
    pub fn to_instance(&self) -> ClientInstance {
        ClientInstance {
            id: ClientId(self.id),
            name: self.name.clone(),
            protocol: self.protocol,
            priority: self.priority,
            categories: self.categories.iter().copied().collect::<BTreeSet<_>>(),
            enable: self.enable,
        }
    }
}

/// Global configuration loaded from `~/.config/mgrab/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MgrabConfig {
    /// Configured download clients.
    #[serde(default, rename = "client")]
    pub clients: Vec<ClientConfig>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mgrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating an empty default file if none exists.
pub fn load_or_init() -> Result<MgrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MgrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MgrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}
