//! `mgrab get` – show one configured client by ID.

use anyhow::Result;
use mgrab_core::client::ClientId;
use mgrab_core::health::StaticHealthTracker;
use mgrab_core::registry::ConfigRegistry;
use mgrab_core::select::SelectionEngine;

pub fn run_get(registry: &ConfigRegistry, id: i64) -> Result<()> {
    let engine = SelectionEngine::new(registry.clone(), StaticHealthTracker::default());
    let client = engine.get_client(ClientId(id))?;

    println!("id:         {}", client.id);
    println!("name:       {}", client.name);
    println!("protocol:   {}", client.protocol);
    println!("priority:   {}", client.priority);
    let categories = if client.categories.is_empty() {
        "(no preference)".to_string()
    } else {
        client
            .categories
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("categories: {categories}");
    Ok(())
}
