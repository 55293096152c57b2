//! `mgrab list` – show the configured download clients.

use anyhow::Result;
use mgrab_core::health::StaticHealthTracker;
use mgrab_core::registry::ConfigRegistry;
use mgrab_core::select::SelectionEngine;

pub fn run_list(registry: &ConfigRegistry, json: bool) -> Result<()> {
    let engine = SelectionEngine::new(registry.clone(), StaticHealthTracker::default());
    let clients = engine.list_clients()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&clients)?);
        return Ok(());
    }

    if clients.is_empty() {
        println!("No download clients configured.");
    } else {
        println!(
            "{:<6} {:<20} {:<10} {:<6} {}",
            "ID", "NAME", "PROTOCOL", "TIER", "CATEGORIES"
        );
        for c in clients {
            let categories = if c.categories.is_empty() {
                "-".to_string()
            } else {
                c.categories
                    .iter()
                    .map(|cat| cat.as_str())
                    .collect::<Vec<_>>()
                    .join(",")
            };
            println!(
                "{:<6} {:<20} {:<10} {:<6} {}",
                c.id, c.name, c.protocol, c.priority, categories
            );
        }
    }
    Ok(())
}
