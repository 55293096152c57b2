//! `mgrab pick` – dry-run the selection engine and print the rotation.

use std::time::Duration;

use anyhow::Result;
use mgrab_core::client::{Category, ClientId, Protocol, Release};
use mgrab_core::health::StaticHealthTracker;
use mgrab_core::registry::ConfigRegistry;
use mgrab_core::select::SelectionEngine;

pub fn run_pick(
    registry: ConfigRegistry,
    protocol: Protocol,
    category: Category,
    count: usize,
    blocked: &[i64],
) -> Result<()> {
    let blocked_ids: Vec<ClientId> = blocked.iter().map(|&id| ClientId(id)).collect();
    // The ad-hoc blocked set only needs to outlive this invocation.
    let health = StaticHealthTracker::blocking(&blocked_ids, Duration::from_secs(3600));
    let engine = SelectionEngine::new(registry, health);

    let release = Release { protocol, category };
    for _ in 0..count {
        match engine.select_client(&release)? {
            Some(client) => println!(
                "{} {} (tier {})",
                client.id, client.name, client.priority
            ),
            None => println!("no eligible client"),
        }
    }
    Ok(())
}
