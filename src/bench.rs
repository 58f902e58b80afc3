//! Copy-versus-move timing harness
//!
//! Builds one small and one large fully stocked player, enlists each in a
//! guild and times copying and then moving that player into other guilds.
//! Copying is proportional to the grid size; moving is not.

use crate::guild::{Guild, GuildError};
use crate::inventory::{Inventory, InventoryError};
use crate::item::{Item, ItemType};
use crate::player::Player;
use chrono::{DateTime, Local};
use log::info;
use serde::Serialize;
use std::time::Instant;

/// Parameters for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Side length of the small square inventory
    pub small_size: usize,

    /// Side length of the large square inventory
    pub large_size: usize,

    /// Item stored into every cell
    pub item: Item,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            small_size: 10,
            large_size: 2000,
            item: Item::new("Sword", 5.0, ItemType::Weapon),
        }
    }
}

/// One timed guild operation
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub label: String,
    pub micros: u64,
}

/// Results of a full benchmark run
#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub started_at: DateTime<Local>,
    pub measurements: Vec<Measurement>,
}

/// Builds a square inventory with `item` stored in every cell
pub fn fill_inventory(size: usize, item: &Item) -> Result<Inventory, InventoryError> {
    let mut inventory = Inventory::with_size(size, size);
    for row in 0..size {
        for col in 0..size {
            inventory.store(row, col, item.clone())?;
        }
    }
    Ok(inventory)
}

/// Runs the copy and move timings for both inventory sizes
pub fn run(config: &BenchConfig) -> anyhow::Result<BenchReport> {
    let started_at = Local::now();
    let mut measurements = Vec::with_capacity(4);

    for (player_name, size) in [("SmallHero", config.small_size), ("BigHero", config.large_size)] {
        let inventory = fill_inventory(size, &config.item)?;
        info!(
            "Built {}x{} inventory for '{}' (weight {:.1}, {} items)",
            size,
            size,
            player_name,
            inventory.weight(),
            inventory.count()
        );
        let player = Player::new(player_name, inventory);

        let mut home = Guild::new("Home");
        home.enlist_player(&player);
        let mut copy_target = Guild::new("CopyTarget");
        let mut move_target = Guild::new("MoveTarget");

        let micros = time(|| home.copy_player_to(player_name, &mut copy_target))?;
        measurements.push(Measurement {
            label: format!("Copying {}x{} Inventory Player", size, size),
            micros,
        });

        let micros = time(|| home.move_player_to(player_name, &mut move_target))?;
        measurements.push(Measurement {
            label: format!("Moving {}x{} Inventory Player", size, size),
            micros,
        });
    }

    Ok(BenchReport {
        started_at,
        measurements,
    })
}

fn time(operation: impl FnOnce() -> Result<(), GuildError>) -> Result<u64, GuildError> {
    let start = Instant::now();
    operation()?;
    Ok(u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX))
}
