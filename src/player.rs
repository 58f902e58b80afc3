use crate::inventory::Inventory;
use log::debug;
use serde::Serialize;

/// A named player that owns exactly one inventory
///
/// The inventory is held by value, so cloning a player deep-copies its
/// inventory (equipped item included) and no two players ever share one.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Player {
    name: String,
    inventory: Inventory,
}

impl Player {
    /// Creates a player that takes ownership of `inventory`
    ///
    /// Pass `inventory.clone()` to keep the caller's copy independent.
    pub fn new(name: impl Into<String>, inventory: Inventory) -> Self {
        Player {
            name: name.into(),
            inventory,
        }
    }

    /// Creates a player with a default 10x10 empty inventory
    pub fn with_name(name: impl Into<String>) -> Self {
        Self::new(name, Inventory::default())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Live access to the inventory for storing, equipping and discarding
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Moves the player out, leaving an unnamed player with an emptied
    /// inventory behind
    pub fn take(&mut self) -> Player {
        debug!("Moving player '{}' out", self.name);
        Player {
            name: std::mem::take(&mut self.name),
            inventory: self.inventory.take(),
        }
    }
}
