//! Grid inventories, the players that own them and the guilds that
//! gather players.
//!
//! - `item`: item values and the empty-cell sentinel
//! - `inventory`: fixed-shape grid plus one equipped slot, with cached totals
//! - `player`: a name wrapped around one inventory
//! - `guild`: a roster of players with copy and move transfers
//! - `bench`: timings for copying versus moving players between guilds

pub mod bench;
pub mod guild;
pub mod inventory;
pub mod item;
pub mod player;

pub use guild::{Guild, GuildError};
pub use inventory::{Inventory, InventoryError};
pub use item::{Item, ItemType};
pub use player::Player;
