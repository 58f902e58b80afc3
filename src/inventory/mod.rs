// Inventory module
//
// A fixed-shape grid of items plus one equipped slot, with cached
// weight and item-count totals kept in step with every mutation.

pub mod error;
pub mod inventory;

// Re-export main types
pub use error::InventoryError;
pub use inventory::{Inventory, DEFAULT_COLS, DEFAULT_ROWS};
