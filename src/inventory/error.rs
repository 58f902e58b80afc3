use thiserror::Error;

/// Errors that can occur during inventory operations
///
/// An occupied cell is not an error: `Inventory::store` reports it
/// through its `Ok(false)` return instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Row or column index outside the grid
    #[error("Cell ({row}, {col}) is out of range")]
    OutOfRange { row: usize, col: usize },
}

