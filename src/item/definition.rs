use serde::{Serialize, Deserialize};
use std::fmt;
use super::properties::ItemType;

/// A single item as it sits in an inventory cell or the equipped slot
///
/// Items are plain values: cloning one produces a fully independent copy.
/// The default item is the empty cell (type `None`, no weight, no name).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
    /// Display name
    pub name: String,

    /// Weight contributed to the inventory total when stored in the grid
    pub weight: f32,

    /// Category, `ItemType::None` for empty cells
    pub item_type: ItemType,
}

impl Item {
    /// Creates a new item
    pub fn new(name: impl Into<String>, weight: f32, item_type: ItemType) -> Self {
        Item {
            name: name.into(),
            weight,
            item_type,
        }
    }

    /// The empty-cell sentinel
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true if this is the empty-cell sentinel
    pub fn is_none(&self) -> bool {
        self.item_type.is_none()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_none() {
            return f.write_str("<empty>");
        }
        write!(f, "{} ({}, {:.1})", self.name, self.item_type, self.weight)
    }
}
