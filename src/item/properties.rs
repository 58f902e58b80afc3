use serde::{Serialize, Deserialize};
use std::fmt;

/// Category tag carried by every item
///
/// `None` is the sentinel stored in empty inventory cells. It is a real
/// value, not the absence of one: every cell always holds an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemType {
    /// Empty cell
    #[default]
    None,
    Weapon,
    Armor,
    Consumable,
    Material,
    Accessory,
}

impl ItemType {
    /// Returns true for the empty-cell sentinel
    pub fn is_none(self) -> bool {
        self == ItemType::None
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            ItemType::None => "NONE",
            ItemType::Weapon => "WEAPON",
            ItemType::Armor => "ARMOR",
            ItemType::Consumable => "CONSUMABLE",
            ItemType::Material => "MATERIAL",
            ItemType::Accessory => "ACCESSORY",
        };
        f.write_str(label)
    }
}
