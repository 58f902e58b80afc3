// Item module
//
// Items are small value types: a name, a weight and a category tag.
// The `ItemType::None` category marks an empty inventory cell.

pub mod definition;
pub mod properties;

// Re-export main types for convenient access
pub use definition::Item;
pub use properties::ItemType;
