use crate::item::Item;
use super::error::InventoryError;
use log::debug;
use serde::Serialize;
use std::mem;

/// Rows in a default-constructed inventory
pub const DEFAULT_ROWS: usize = 10;

/// Columns in a default-constructed inventory
pub const DEFAULT_COLS: usize = 10;

/// Grid inventory with a single equipped slot
///
/// The grid holds items by value and never changes shape after
/// construction. Empty cells hold the `ItemType::None` sentinel.
///
/// `weight` and `item_count` cache the sum and count over non-empty grid
/// cells so that accessors and `store` stay O(1). The equipped item is
/// never part of either total.
#[derive(Debug, Serialize)]
pub struct Inventory {
    /// Row-major item grid
    grid: Vec<Vec<Item>>,

    /// Exclusively owned item held outside the grid
    equipped: Option<Box<Item>>,

    /// Sum of weights over non-empty cells
    weight: f32,

    /// Number of non-empty cells
    item_count: usize,
}

impl Inventory {
    /// Creates an inventory from an existing grid and optional equipped item
    ///
    /// Scans the grid once to compute the totals, skipping empty cells.
    /// The equipped item is owned from here on and is not counted.
    pub fn new(grid: Vec<Vec<Item>>, equipped: Option<Box<Item>>) -> Self {
        let mut inventory = Inventory {
            grid,
            equipped,
            weight: 0.0,
            item_count: 0,
        };
        let (weight, item_count) = inventory.recount();
        inventory.weight = weight;
        inventory.item_count = item_count;
        inventory
    }

    /// Creates an empty rectangular inventory
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Inventory {
            grid: vec![vec![Item::none(); cols]; rows],
            equipped: None,
            weight: 0.0,
            item_count: 0,
        }
    }

    /// The state a moved-from inventory is left in: no rows, nothing
    /// equipped, zero totals. Does not allocate.
    fn emptied() -> Self {
        Inventory {
            grid: Vec::new(),
            equipped: None,
            weight: 0.0,
            item_count: 0,
        }
    }

    /// Returns the equipped item, if any
    pub fn equipped(&self) -> Option<&Item> {
        self.equipped.as_deref()
    }

    /// Mutable access to the equipped item, if any
    pub fn equipped_mut(&mut self) -> Option<&mut Item> {
        self.equipped.as_deref_mut()
    }

    /// Puts a new item in the equipped slot
    ///
    /// The previously equipped item is not released by the inventory. It is
    /// handed back instead, and whoever receives it decides its fate.
    #[must_use = "the previously equipped item is returned, not released"]
    pub fn equip(&mut self, item: Box<Item>) -> Option<Box<Item>> {
        debug!("Equipping {}", item);
        let previous = self.equipped.replace(item);
        if let Some(old) = &previous {
            debug!("Displaced {} from equipped slot", old);
        }
        previous
    }

    /// Releases the equipped item and clears the slot
    ///
    /// Does nothing when the slot is already empty.
    pub fn discard_equipped(&mut self) {
        if let Some(item) = self.equipped.take() {
            debug!("Discarding equipped {}", item);
        }
    }

    /// Returns a copy of the whole grid
    pub fn items(&self) -> Vec<Vec<Item>> {
        self.grid.clone()
    }

    /// Borrows the grid without copying it
    pub fn grid(&self) -> &[Vec<Item>] {
        &self.grid
    }

    /// Total weight of the stored items (equipped item excluded)
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Number of non-empty cells
    pub fn count(&self) -> usize {
        self.item_count
    }

    /// Returns true if no cell holds an item
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Number of rows in the grid
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Number of columns in the first row (0 for a grid with no rows)
    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    /// Returns the item at the given cell
    pub fn at(&self, row: usize, col: usize) -> Result<&Item, InventoryError> {
        self.grid
            .get(row)
            .and_then(|cells| cells.get(col))
            .ok_or(InventoryError::OutOfRange { row, col })
    }

    /// Stores an item in an empty cell
    ///
    /// Returns `Ok(false)` without touching anything if the cell is already
    /// occupied. Out-of-range indices are an error.
    ///
    /// Storing an empty-cell sentinel succeeds but leaves the totals alone,
    /// so they keep matching `recount()`.
    pub fn store(&mut self, row: usize, col: usize, item: Item) -> Result<bool, InventoryError> {
        let cell = self.grid
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
            .ok_or(InventoryError::OutOfRange { row, col })?;

        if !cell.is_none() {
            return Ok(false);
        }

        if !item.is_none() {
            self.weight += item.weight;
            self.item_count += 1;
        }
        *cell = item;
        Ok(true)
    }

    /// Moves everything out of this inventory
    ///
    /// The grid storage and the equipped item change hands without being
    /// copied. `self` is left with no rows, nothing equipped and zero
    /// totals, and stays usable.
    pub fn take(&mut self) -> Inventory {
        debug!(
            "Moving inventory out ({} rows, {} items, equipped: {})",
            self.rows(),
            self.item_count,
            self.equipped.is_some()
        );
        mem::replace(self, Inventory::emptied())
    }

    /// Recomputes the totals by scanning every cell
    pub fn recount(&self) -> (f32, usize) {
        self.grid
            .iter()
            .flatten()
            .filter(|item| !item.is_none())
            .fold((0.0, 0), |(weight, count), item| (weight + item.weight, count + 1))
    }

    /// Returns true if the cached totals match a full rescan
    ///
    /// Weights are compared with a small relative tolerance since the
    /// cached sum is accumulated in store order, not grid order.
    pub fn is_consistent(&self) -> bool {
        let (weight, item_count) = self.recount();
        item_count == self.item_count
            && (weight - self.weight).abs() <= 1e-4 * weight.abs().max(1.0)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_size(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl Clone for Inventory {
    /// Deep copy: the grid is copied cell by cell and the equipped item,
    /// if any, gets a fresh box of its own. Totals are copied as-is.
    fn clone(&self) -> Self {
        Inventory {
            grid: self.grid.clone(),
            equipped: self.equipped.clone(),
            weight: self.weight,
            item_count: self.item_count,
        }
    }

    /// Copy assignment: releases the currently equipped item before
    /// taking a copy of `source`'s. Reuses the grid allocation.
    fn clone_from(&mut self, source: &Self) {
        self.discard_equipped();
        self.grid.clone_from(&source.grid);
        self.equipped = source.equipped.clone();
        self.weight = source.weight;
        self.item_count = source.item_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemType;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sword() -> Item {
        Item::new("Sword", 5.0, ItemType::Weapon)
    }

    fn shield() -> Item {
        Item::new("Shield", 8.5, ItemType::Armor)
    }

    /// Inventory with two stored items and a helmet equipped
    fn stocked() -> Inventory {
        let mut inventory = Inventory::with_size(3, 3);
        assert!(inventory.store(0, 0, sword()).unwrap());
        assert!(inventory.store(2, 1, shield()).unwrap());
        let previous = inventory.equip(Box::new(Item::new("Helmet", 2.0, ItemType::Armor)));
        assert!(previous.is_none());
        inventory
    }

    #[test]
    fn test_default_is_ten_by_ten_empty() {
        let inventory = Inventory::default();

        assert_eq!(inventory.rows(), DEFAULT_ROWS);
        assert_eq!(inventory.cols(), DEFAULT_COLS);
        assert_eq!(inventory.weight(), 0.0);
        assert_eq!(inventory.count(), 0);
        assert!(inventory.is_empty());
        assert!(inventory.equipped().is_none());
        assert!(inventory.grid().iter().flatten().all(Item::is_none));
    }

    #[test]
    fn test_new_totals_skip_empty_cells_and_equipped() {
        let grid = vec![
            vec![sword(), Item::none()],
            vec![Item::new("Ghost", 3.0, ItemType::None), shield()],
        ];
        let inventory = Inventory::new(grid, Some(Box::new(sword())));

        // The "Ghost" cell is typed None and must not count
        assert_eq!(inventory.weight(), 13.5);
        assert_eq!(inventory.count(), 2);
        assert_eq!(inventory.equipped(), Some(&sword()));
        assert!(inventory.is_consistent());
    }

    #[test]
    fn test_store_into_empty_cell() {
        let mut inventory = Inventory::with_size(2, 2);

        assert_eq!(inventory.store(0, 0, sword()), Ok(true));
        assert_eq!(inventory.weight(), 5.0);
        assert_eq!(inventory.count(), 1);
        assert_eq!(inventory.at(0, 0), Ok(&sword()));
    }

    #[test]
    fn test_store_into_occupied_cell_is_rejected() {
        let mut inventory = Inventory::with_size(2, 2);
        inventory.store(0, 0, sword()).unwrap();

        assert_eq!(inventory.store(0, 0, shield()), Ok(false));
        assert_eq!(inventory.weight(), 5.0);
        assert_eq!(inventory.count(), 1);
        assert_eq!(inventory.at(0, 0), Ok(&sword()));
    }

    #[test]
    fn test_store_none_item_keeps_totals() {
        let mut inventory = Inventory::with_size(2, 2);

        assert_eq!(inventory.store(1, 1, Item::none()), Ok(true));
        assert_eq!(inventory.count(), 0);
        assert_eq!(inventory.weight(), 0.0);
        assert!(inventory.is_consistent());
    }

    #[test]
    fn test_out_of_range() {
        let mut inventory = Inventory::with_size(2, 2);

        assert_eq!(inventory.at(5, 5), Err(InventoryError::OutOfRange { row: 5, col: 5 }));
        assert_eq!(inventory.at(0, 2), Err(InventoryError::OutOfRange { row: 0, col: 2 }));
        assert_eq!(inventory.at(2, 0), Err(InventoryError::OutOfRange { row: 2, col: 0 }));
        assert_eq!(
            inventory.store(2, 0, sword()),
            Err(InventoryError::OutOfRange { row: 2, col: 0 })
        );
        assert_eq!(inventory.count(), 0);
    }

    #[test]
    fn test_ragged_grid_bounds_per_row() {
        let grid = vec![vec![Item::none(); 3], vec![Item::none(); 1]];
        let mut inventory = Inventory::new(grid, None);

        assert!(inventory.store(0, 2, sword()).unwrap());
        assert!(inventory.store(1, 2, sword()).is_err());
        assert_eq!(inventory.count(), 1);
    }

    #[test]
    fn test_items_is_a_snapshot() {
        let mut inventory = Inventory::with_size(2, 2);
        let mut snapshot = inventory.items();
        snapshot[0][0] = sword();

        assert!(inventory.at(0, 0).unwrap().is_none());

        inventory.store(1, 0, shield()).unwrap();
        assert!(snapshot[1][0].is_none());
    }

    #[test]
    fn test_equip_hands_back_previous() {
        let mut inventory = Inventory::default();

        assert!(inventory.equip(Box::new(sword())).is_none());
        let previous = inventory.equip(Box::new(shield()));

        assert_eq!(previous.as_deref(), Some(&sword()));
        assert_eq!(inventory.equipped(), Some(&shield()));
        // Equipped items never count toward the grid totals
        assert_eq!(inventory.weight(), 0.0);
        assert_eq!(inventory.count(), 0);
    }

    #[test]
    fn test_discard_equipped_is_idempotent() {
        let mut inventory = stocked();

        inventory.discard_equipped();
        assert!(inventory.equipped().is_none());
        let weight = inventory.weight();
        let count = inventory.count();

        inventory.discard_equipped();
        assert!(inventory.equipped().is_none());
        assert_eq!(inventory.weight(), weight);
        assert_eq!(inventory.count(), count);
    }

    #[test]
    fn test_clone_is_deep() {
        let original = stocked();
        let mut copy = original.clone();

        assert_eq!(copy.weight(), original.weight());
        assert_eq!(copy.count(), original.count());
        assert_eq!(copy.items(), original.items());
        assert_eq!(copy.equipped(), original.equipped());

        // Separate allocations for the equipped item
        let original_ptr = original.equipped().unwrap() as *const Item;
        let copy_ptr = copy.equipped().unwrap() as *const Item;
        assert_ne!(original_ptr, copy_ptr);

        copy.equipped_mut().unwrap().weight = 99.0;
        assert_eq!(original.equipped().unwrap().weight, 2.0);

        assert!(copy.store(1, 1, sword()).unwrap());
        assert!(original.at(1, 1).unwrap().is_none());
        assert_eq!(original.count(), 2);
    }

    #[test]
    fn test_clone_from_replaces_everything() {
        let source = stocked();
        let mut target = Inventory::with_size(1, 1);
        target.store(0, 0, shield()).unwrap();
        let _ = target.equip(Box::new(Item::new("Ring", 0.1, ItemType::Accessory)));

        target.clone_from(&source);

        assert_eq!(target.rows(), 3);
        assert_eq!(target.weight(), source.weight());
        assert_eq!(target.count(), source.count());
        assert_eq!(target.equipped(), source.equipped());
        assert!(target.is_consistent());
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let mut source = stocked();
        let weight = source.weight();
        let count = source.count();
        let grid = source.items();

        let moved = source.take();

        assert_eq!(moved.weight(), weight);
        assert_eq!(moved.count(), count);
        assert_eq!(moved.items(), grid);
        assert_eq!(moved.equipped().map(|item| item.name.as_str()), Some("Helmet"));

        assert_eq!(source.weight(), 0.0);
        assert_eq!(source.count(), 0);
        assert!(source.equipped().is_none());
        assert_eq!(source.rows(), 0);
        assert!(source.is_consistent());
    }

    #[test]
    fn test_take_does_not_copy_storage() {
        let mut source = stocked();
        let grid_ptr = source.grid().as_ptr();
        let equipped_ptr = source.equipped().unwrap() as *const Item;

        let moved = source.take();

        assert_eq!(moved.grid().as_ptr(), grid_ptr);
        assert_eq!(moved.equipped().unwrap() as *const Item, equipped_ptr);
    }

    #[test]
    fn test_move_assign_over_stocked_target() {
        let mut a = stocked();
        let mut b = Inventory::with_size(2, 2);
        b.store(0, 0, shield()).unwrap();
        let _ = b.equip(Box::new(sword()));

        b = a.take();

        assert_eq!(b.weight(), 13.5);
        assert_eq!(b.count(), 2);
        assert_eq!(b.equipped().map(|item| item.name.as_str()), Some("Helmet"));
        assert_eq!(a.weight(), 0.0);
        assert_eq!(a.count(), 0);
        assert!(a.equipped().is_none());
    }

    #[test]
    fn test_moved_from_inventory_is_reusable() {
        let mut source = stocked();
        let _moved = source.take();

        assert!(source.store(0, 0, sword()).is_err());
        assert!(source.equip(Box::new(sword())).is_none());
        source.discard_equipped();
        assert!(source.items().is_empty());
    }

    #[test]
    fn test_totals_match_rescan_under_random_mutation() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let palette = [
            sword(),
            shield(),
            Item::none(),
            Item::new("Potion", 0.5, ItemType::Consumable),
            Item::new("Ore", 12.25, ItemType::Material),
        ];
        let mut inventory = Inventory::with_size(6, 4);

        for _ in 0..500 {
            match rng.gen_range(0..6) {
                0..=2 => {
                    let row = rng.gen_range(0..8);
                    let col = rng.gen_range(0..6);
                    let item = palette[rng.gen_range(0..palette.len())].clone();
                    let _ = inventory.store(row, col, item);
                }
                3 => {
                    let item = palette[rng.gen_range(0..palette.len())].clone();
                    let _ = inventory.equip(Box::new(item));
                }
                4 => inventory.discard_equipped(),
                _ => {
                    let copy = inventory.clone();
                    assert!(copy.is_consistent());
                    inventory = copy;
                }
            }
            assert!(inventory.is_consistent());
        }
        assert!(!inventory.is_empty());
    }
}
