//! Room definitions.
//!
//! Every location of the map is a `Room`: its exits, what lies on the floor, who is
//! lurking there and whether there's a chest to open.

use std::collections::BTreeSet;

use delve_data::LocationId;
use indexmap::IndexMap;

use crate::dice::Dice;
use crate::enemy::Enemy;
use crate::item::ComplexItem;

/// Any visitable location in the game world.
#[derive(Debug, Clone, Default)]
pub struct Room {
    pub id: Option<LocationId>,
    pub name: String,
    pub description: String,
    /// Direction -> index of the destination room, in map order.
    pub exits: IndexMap<String, usize>,
    pub locked_exits: BTreeSet<String>,
    /// Entry into this room is refused while set.
    pub locked: bool,
    pub required_key: Option<String>,
    pub items: Vec<String>,
    pub complex_items: Vec<ComplexItem>,
    /// Listed, rolled and poisoned in map order.
    pub enemies: IndexMap<String, Enemy>,
    pub chest: Option<Chest>,
    pub enemy_attack_desc: Option<String>,
    pub craftable: bool,
}
impl Room {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Room {
        Room {
            name: name.into(),
            description: description.into(),
            ..Room::default()
        }
    }

    pub fn has_enemies(&self) -> bool {
        !self.enemies.is_empty()
    }

    pub fn enemy_names(&self) -> Vec<String> {
        self.enemies.keys().cloned().collect()
    }

    pub fn exit_names(&self) -> Vec<String> {
        self.exits.keys().cloned().collect()
    }

    pub fn is_exit_locked(&self, direction: &str) -> bool {
        self.locked_exits.contains(direction)
    }

    /// Remove a plain item from the floor by name.
    pub fn take_item(&mut self, name: &str) -> Option<String> {
        let idx = self.items.iter().position(|i| i == name)?;
        Some(self.items.remove(idx))
    }

    /// Remove a complex item from the floor by exact name.
    pub fn take_complex_item(&mut self, name: &str) -> Option<ComplexItem> {
        let idx = self.complex_items.iter().position(|i| i.name() == name)?;
        Some(self.complex_items.remove(idx))
    }

    pub fn find_complex_item(&self, name: &str) -> Option<&ComplexItem> {
        self.complex_items.iter().find(|i| i.name() == name)
    }

    pub fn has_floor_items(&self) -> bool {
        !self.items.is_empty() || !self.complex_items.is_empty()
    }
}

/// A chest of weighted loot. Opening it is a one-way trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Chest {
    pub name: String,
    pub locked: bool,
    pub items: Vec<ComplexItem>,
    /// Selection weight for each entry of `items`.
    pub chances: Vec<f64>,
    pub unlock_count: usize,
}
impl Chest {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Unlock the chest and draw `unlock_count` items (with replacement) by weight.
    /// The chest is left empty afterward.
    pub fn open(&mut self, dice: &mut dyn Dice) -> Vec<ComplexItem> {
        self.locked = false;
        let mut drawn = Vec::with_capacity(self.unlock_count);
        for _ in 0..self.unlock_count {
            if let Some(item) = dice.weighted_index(&self.chances).and_then(|idx| self.items.get(idx)) {
                drawn.push(item.clone());
            }
        }
        self.items.clear();
        self.chances.clear();
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    fn trinket(name: &str) -> ComplexItem {
        ComplexItem::Item(name.into())
    }

    #[test]
    fn take_item_removes_only_one_copy() {
        let mut room = Room::new("Hall", "A hall.");
        room.items = vec!["coin".into(), "coin".into()];
        assert_eq!(room.take_item("coin").as_deref(), Some("coin"));
        assert_eq!(room.items, vec!["coin".to_string()]);
        assert!(room.take_item("gem").is_none());
    }

    #[test]
    fn opening_a_chest_draws_with_replacement_and_empties_it() {
        let mut chest = Chest {
            name: "trunk".into(),
            locked: true,
            items: vec![trinket("gold"), trinket("silver")],
            chances: vec![0.2, 0.8],
            unlock_count: 3,
        };
        let mut dice = ScriptedDice::new([]).with_picks([1, 1, 0]);
        let drawn = chest.open(&mut dice);
        assert_eq!(drawn, vec![trinket("silver"), trinket("silver"), trinket("gold")]);
        assert!(!chest.locked);
        assert!(chest.is_empty());
        assert!(chest.chances.is_empty());
    }
}
