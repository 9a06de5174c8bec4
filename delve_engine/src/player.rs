//! Player -- inventory, health and carrying capacity
use std::cmp;
use std::fmt::Display;

use crate::item::{ComplexItem, Key, Recipe, Spell, Weapon};

/// Health ceiling, and the health every player starts with.
pub const MAX_HP: i32 = 100;
/// Carrying capacity when the map contains any enemy.
pub const COMBAT_CAPACITY: usize = 10;

/// How many capacity-counted things a player may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    Limited(usize),
    Unbounded,
}
impl Capacity {
    /// Returns true if carrying `count` things leaves no room for another.
    pub fn is_reached_by(self, count: usize) -> bool {
        match self {
            Capacity::Limited(max) => count >= max,
            Capacity::Unbounded => false,
        }
    }
}
impl Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capacity::Limited(max) => write!(f, "{max}"),
            Capacity::Unbounded => write!(f, "inf"),
        }
    }
}

/// The adventurer. Lookups by name return the first match in pickup order.
#[derive(Debug, Clone)]
pub struct Player {
    pub items: Vec<String>,
    pub weapons: Vec<Weapon>,
    pub recipes: Vec<Recipe>,
    pub spells: Vec<Spell>,
    pub keys: Vec<Key>,
    /// May drop below zero; the caller decides what that means.
    pub hp: i32,
    pub capacity: Capacity,
}
impl Player {
    /// Create a fresh player. Worlds with enemies hand out a punch and a limited pack.
    pub fn new(world_has_enemies: bool) -> Player {
        Player {
            items: Vec::new(),
            weapons: if world_has_enemies { vec![Weapon::punch()] } else { Vec::new() },
            recipes: Vec::new(),
            spells: Vec::new(),
            keys: Vec::new(),
            hp: MAX_HP,
            capacity: if world_has_enemies {
                Capacity::Limited(COMBAT_CAPACITY)
            } else {
                Capacity::Unbounded
            },
        }
    }

    /// Number of things that count against capacity (recipes and keys don't).
    pub fn total_items(&self) -> usize {
        self.items.len() + self.spells.len() + self.weapons.len()
    }

    pub fn exceeded_max_capacity(&self) -> bool {
        self.capacity.is_reached_by(self.total_items())
    }

    pub fn can_pick_item(&self) -> bool {
        !self.exceeded_max_capacity()
    }

    pub fn can_pick_complex_item(&self, item: &ComplexItem) -> bool {
        !self.exceeded_max_capacity() || item.bypasses_capacity()
    }

    pub fn take_hit(&mut self, amount: i32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: i32) {
        self.hp = cmp::min(MAX_HP, self.hp.saturating_add(amount));
    }

    pub fn is_carrying_nothing(&self) -> bool {
        self.items.is_empty()
            && self.recipes.is_empty()
            && self.weapons.is_empty()
            && self.spells.is_empty()
            && self.keys.is_empty()
    }

    pub fn pick_item(&mut self, name: impl Into<String>) {
        self.items.push(name.into());
    }

    pub fn pick_recipe(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    pub fn pick_spell(&mut self, spell: Spell) {
        self.spells.push(spell);
    }

    pub fn pick_weapon(&mut self, weapon: Weapon) {
        self.weapons.push(weapon);
    }

    pub fn pick_key(&mut self, key: Key) {
        self.keys.push(key);
    }

    /// File a complex item under the matching inventory category.
    pub fn pick_complex_item(&mut self, item: ComplexItem) {
        match item {
            ComplexItem::Item(name) => self.pick_item(name),
            ComplexItem::Recipe(recipe) => self.pick_recipe(recipe),
            ComplexItem::Spell(spell) => self.pick_spell(spell),
            ComplexItem::Weapon(weapon) => self.pick_weapon(weapon),
            ComplexItem::Key(key) => self.pick_key(key),
        }
    }

    /// Remove one plain item by name. Returns false if it isn't carried.
    pub fn remove_item(&mut self, name: &str) -> bool {
        if let Some(idx) = self.items.iter().position(|i| i == name) {
            self.items.remove(idx);
            true
        } else {
            false
        }
    }

    pub fn remove_recipe(&mut self, name: &str) -> Option<Recipe> {
        take_named(&mut self.recipes, name, |r| &r.name)
    }

    /// Remove a spell from inventory (used both for dropping and casting).
    pub fn remove_spell(&mut self, name: &str) -> Option<Spell> {
        take_named(&mut self.spells, name, |s| &s.name)
    }

    pub fn remove_weapon(&mut self, name: &str) -> Option<Weapon> {
        take_named(&mut self.weapons, name, |w| &w.name)
    }

    pub fn remove_key(&mut self, name: &str) -> Option<Key> {
        take_named(&mut self.keys, name, |k| &k.name)
    }

    /// Remove a droppable complex item (weapon, recipe or spell) by name.
    pub fn remove_complex_item(&mut self, name: &str) -> Option<ComplexItem> {
        self.remove_weapon(name)
            .map(ComplexItem::Weapon)
            .or_else(|| self.remove_recipe(name).map(ComplexItem::Recipe))
            .or_else(|| self.remove_spell(name).map(ComplexItem::Spell))
    }

    pub fn get_recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Find a recipe by its exact name, or by `<name>_recipe`.
    pub fn find_recipe(&self, name: &str) -> Option<&Recipe> {
        self.get_recipe(name)
            .or_else(|| self.get_recipe(&format!("{name}_recipe")))
    }

    pub fn get_weapon(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.name == name)
    }

    pub fn get_key(&self, name: &str) -> Option<&Key> {
        self.keys.iter().find(|k| k.name == name)
    }

    /// Returns true if every listed item is carried, counting repeats.
    pub fn has_items(&self, names: &[String]) -> bool {
        names.iter().all(|name| {
            let needed = names.iter().filter(|n| *n == name).count();
            self.items.iter().filter(|i| *i == name).count() >= needed
        })
    }
}

fn take_named<T>(list: &mut Vec<T>, name: &str, name_of: impl Fn(&T) -> &String) -> Option<T> {
    list.iter().position(|t| name_of(t) == name).map(|idx| list.remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::SpellEffect;

    fn spell(name: &str) -> Spell {
        Spell {
            name: name.into(),
            effect: SpellEffect::Inert,
        }
    }

    fn recipe(name: &str) -> Recipe {
        Recipe {
            name: name.into(),
            ingredients: vec!["iron".into(), "wood".into()],
            result: Box::new(ComplexItem::Item("sword".into())),
        }
    }

    fn assert_total(player: &Player) {
        assert_eq!(
            player.total_items(),
            player.items.len() + player.spells.len() + player.weapons.len()
        );
    }

    #[test]
    fn enemy_worlds_start_with_punch_and_limited_capacity() {
        let player = Player::new(true);
        assert_eq!(player.weapons, vec![Weapon::punch()]);
        assert_eq!(player.capacity, Capacity::Limited(10));
        assert_eq!(player.hp, MAX_HP);
        assert_eq!(player.total_items(), 1);
    }

    #[test]
    fn peaceful_worlds_have_unbounded_capacity() {
        let mut player = Player::new(false);
        assert!(player.weapons.is_empty());
        assert_eq!(player.capacity.to_string(), "inf");
        for n in 0..25 {
            assert!(player.can_pick_item());
            player.pick_item(format!("pebble {n}"));
        }
        assert_eq!(player.total_items(), 25);
    }

    #[test]
    fn total_items_tracks_every_pick_and_remove() {
        let mut player = Player::new(true);
        player.pick_item("rope");
        assert_total(&player);
        player.pick_complex_item(ComplexItem::Spell(spell("fireball")));
        assert_total(&player);
        player.pick_complex_item(ComplexItem::Recipe(recipe("sword_recipe")));
        assert_total(&player);
        assert_eq!(player.total_items(), 3);
        assert!(player.remove_complex_item("fireball").is_some());
        assert_total(&player);
        assert!(player.remove_item("rope"));
        assert!(!player.remove_item("rope"));
        assert_total(&player);
        assert_eq!(player.total_items(), 1);
    }

    #[test]
    fn recipes_and_keys_bypass_capacity() {
        let mut player = Player::new(true);
        for n in 0..9 {
            player.pick_item(format!("stone {n}"));
        }
        assert!(player.exceeded_max_capacity());
        assert!(!player.can_pick_item());
        assert!(!player.can_pick_complex_item(&ComplexItem::Spell(spell("rage"))));
        assert!(player.can_pick_complex_item(&ComplexItem::Recipe(recipe("sword_recipe"))));
        assert!(player.can_pick_complex_item(&ComplexItem::Key(Key {
            name: "key".into(),
            from: 1,
            to: 2
        })));
    }

    #[test]
    fn heal_is_capped_and_hits_may_go_negative() {
        let mut player = Player::new(true);
        player.take_hit(30);
        player.heal(50);
        assert_eq!(player.hp, MAX_HP);
        player.take_hit(150);
        assert_eq!(player.hp, -50);
        player.take_hit(i32::MAX);
        assert_eq!(player.hp, i32::MIN);
    }

    #[test]
    fn recipe_lookup_falls_back_to_suffix() {
        let mut player = Player::new(false);
        player.pick_recipe(recipe("sword_recipe"));
        assert!(player.find_recipe("sword").is_some());
        assert!(player.find_recipe("sword_recipe").is_some());
        assert!(player.find_recipe("shield").is_none());
    }

    #[test]
    fn has_items_counts_duplicates() {
        let mut player = Player::new(false);
        player.pick_item("plank");
        let needs_two = vec!["plank".to_string(), "plank".to_string()];
        assert!(!player.has_items(&needs_two));
        player.pick_item("plank");
        assert!(player.has_items(&needs_two));
    }
}
