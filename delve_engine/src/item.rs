//! Item types and related helpers.
//!
//! Plain items are carried around by name only. Anything with behaviour attached
//! (recipes, spells, weapons and keys) is a [`ComplexItem`], and each variant holds
//! only the fields that matter for it.

use std::fmt::Display;

use delve_data::LocationId;
use variantly::Variantly;

/// The innate weapon every player starts with when the map contains enemies.
pub const PUNCH: &str = "punch";

/// Category tag of a [`ComplexItem`], as shown in room listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Item,
    Recipe,
    Spell,
    Weapon,
    Key,
}
impl Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Item => write!(f, "item"),
            ItemKind::Recipe => write!(f, "recipe"),
            ItemKind::Spell => write!(f, "spell"),
            ItemKind::Weapon => write!(f, "weapon"),
            ItemKind::Key => write!(f, "key"),
        }
    }
}

/// Any pickup that is more than a bare name.
#[derive(Debug, Clone, PartialEq, Variantly)]
pub enum ComplexItem {
    /// A plain item that happens to be listed among complex items. Picking it up
    /// stores only its name.
    Item(String),
    Recipe(Recipe),
    Spell(Spell),
    Weapon(Weapon),
    Key(Key),
}
impl ComplexItem {
    pub fn name(&self) -> &str {
        match self {
            ComplexItem::Item(name) => name,
            ComplexItem::Recipe(recipe) => &recipe.name,
            ComplexItem::Spell(spell) => &spell.name,
            ComplexItem::Weapon(weapon) => &weapon.name,
            ComplexItem::Key(key) => &key.name,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            ComplexItem::Item(_) => ItemKind::Item,
            ComplexItem::Recipe(_) => ItemKind::Recipe,
            ComplexItem::Spell(_) => ItemKind::Spell,
            ComplexItem::Weapon(_) => ItemKind::Weapon,
            ComplexItem::Key(_) => ItemKind::Key,
        }
    }

    /// Recipes and keys never count against carrying capacity.
    pub fn bypasses_capacity(&self) -> bool {
        self.is_recipe() || self.is_key()
    }
}

/// Instructions for crafting `result` out of plain items.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub result: Box<ComplexItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    pub name: String,
    pub damage: i32,
    /// Probability of landing a hit, checked with a decile roll.
    pub chance: f64,
}
impl Weapon {
    pub fn punch() -> Weapon {
        Weapon {
            name: PUNCH.to_string(),
            damage: 1,
            chance: 0.9,
        }
    }
}

/// Opens the exit from location `from` into location `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    pub name: String,
    pub from: LocationId,
    pub to: LocationId,
}
impl Key {
    pub fn opens(&self, from: Option<LocationId>, to: Option<LocationId>) -> bool {
        from == Some(self.from) && to == Some(self.to)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spell {
    pub name: String,
    pub effect: SpellEffect,
}

/// What casting a spell does. Selected from the spell's name when the map is loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpellEffect {
    /// Ends the game on the spot.
    Peace,
    Heal { amount: i32 },
    /// Boosts weapon damage by `multiplier` percent for the next `turns` hits.
    Rage { multiplier: f64, turns: u32 },
    Fireball { damage: i32 },
    /// Damages every enemy in the room now and at the start of following turns.
    Poison { damage: i32, turns: u32 },
    /// A spell with no known behaviour; casting only consumes it.
    Inert,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_name_follow_variant() {
        let key = ComplexItem::Key(Key {
            name: "brass key".into(),
            from: 1,
            to: 2,
        });
        assert_eq!(key.kind(), ItemKind::Key);
        assert_eq!(key.name(), "brass key");
        assert_eq!(key.kind().to_string(), "key");
        assert!(key.bypasses_capacity());
        assert!(!ComplexItem::Weapon(Weapon::punch()).bypasses_capacity());
    }

    #[test]
    fn key_requires_exact_id_pair() {
        let key = Key {
            name: "k".into(),
            from: 1,
            to: 2,
        };
        assert!(key.opens(Some(1), Some(2)));
        assert!(!key.opens(Some(2), Some(1)));
        assert!(!key.opens(None, Some(2)));
    }
}
