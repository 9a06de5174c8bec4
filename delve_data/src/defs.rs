use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Numeric location id as written in the map. Keys refer to locations by this id.
pub type LocationId = i64;

/// A complete map document: the first entry is the starting location.
pub type MapDef = Vec<LocationDef>;

/// One location (room) of the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDef {
    #[serde(default)]
    pub id: Option<LocationId>,
    pub name: String,
    pub desc: String,
    /// Direction name -> index of the destination within the map document.
    #[serde(default)]
    pub exits: IndexMap<String, usize>,
    #[serde(default)]
    pub locked_exits: Vec<String>,
    /// Entering this location is refused while set.
    #[serde(default)]
    pub locked: bool,
    /// Name of the key expected to open this location. Only used for narration.
    #[serde(default)]
    pub required_key: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub complex_items: Vec<ComplexItemDef>,
    #[serde(default)]
    pub enemies: IndexMap<String, EnemyDef>,
    #[serde(default)]
    pub chest: Option<ChestDef>,
    #[serde(default)]
    pub enemy_attack_desc: Option<String>,
    #[serde(default)]
    pub craftable: bool,
}

/// Anything more than a bare item name, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ComplexItemDef {
    Item {
        name: String,
        #[serde(default)]
        desc: String,
    },
    Recipe {
        name: String,
        #[serde(default)]
        desc: String,
        #[serde(default)]
        ingredients: Vec<String>,
        result: Box<ComplexItemDef>,
    },
    Spell {
        name: String,
        #[serde(default)]
        desc: String,
        #[serde(default)]
        heal_amount: Option<i32>,
        #[serde(default)]
        damage: Option<i32>,
        #[serde(default)]
        damage_multiplier: Option<f64>,
        #[serde(default)]
        turns: Option<u32>,
    },
    Weapon {
        name: String,
        #[serde(default)]
        desc: String,
        damage: i32,
        chance: f64,
    },
    Key {
        name: String,
        #[serde(default)]
        desc: String,
        from: LocationId,
        to: LocationId,
    },
}

impl ComplexItemDef {
    pub fn name(&self) -> &str {
        match self {
            Self::Item { name, .. }
            | Self::Recipe { name, .. }
            | Self::Spell { name, .. }
            | Self::Weapon { name, .. }
            | Self::Key { name, .. } => name,
        }
    }
}

/// An enemy, keyed by name in its location's `enemies` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyDef {
    pub hp: i32,
    pub attack: i32,
    #[serde(default = "default_chance")]
    pub chance: f64,
    #[serde(default)]
    pub evasion_chance: f64,
    #[serde(default)]
    pub drop: Option<ComplexItemDef>,
}

/// A chest holding weighted loot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChestDef {
    pub name: String,
    #[serde(default = "default_locked")]
    pub locked: bool,
    #[serde(default)]
    pub items: Vec<ComplexItemDef>,
    #[serde(default)]
    pub chances: Vec<f64>,
    #[serde(default = "default_unlock_count")]
    pub number_of_items_unlocked: usize,
}

fn default_chance() -> f64 {
    1.0
}

fn default_locked() -> bool {
    true
}

fn default_unlock_count() -> usize {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_defaults_fill_missing_fields() {
        let loc: LocationDef = serde_json::from_str(r#"{"name": "Hall", "desc": "A hall."}"#).expect("parse location");
        assert!(loc.id.is_none());
        assert!(loc.exits.is_empty());
        assert!(loc.enemies.is_empty());
        assert!(!loc.locked);
        assert!(!loc.craftable);
    }

    #[test]
    fn exits_and_enemies_keep_document_order() {
        let loc: LocationDef = serde_json::from_str(
            r#"{"name": "Fork", "desc": "Paths.", "exits": {"west": 2, "east": 1, "north": 3},
                "enemies": {"wolf": {"hp": 3, "attack": 1}, "bat": {"hp": 1, "attack": 1}}}"#,
        )
        .expect("parse location");
        assert_eq!(loc.exits.keys().collect::<Vec<_>>(), ["west", "east", "north"]);
        assert_eq!(loc.enemies.keys().collect::<Vec<_>>(), ["wolf", "bat"]);
    }

    #[test]
    fn complex_items_are_tagged_by_type() {
        let json = r#"[
            {"type": "weapon", "name": "sword", "damage": 5, "chance": 0.8},
            {"type": "key", "name": "brass key", "from": 1, "to": 2},
            {"type": "recipe", "name": "sword_recipe", "ingredients": ["iron", "wood"],
             "result": {"type": "weapon", "name": "sword", "damage": 5, "chance": 0.8}}
        ]"#;
        let items: Vec<ComplexItemDef> = serde_json::from_str(json).expect("parse items");
        assert!(matches!(&items[0], ComplexItemDef::Weapon { damage: 5, .. }));
        assert!(matches!(&items[1], ComplexItemDef::Key { from: 1, to: 2, .. }));
        assert_eq!(items[2].name(), "sword_recipe");
    }

    #[test]
    fn enemy_and_chest_defaults() {
        let enemy: EnemyDef = serde_json::from_str(r#"{"hp": 5, "attack": 2}"#).expect("parse enemy");
        assert!((enemy.chance - 1.0).abs() < f64::EPSILON);
        assert!(enemy.evasion_chance.abs() < f64::EPSILON);

        let chest: ChestDef = serde_json::from_str(r#"{"name": "trunk"}"#).expect("parse chest");
        assert!(chest.locked);
        assert_eq!(chest.number_of_items_unlocked, 1);
    }
}
