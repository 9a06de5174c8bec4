//! Loader utilities for building a `DelveWorld` from a JSON map document.
//!
//! The document is checked in stages: it must parse as JSON, be a non-empty array,
//! deserialize into `delve_data` definitions, and pass `validate_map`. Only then are
//! the definitions converted into runtime rooms.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use delve_data::{ChestDef, ComplexItemDef, EnemyDef, LocationDef, MapDef, ValidationError, validate_map};
use indexmap::IndexMap;
use log::info;
use serde_json::Value;
use thiserror::Error;

use crate::enemy::Enemy;
use crate::item::{ComplexItem, Key, Recipe, Spell, SpellEffect, Weapon};
use crate::room::{Chest, Room};
use crate::world::DelveWorld;

/// Problems that stop a map from being played. All of them are fatal before play starts.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("unable to read map file '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Map file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Map is not a list.")]
    NotAList,
    #[error("Map is empty.")]
    Empty,
    #[error("map validation failed:\n{}", list_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn list_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Load and build the world described by the map file at `path`.
///
/// # Errors
/// Any [`MapError`]: unreadable file, bad JSON, wrong shape, or failed validation.
pub fn load_world(path: &Path) -> Result<DelveWorld, MapError> {
    info!("loading map from '{}'", path.display());
    let def = load_map_def(path)?;
    let world = build_world_from_def(&def)?;
    info!("{} rooms added to DelveWorld", world.rooms.len());
    info!(
        "{} enemies added to DelveWorld",
        world.rooms.iter().map(|r| r.enemies.len()).sum::<usize>()
    );
    Ok(world)
}

/// Read a map document from disk.
///
/// # Errors
/// - on file IO failure, or any error from [`parse_map_def`]
pub fn load_map_def(path: &Path) -> Result<MapDef, MapError> {
    let text = fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_map_def(&text)
}

/// Parse a map document, insisting on a non-empty array of locations.
///
/// # Errors
/// - if the text isn't JSON, isn't an array, is an empty array, or has malformed entries
pub fn parse_map_def(text: &str) -> Result<MapDef, MapError> {
    let value: Value = serde_json::from_str(text)?;
    match &value {
        Value::Array(entries) if entries.is_empty() => return Err(MapError::Empty),
        Value::Array(_) => {},
        _ => return Err(MapError::NotAList),
    }
    Ok(serde_json::from_value(value)?)
}

/// Validate a map definition and convert it into a playable `DelveWorld`.
///
/// # Errors
/// - [`MapError::Invalid`] with every validation problem found
pub fn build_world_from_def(def: &[LocationDef]) -> Result<DelveWorld, MapError> {
    let errors = validate_map(def);
    if !errors.is_empty() {
        return Err(MapError::Invalid(errors));
    }
    let rooms = def.iter().map(room_from_def).collect::<Result<Vec<_>, _>>()?;
    DelveWorld::new(rooms)
}

fn room_from_def(def: &LocationDef) -> Result<Room, MapError> {
    let enemies: IndexMap<String, Enemy> = def
        .enemies
        .iter()
        .map(|(name, enemy)| Ok((name.clone(), enemy_from_def(name, enemy)?)))
        .collect::<Result<_, MapError>>()?;
    let chest = def.chest.as_ref().map(chest_from_def).transpose()?;

    Ok(Room {
        id: def.id,
        name: def.name.clone(),
        description: def.desc.clone(),
        exits: def.exits.clone(),
        locked_exits: def.locked_exits.iter().cloned().collect(),
        locked: def.locked,
        required_key: def.required_key.clone(),
        items: def.items.clone(),
        complex_items: complex_items_from_defs(&def.complex_items)?,
        enemies,
        chest,
        enemy_attack_desc: def.enemy_attack_desc.clone(),
        craftable: def.craftable,
    })
}

fn enemy_from_def(name: &str, def: &EnemyDef) -> Result<Enemy, MapError> {
    Ok(Enemy {
        name: name.to_string(),
        hp: def.hp,
        attack: def.attack,
        chance: def.chance,
        evasion_chance: def.evasion_chance,
        drop: def.drop.as_ref().map(complex_item_from_def).transpose()?,
    })
}

fn chest_from_def(def: &ChestDef) -> Result<Chest, MapError> {
    Ok(Chest {
        name: def.name.clone(),
        locked: def.locked,
        items: complex_items_from_defs(&def.items)?,
        chances: def.chances.clone(),
        unlock_count: def.number_of_items_unlocked,
    })
}

fn complex_items_from_defs(defs: &[ComplexItemDef]) -> Result<Vec<ComplexItem>, MapError> {
    defs.iter().map(complex_item_from_def).collect()
}

/// Convert a tagged item definition into its runtime variant.
///
/// # Errors
/// - if a spell lacks a field its behaviour needs
pub fn complex_item_from_def(def: &ComplexItemDef) -> Result<ComplexItem, MapError> {
    let item = match def {
        ComplexItemDef::Item { name, .. } => ComplexItem::Item(name.clone()),
        ComplexItemDef::Recipe {
            name,
            ingredients,
            result,
            ..
        } => ComplexItem::Recipe(Recipe {
            name: name.clone(),
            ingredients: ingredients.clone(),
            result: Box::new(complex_item_from_def(result)?),
        }),
        ComplexItemDef::Weapon {
            name, damage, chance, ..
        } => ComplexItem::Weapon(Weapon {
            name: name.clone(),
            damage: *damage,
            chance: *chance,
        }),
        ComplexItemDef::Key { name, from, to, .. } => ComplexItem::Key(Key {
            name: name.clone(),
            from: *from,
            to: *to,
        }),
        ComplexItemDef::Spell {
            name,
            heal_amount,
            damage,
            damage_multiplier,
            turns,
            ..
        } => {
            let need = |field: &'static str| {
                MapError::Invalid(vec![ValidationError::MissingSpellField {
                    spell: name.clone(),
                    field,
                }])
            };
            let effect = match name.as_str() {
                "peace" => SpellEffect::Peace,
                n if n.contains("heal") => SpellEffect::Heal {
                    amount: heal_amount.ok_or_else(|| need("heal_amount"))?,
                },
                "rage" => SpellEffect::Rage {
                    multiplier: damage_multiplier.ok_or_else(|| need("damage_multiplier"))?,
                    turns: turns.ok_or_else(|| need("turns"))?,
                },
                "fireball" => SpellEffect::Fireball {
                    damage: damage.ok_or_else(|| need("damage"))?,
                },
                "poison" => SpellEffect::Poison {
                    damage: damage.ok_or_else(|| need("damage"))?,
                    turns: turns.ok_or_else(|| need("turns"))?,
                },
                _ => SpellEffect::Inert,
            };
            ComplexItem::Spell(Spell {
                name: name.clone(),
                effect,
            })
        },
    };
    Ok(item)
}
