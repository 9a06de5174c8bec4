use std::fmt;

use crate::*;

/// Structural problem found in a map document.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyMap,
    ExitOutOfRange { location: String, direction: String, index: usize },
    UnknownLockedExit { location: String, direction: String },
    ChestMismatch { location: String, items: usize, chances: usize },
    InvalidChance { context: String, value: f64 },
    InvalidValue { context: String },
    MissingSpellField { spell: String, field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyMap => write!(f, "map is empty"),
            ValidationError::ExitOutOfRange {
                location,
                direction,
                index,
            } => write!(f, "location '{location}' exit '{direction}' points at missing index {index}"),
            ValidationError::UnknownLockedExit { location, direction } => {
                write!(f, "location '{location}' locks '{direction}', which is not one of its exits")
            },
            ValidationError::ChestMismatch {
                location,
                items,
                chances,
            } => write!(
                f,
                "chest in '{location}' has {items} items but {chances} chances"
            ),
            ValidationError::InvalidChance { context, value } => {
                write!(f, "invalid chance {value} ({context})")
            },
            ValidationError::InvalidValue { context } => write!(f, "invalid value ({context})"),
            ValidationError::MissingSpellField { spell, field } => {
                write!(f, "spell '{spell}' is missing '{field}'")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check exits, chests and spells in a map document and return every problem found.
///
/// ```
/// use delve_data::{LocationDef, validate_map};
///
/// let hall: LocationDef = serde_json::from_str(r#"{"name": "Hall", "desc": "A hall."}"#).unwrap();
/// assert!(validate_map(&[hall]).is_empty());
/// assert!(!validate_map(&[]).is_empty());
/// ```
pub fn validate_map(map: &[LocationDef]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if map.is_empty() {
        errors.push(ValidationError::EmptyMap);
        return errors;
    }

    for loc in map {
        for (direction, index) in &loc.exits {
            if *index >= map.len() {
                errors.push(ValidationError::ExitOutOfRange {
                    location: loc.name.clone(),
                    direction: direction.clone(),
                    index: *index,
                });
            }
        }
        for direction in &loc.locked_exits {
            if !loc.exits.contains_key(direction) {
                errors.push(ValidationError::UnknownLockedExit {
                    location: loc.name.clone(),
                    direction: direction.clone(),
                });
            }
        }

        for item in &loc.complex_items {
            validate_complex_item(item, &mut errors);
        }
        for (name, enemy) in &loc.enemies {
            check_probability(enemy.chance, &format!("enemy '{name}' chance"), &mut errors);
            check_probability(
                enemy.evasion_chance,
                &format!("enemy '{name}' evasion_chance"),
                &mut errors,
            );
            if let Some(drop) = &enemy.drop {
                validate_complex_item(drop, &mut errors);
            }
        }
        if let Some(chest) = &loc.chest {
            validate_chest(&loc.name, chest, &mut errors);
        }
    }
    errors
}

fn validate_chest(location: &str, chest: &ChestDef, errors: &mut Vec<ValidationError>) {
    if chest.items.len() != chest.chances.len() {
        errors.push(ValidationError::ChestMismatch {
            location: location.to_string(),
            items: chest.items.len(),
            chances: chest.chances.len(),
        });
    }
    for weight in &chest.chances {
        if !weight.is_finite() || *weight < 0.0 {
            errors.push(ValidationError::InvalidChance {
                context: format!("chest '{}' weight", chest.name),
                value: *weight,
            });
        }
    }
    if !chest.items.is_empty() && chest.chances.iter().sum::<f64>() <= 0.0 {
        errors.push(ValidationError::InvalidValue {
            context: format!("chest '{}' weights sum to zero", chest.name),
        });
    }
    if chest.number_of_items_unlocked == 0 {
        errors.push(ValidationError::InvalidValue {
            context: format!("chest '{}' unlocks no items", chest.name),
        });
    }
    for item in &chest.items {
        validate_complex_item(item, errors);
    }
}

fn validate_complex_item(item: &ComplexItemDef, errors: &mut Vec<ValidationError>) {
    match item {
        ComplexItemDef::Recipe { result, .. } => validate_complex_item(result, errors),
        ComplexItemDef::Weapon { name, chance, .. } => {
            check_probability(*chance, &format!("weapon '{name}' chance"), errors);
        },
        ComplexItemDef::Spell {
            name,
            heal_amount,
            damage,
            damage_multiplier,
            turns,
            ..
        } => {
            let mut require = |present: bool, field: &'static str| {
                if !present {
                    errors.push(ValidationError::MissingSpellField {
                        spell: name.clone(),
                        field,
                    });
                }
            };
            match name.as_str() {
                "peace" => {},
                n if n.contains("heal") => require(heal_amount.is_some(), "heal_amount"),
                "rage" => {
                    require(damage_multiplier.is_some(), "damage_multiplier");
                    require(turns.is_some(), "turns");
                },
                "fireball" => require(damage.is_some(), "damage"),
                "poison" => {
                    require(damage.is_some(), "damage");
                    require(turns.is_some(), "turns");
                },
                _ => {},
            }
        },
        ComplexItemDef::Item { .. } | ComplexItemDef::Key { .. } => {},
    }
}

fn check_probability(value: f64, context: &str, errors: &mut Vec<ValidationError>) {
    if !(0.0..=1.0).contains(&value) {
        errors.push(ValidationError::InvalidChance {
            context: context.to_string(),
            value,
        });
    }
}
