//! Combat Module
//!
//! Resolution of player attacks, area spell damage, and the enemy phase that opens
//! every turn in a hostile room. All rolls go through [`Dice`] so the outcome of a
//! fight can be scripted.

use anyhow::Result;
use log::info;

use crate::dice::{Dice, will_happen};
use crate::room::Room;
use crate::view::{View, ViewItem};
use crate::world::DelveWorld;

/// A multi-turn spell still in effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActiveSpell {
    /// Weapon damage is raised by `multiplier` percent for the next `turns` hits.
    Rage { multiplier: f64, turns: u32 },
    /// Every enemy in the room takes `damage` at the start of the next `turns` turns.
    Poison { damage: i32, turns: u32 },
}

/// What came of a single attack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackOutcome {
    NoWeapon,
    NothingToAttack,
    NoSuchEnemy,
    Evaded,
    Missed,
    Hit { damage: i32, killed: bool },
}

/// How the enemy phase at the top of a turn went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyPhase {
    /// No enemies in the room.
    Quiet,
    Survived,
    PlayerDied,
}

/// Deal `damage` to the named enemy. If that kills it, the enemy is removed from the
/// room and its drop (if any) lands among the room's complex items.
///
/// Returns true if the enemy died.
pub fn damage_enemy(room: &mut Room, view: &mut View, name: &str, damage: i32) -> bool {
    let Some(enemy) = room.enemies.get_mut(name) else {
        return false;
    };
    enemy.take_damage(damage);
    if !enemy.is_dead() {
        view.push(ViewItem::EnemyWounded {
            name: name.to_string(),
            hp: enemy.hp,
        });
        return false;
    }
    let Some(enemy) = room.enemies.shift_remove(name) else {
        return false;
    };
    info!("enemy '{name}' killed in room '{}'", room.name);
    view.push(ViewItem::EnemyKilled(name.to_string()));
    if let Some(drop) = enemy.drop {
        view.push(ViewItem::LootDropped {
            name: drop.name().to_string(),
            kind: drop.kind(),
        });
        room.complex_items.push(drop);
    }
    true
}

/// Deal `damage` to every enemy in the room. Returns the names of those killed.
pub fn damage_all_enemies(room: &mut Room, view: &mut View, damage: i32) -> Vec<String> {
    room.enemy_names()
        .into_iter()
        .filter(|name| damage_enemy(room, view, name, damage))
        .collect()
}

/// Resolve `attack <enemy>:<weapon>` in the player's current room.
///
/// Checks run in order: weapon held, enemy present, evasion roll, hit roll. Nothing
/// changes unless the attack lands.
///
/// # Errors
/// - if the player's room can't be found
pub fn resolve_attack(
    world: &mut DelveWorld,
    view: &mut View,
    dice: &mut dyn Dice,
    enemy_name: &str,
    weapon_name: &str,
) -> Result<AttackOutcome> {
    let Some(weapon) = world.player.get_weapon(weapon_name).cloned() else {
        view.push(ViewItem::ActionFailure(format!("You don't have a weapon called '{weapon_name}'.")));
        return Ok(AttackOutcome::NoWeapon);
    };
    let room = world.player_room_ref()?;
    if !room.has_enemies() {
        view.push(ViewItem::ActionFailure("There's nothing to attack here.".to_string()));
        return Ok(AttackOutcome::NothingToAttack);
    }
    let Some(enemy) = room.enemies.get(enemy_name) else {
        view.push(ViewItem::ActionFailure(format!("There's no {enemy_name} here.")));
        return Ok(AttackOutcome::NoSuchEnemy);
    };

    if will_happen(dice, enemy.evasion_chance) {
        view.push(ViewItem::Combat(format!("The {enemy_name} evaded your attack!")));
        return Ok(AttackOutcome::Evaded);
    }
    if !will_happen(dice, weapon.chance) {
        view.push(ViewItem::Combat(format!("You missed the {enemy_name}.")));
        return Ok(AttackOutcome::Missed);
    }

    let damage = match world.spell_effect {
        Some(ActiveSpell::Rage { multiplier, turns }) => {
            view.push(ViewItem::SpellCast("Rage mode ongoing!".to_string()));
            let remaining = turns.saturating_sub(1);
            world.spell_effect = (remaining > 0).then_some(ActiveSpell::Rage {
                multiplier,
                turns: remaining,
            });
            if remaining == 0 {
                info!("rage effect expired");
            }
            rage_damage(weapon.damage, multiplier)
        },
        _ => weapon.damage,
    };

    view.push(ViewItem::Combat(format!(
        "You hit the {enemy_name} with your {} for {damage} damage.",
        weapon.name
    )));
    let killed = damage_enemy(world.player_room_mut()?, view, enemy_name, damage);
    info!("player hit '{enemy_name}' with '{weapon_name}' for {damage} (killed: {killed})");
    Ok(AttackOutcome::Hit { damage, killed })
}

/// Weapon damage boosted by a rage multiplier given in percent.
#[allow(clippy::cast_possible_truncation)]
pub fn rage_damage(base: i32, multiplier: f64) -> i32 {
    (f64::from(base) * (1.0 + multiplier / 100.0)).round() as i32
}

/// Install a poison effect and land its first tick on every enemy in the room.
///
/// A cast into an empty room ticks nobody and keeps its full duration.
///
/// # Errors
/// - if the player's room can't be found
pub fn cast_poison(world: &mut DelveWorld, view: &mut View, damage: i32, turns: u32) -> Result<()> {
    let room = world.player_room_mut()?;
    let had_enemies = room.has_enemies();
    damage_all_enemies(room, view, damage);
    if had_enemies && !room.has_enemies() {
        view.push(ViewItem::RoomCleared);
    }
    let remaining = if had_enemies { turns.saturating_sub(1) } else { turns };
    world.spell_effect = (remaining > 0).then_some(ActiveSpell::Poison {
        damage,
        turns: remaining,
    });
    Ok(())
}

/// Run the enemy phase for the player's current room.
///
/// A running poison ticks first. Whoever is still standing then rolls to attack, and
/// the damage of every hit is taken in one blow.
///
/// # Errors
/// - if the player's room can't be found
pub fn enemy_phase(world: &mut DelveWorld, view: &mut View, dice: &mut dyn Dice) -> Result<EnemyPhase> {
    if !world.player_room_ref()?.has_enemies() {
        return Ok(EnemyPhase::Quiet);
    }
    let location = world.location;
    let DelveWorld {
        rooms,
        player,
        spell_effect,
        ..
    } = world;
    let room = rooms
        .get_mut(location)
        .ok_or_else(|| anyhow::anyhow!("player's room index ({location}) not found in world"))?;

    if let Some(ActiveSpell::Poison { damage, turns: turns @ 1.. }) = *spell_effect {
        view.push(ViewItem::PoisonTick);
        damage_all_enemies(room, view, damage);
        let remaining = turns - 1;
        if remaining == 0 {
            *spell_effect = None;
            view.push(ViewItem::PoisonExpired);
            info!("poison effect expired");
        } else {
            *spell_effect = Some(ActiveSpell::Poison {
                damage,
                turns: remaining,
            });
        }
        if room.enemies.is_empty() {
            view.push(ViewItem::RoomCleared);
            return Ok(EnemyPhase::Survived);
        }
    }

    let mut total: i32 = 0;
    for enemy in room.enemies.values() {
        if will_happen(dice, enemy.chance) {
            view.push(ViewItem::EnemyAttacked(enemy.name.clone()));
            total = total.saturating_add(enemy.attack);
        } else {
            view.push(ViewItem::EnemyMissed(enemy.name.clone()));
        }
    }
    player.take_hit(total);
    view.push(ViewItem::HpLost(total));
    view.push(ViewItem::CurrentHp(player.hp));
    info!("enemy phase in '{}': player lost {total} hp, now {}", room.name, player.hp);

    if player.hp <= 0 {
        Ok(EnemyPhase::PlayerDied)
    } else {
        Ok(EnemyPhase::Survived)
    }
}
