//! `repl::spell` module
//!
//! Casting spells with `use <spell>`. A spell leaves the inventory as soon as it's
//! used; it only comes back if the player declines to waste it on an empty room.

use anyhow::Context;
use log::info;

use crate::combat::{ActiveSpell, cast_poison, damage_all_enemies};
use crate::command::CommandError;
use crate::item::{Spell, SpellEffect};
use crate::repl::input::{LineSource, confirm};
use crate::repl::{Ending, HandlerResult, ReplControl};
use crate::style::GameStyle;
use crate::view::{View, ViewItem};
use crate::world::DelveWorld;

/// Cast a spell from the player's inventory.
///
/// # Errors
/// - [`CommandError::Internal`] if the confirmation prompt can't be read or the
///   player's room can't be found
pub fn use_handler(world: &mut DelveWorld, view: &mut View, input: &mut dyn LineSource, name: &str) -> HandlerResult {
    let Some(spell) = world.player.remove_spell(name) else {
        view.push(ViewItem::ActionFailure(format!("You don't have the spell {name}.")));
        return Ok(ReplControl::Continue);
    };
    info!("player used spell '{}'", spell.name);

    match spell.effect {
        SpellEffect::Peace => return Ok(ReplControl::End(Ending::Peace)),
        SpellEffect::Heal { amount } => {
            world.player.heal(amount);
            view.push(ViewItem::Healed {
                amount,
                hp: world.player.hp,
            });
            return Ok(ReplControl::Continue);
        },
        _ => {},
    }

    if !world.player_room_ref()?.has_enemies() && !confirm_wasted_cast(view, input, &spell)? {
        view.push(ViewItem::ActionSuccess(format!("You put the {} spell away.", spell.name)));
        world.player.pick_spell(spell);
        return Ok(ReplControl::Continue);
    }
    cast(world, view, &spell)?;
    Ok(ReplControl::Continue)
}

fn confirm_wasted_cast(view: &mut View, input: &mut dyn LineSource, spell: &Spell) -> Result<bool, CommandError> {
    // the question has to appear after everything already queued this turn
    view.flush();
    let prompt = format!("There are no enemies here. Cast {} anyway? (y/n) ", spell.name)
        .prompt_style()
        .to_string();
    Ok(confirm(input, &prompt).context("reading spell confirmation")?)
}

fn cast(world: &mut DelveWorld, view: &mut View, spell: &Spell) -> Result<(), CommandError> {
    match spell.effect {
        SpellEffect::Rage { multiplier, turns } => {
            world.spell_effect = Some(ActiveSpell::Rage { multiplier, turns });
            view.push(ViewItem::SpellCast(format!(
                "Rage fills you! Your next {turns} hit(s) deal {multiplier}% more damage."
            )));
        },
        SpellEffect::Fireball { damage } => {
            view.push(ViewItem::SpellCast(format!(
                "A fireball bursts across the room for {damage} damage!"
            )));
            let room = world.player_room_mut()?;
            let had_enemies = room.has_enemies();
            damage_all_enemies(room, view, damage);
            if had_enemies && !room.has_enemies() {
                view.push(ViewItem::RoomCleared);
            }
        },
        SpellEffect::Poison { damage, turns } => {
            view.push(ViewItem::SpellCast(format!(
                "A poisonous haze settles over the room: {damage} damage for {turns} turn(s)."
            )));
            cast_poison(world, view, damage, turns)?;
        },
        SpellEffect::Inert | SpellEffect::Peace | SpellEffect::Heal { .. } => {
            view.push(ViewItem::SpellCast(format!(
                "You cast {}, but nothing seems to happen.",
                spell.name
            )));
        },
    }
    Ok(())
}
