//! `repl::attack` module
//!
//! Handlers for `attack <enemy>:<weapon>` and its `punch <enemy>` shorthand.

use crate::combat::{AttackOutcome, resolve_attack};
use crate::command::{CommandError, split_attack_target};
use crate::dice::Dice;
use crate::item::PUNCH;
use crate::view::View;
use crate::world::DelveWorld;

/// # Errors
/// - [`CommandError::MissingArgument`] if the argument has no colon
/// - [`CommandError::Internal`] if the player's room can't be found
pub fn attack_handler(
    world: &mut DelveWorld,
    view: &mut View,
    dice: &mut dyn Dice,
    arg: &str,
) -> Result<AttackOutcome, CommandError> {
    let (enemy, weapon) = split_attack_target(arg)?;
    Ok(resolve_attack(world, view, dice, enemy, weapon)?)
}

/// # Errors
/// - [`CommandError::Internal`] if the player's room can't be found
pub fn punch_handler(
    world: &mut DelveWorld,
    view: &mut View,
    dice: &mut dyn Dice,
    enemy: &str,
) -> Result<AttackOutcome, CommandError> {
    Ok(resolve_attack(world, view, dice, enemy.trim(), PUNCH)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use crate::enemy::Enemy;
    use crate::room::Room;

    fn goblin_world() -> DelveWorld {
        let mut room = Room::new("Cave", "Drips.");
        room.enemies.insert("goblin".into(), Enemy::new("goblin", 5, 3));
        DelveWorld::new(vec![room]).expect("world")
    }

    #[test]
    fn punch_is_attack_with_punch() {
        let mut world = goblin_world();
        let mut view = View::new();
        let mut dice = ScriptedDice::always(1);
        punch_handler(&mut world, &mut view, &mut dice, "goblin").expect("punch");
        attack_handler(&mut world, &mut view, &mut dice, "goblin:punch").expect("attack");
        assert_eq!(world.rooms[0].enemies["goblin"].hp, 3);
    }

    #[test]
    fn attack_without_weapon_part_is_rejected() {
        let mut world = goblin_world();
        let mut view = View::new();
        let mut dice = ScriptedDice::always(1);
        let result = attack_handler(&mut world, &mut view, &mut dice, "goblin");
        assert!(matches!(result, Err(CommandError::MissingArgument(_))));
        assert_eq!(world.rooms[0].enemies["goblin"].hp, 5);
    }

    #[test]
    fn blank_weapon_is_just_a_weapon_you_lack() {
        let mut world = goblin_world();
        let mut view = View::new();
        let mut dice = ScriptedDice::always(1);
        let outcome = attack_handler(&mut world, &mut view, &mut dice, "goblin:").expect("attack");
        assert_eq!(outcome, AttackOutcome::NoWeapon);
        assert!(view.contains_text("You don't have a weapon called ''."));
        assert_eq!(world.rooms[0].enemies["goblin"].hp, 5);
    }
}
