//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the various command handlers that manipulate the [`DelveWorld`].

pub mod attack;
pub mod crafting;
pub mod input;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod spell;
pub mod system;

pub use attack::*;
pub use crafting::*;
pub use inventory::*;
pub use look::*;
pub use movement::*;
pub use spell::*;
pub use system::*;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::combat::{EnemyPhase, enemy_phase};
use crate::command::{CommandError, Verb, parse_command};
use crate::dice::Dice;
use crate::style::GameStyle;
use crate::view::{View, ViewItem};
use crate::world::DelveWorld;

use input::{InputEvent, LineSource};

/// Control flow signal returned by handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    End(Ending),
}

/// The ways a session can finish. None of them is a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Quit,
    Peace,
    Death,
}
impl Ending {
    pub fn message(self) -> &'static str {
        match self {
            Ending::Quit => "Goodbye!",
            Ending::Death => "You died!",
            Ending::Peace => {
                "A hush spreads through the halls. The weapons in every hand grow heavy and fall, \
                 the walls soften into morning light, and you wake in your own bed with the \
                 blanket tangled around your legs. It was only a nightmare. You are finally at peace."
            },
        }
    }
}

/// What every command handler returns.
pub type HandlerResult = Result<ReplControl, CommandError>;

/// Run the main read–eval–print loop until the session ends.
///
/// Each turn reads a line, parses it, runs the enemy phase (skipped for `quit`), and
/// then dispatches the command. Command errors are reported and play continues.
///
/// # Errors
/// - on failure to read player input, or an internal engine fault from a handler
pub fn run_repl(world: &mut DelveWorld, input: &mut dyn LineSource, dice: &mut dyn Dice) -> Result<Ending> {
    let mut view = View::new();
    look_handler(world, &mut view)?;
    view.flush();

    loop {
        world.turn_count += 1;
        info!("================> BEGIN TURN {} <================", world.turn_count);

        let prompt = format!("\n[HP: {}]>> ", world.player.hp).prompt_style().to_string();
        let line = match input.read_line(&prompt).context("reading player input")? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => Verb::Quit.token().to_string(),
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
        };

        let parsed = parse_command(&line);
        let quitting = matches!(&parsed, Ok(cmd) if cmd.verb.is_quit());
        if !quitting && enemy_phase(world, &mut view, dice)? == EnemyPhase::PlayerDied {
            return Ok(finish(&mut view, Ending::Death));
        }

        let outcome = parsed.and_then(|cmd| dispatch(world, &mut view, input, dice, cmd.verb, cmd.arg()));
        match outcome {
            Ok(ReplControl::Continue) => view.flush(),
            Ok(ReplControl::End(ending)) => return Ok(finish(&mut view, ending)),
            Err(CommandError::Internal(err)) => return Err(err),
            Err(err) => {
                warn!("command error: {err}");
                view.push(ViewItem::Error(err.to_string()));
                view.flush();
            },
        }
    }
}

fn finish(view: &mut View, ending: Ending) -> Ending {
    info!("session ended: {ending:?}");
    view.push(ViewItem::GameOver(ending));
    view.flush();
    ending
}

/// Route a parsed command to its handler.
///
/// # Errors
/// - whatever the handler reports
pub fn dispatch(
    world: &mut DelveWorld,
    view: &mut View,
    input: &mut dyn LineSource,
    dice: &mut dyn Dice,
    verb: Verb,
    arg: Option<&str>,
) -> HandlerResult {
    match verb {
        Verb::Quit => return Ok(quit_handler(world)),
        Verb::Look => look_handler(world, view)?,
        Verb::Inventory => inventory_handler(world, view),
        Verb::Items => items_handler(world, view)?,
        Verb::Hp => hp_handler(world, view),
        Verb::GetAll => get_all_handler(world, view)?,
        Verb::OpenChest => open_chest_handler(world, view, dice)?,
        Verb::Get => get_handler(world, view, verb.require_arg(arg)?)?,
        Verb::Drop => drop_handler(world, view, verb.require_arg(arg)?)?,
        Verb::Go => go_handler(world, view, verb.require_arg(arg)?)?,
        Verb::Unlock => unlock_handler(world, view, verb.require_arg(arg)?)?,
        Verb::Punch => {
            punch_handler(world, view, dice, verb.require_arg(arg)?)?;
        },
        Verb::Attack => {
            attack_handler(world, view, dice, verb.require_arg(arg)?)?;
        },
        Verb::Craft => craft_handler(world, view, arg)?,
        Verb::Ingredients => ingredients_handler(world, view, verb.require_arg(arg)?),
        Verb::Use => return use_handler(world, view, input, verb.require_arg(arg)?),
    }
    Ok(ReplControl::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use crate::enemy::Enemy;
    use crate::room::Room;
    use crate::repl::input::ScriptedInput;

    #[test]
    fn eof_ends_the_session_as_quit() {
        let mut world = DelveWorld::new(vec![Room::new("Cell", "Damp.")]).expect("world");
        let mut input = ScriptedInput::new(Vec::<String>::new());
        let mut dice = ScriptedDice::always(1);
        let ending = run_repl(&mut world, &mut input, &mut dice).expect("repl");
        assert_eq!(ending, Ending::Quit);
    }

    #[test]
    fn quit_skips_the_enemy_phase() {
        let mut room = Room::new("Den", "Bones.");
        room.enemies.insert("wolf".into(), Enemy::new("wolf", 5, 200));
        let mut world = DelveWorld::new(vec![room]).expect("world");
        let mut input = ScriptedInput::new(["quit"]);
        let mut dice = ScriptedDice::always(1);
        let ending = run_repl(&mut world, &mut input, &mut dice).expect("repl");
        assert_eq!(ending, Ending::Quit);
        assert_eq!(world.player.hp, 100);
    }

    #[test]
    fn unknown_commands_still_face_enemies() {
        let mut room = Room::new("Den", "Bones.");
        room.enemies.insert("wolf".into(), Enemy::new("wolf", 5, 200));
        let mut world = DelveWorld::new(vec![room]).expect("world");
        let mut input = ScriptedInput::new(["dance"]);
        let mut dice = ScriptedDice::always(1);
        let ending = run_repl(&mut world, &mut input, &mut dice).expect("repl");
        assert_eq!(ending, Ending::Death);
    }
}
