//! `repl::system` module
//!
//! Session-level commands.

use log::info;

use crate::repl::{Ending, ReplControl};
use crate::world::DelveWorld;

/// Leave the game.
pub fn quit_handler(world: &DelveWorld) -> ReplControl {
    info!(
        "player quit after {} turn(s) with {} hp",
        world.turn_count, world.player.hp
    );
    ReplControl::End(Ending::Quit)
}
