//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location, or open the
//! way to one.

use anyhow::{Result, anyhow};
use log::info;

use crate::repl::look::show_room;
use crate::view::{View, ViewItem};
use crate::world::DelveWorld;

/// Move the player through the named exit, unless the room beyond is locked.
///
/// # Errors
/// - if the player's room or the exit's destination can't be found
pub fn go_handler(world: &mut DelveWorld, view: &mut View, direction: &str) -> Result<()> {
    let direction = direction.to_lowercase();
    let Some(&destination) = world.player_room_ref()?.exits.get(&direction) else {
        view.push(ViewItem::ActionFailure(format!("There's no way to go {direction}.")));
        return Ok(());
    };
    let room = world
        .room(destination)
        .ok_or_else(|| anyhow!("invalid move destination ({destination})"))?;
    if room.locked {
        let hint = room
            .required_key
            .as_ref()
            .map(|key| format!(" You'll need the {key}."))
            .unwrap_or_default();
        view.push(ViewItem::ActionFailure(format!("The way {direction} is locked.{hint}")));
        info!("player tried to enter locked room '{}'", room.name);
        return Ok(());
    }

    info!("player moved {direction} to '{}' ({destination})", room.name);
    view.push(ViewItem::Transition(format!("You go {direction}...")));
    show_room(room, world.player.hp, view);
    world.location = destination;
    Ok(())
}

/// Unlock the room beyond a locked exit with a key whose id pair matches the way through.
///
/// # Errors
/// - if the player's room or the exit's destination can't be found
pub fn unlock_handler(world: &mut DelveWorld, view: &mut View, direction: &str) -> Result<()> {
    let here = world.player_room_ref()?;
    let Some(&destination) = here.exits.get(direction) else {
        view.push(ViewItem::ActionFailure("Exit does not exist".to_string()));
        return Ok(());
    };
    if !here.is_exit_locked(direction) {
        view.push(ViewItem::ActionFailure("Exit is not locked".to_string()));
        return Ok(());
    }
    let from = here.id;
    let target = world
        .room(destination)
        .ok_or_else(|| anyhow!("invalid unlock destination ({destination})"))?;
    if !target.locked {
        view.push(ViewItem::ActionFailure(format!("The {direction} is already unlocked")));
        return Ok(());
    }
    let to = target.id;

    let Some(key) = world.player.keys.iter().find(|key| key.opens(from, to)) else {
        view.push(ViewItem::ActionFailure(format!(
            "You don't have the key to unlock the {direction}"
        )));
        return Ok(());
    };
    let key_name = key.name.clone();
    if let Some(target) = world.room_mut(destination) {
        target.locked = false;
    }
    info!("player unlocked '{direction}' with '{key_name}'");
    view.push(ViewItem::ActionSuccess(format!(
        "You unlock the {direction} with the key: {key_name}"
    )));
    Ok(())
}
