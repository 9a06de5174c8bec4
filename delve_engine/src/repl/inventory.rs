//! `repl::inventory` module
//!
//! Handlers that move things between the room floor and the player's pack.

use log::info;

use crate::command::CommandError;
use crate::view::{View, ViewItem};
use crate::world::DelveWorld;

/// Pick up one thing by name. Plain items are checked before complex ones.
///
/// # Errors
/// - [`CommandError::CapacityExceeded`] if the pack is full
/// - [`CommandError::Internal`] if the player's room can't be found
pub fn get_handler(world: &mut DelveWorld, view: &mut View, name: &str) -> Result<(), CommandError> {
    let name = name.to_lowercase();
    let DelveWorld {
        rooms, player, location, ..
    } = world;
    let room = rooms
        .get_mut(*location)
        .ok_or_else(|| anyhow::anyhow!("player's room index ({location}) not found in world"))?;

    if room.items.contains(&name) {
        if !player.can_pick_item() {
            return Err(CommandError::CapacityExceeded);
        }
        if let Some(item) = room.take_item(&name) {
            info!("player picked up '{item}'");
            view.push(ViewItem::ActionSuccess(format!("You picked up the {item}.")));
            player.pick_item(item);
        }
        return Ok(());
    }

    if let Some(item) = room.find_complex_item(&name) {
        if !player.can_pick_complex_item(item) {
            return Err(CommandError::CapacityExceeded);
        }
        if let Some(item) = room.take_complex_item(&name) {
            info!("player picked up {} '{}'", item.kind(), item.name());
            view.push(ViewItem::ActionSuccess(format!(
                "You picked up the {} ({}).",
                item.name(),
                item.kind()
            )));
            player.pick_complex_item(item);
        }
        return Ok(());
    }

    view.push(ViewItem::ActionFailure(format!("There's no {name} anywhere.")));
    Ok(())
}

/// Pick up everything on the floor that fits.
///
/// Plain items go first, in order, until the pack is full; then every complex item
/// that can still be carried (recipes and keys always can). Whatever was picked up
/// stays picked up even if something had to be left behind.
///
/// # Errors
/// - [`CommandError::CapacityExceeded`] if anything was left on the floor
/// - [`CommandError::Internal`] if the player's room can't be found
pub fn get_all_handler(world: &mut DelveWorld, view: &mut View) -> Result<(), CommandError> {
    let DelveWorld {
        rooms, player, location, ..
    } = world;
    let room = rooms
        .get_mut(*location)
        .ok_or_else(|| anyhow::anyhow!("player's room index ({location}) not found in world"))?;

    if !room.has_floor_items() {
        view.push(ViewItem::ActionFailure("There's nothing here to pick up.".to_string()));
        return Ok(());
    }

    let mut picked = Vec::new();
    while !room.items.is_empty() && player.can_pick_item() {
        let item = room.items.remove(0);
        picked.push(item.clone());
        player.pick_item(item);
    }

    let mut left = Vec::new();
    for item in std::mem::take(&mut room.complex_items) {
        if player.can_pick_complex_item(&item) {
            picked.push(item.name().to_string());
            player.pick_complex_item(item);
        } else {
            left.push(item);
        }
    }
    room.complex_items = left;

    if !picked.is_empty() {
        info!("player picked up {} things", picked.len());
        view.push(ViewItem::ActionSuccess(format!("You picked up: {}", picked.join(", "))));
    }
    if room.has_floor_items() {
        return Err(CommandError::CapacityExceeded);
    }
    Ok(())
}

/// Put something from the pack down on the floor.
///
/// # Errors
/// - [`CommandError::Internal`] if the player's room can't be found
pub fn drop_handler(world: &mut DelveWorld, view: &mut View, name: &str) -> Result<(), CommandError> {
    let DelveWorld {
        rooms, player, location, ..
    } = world;
    let room = rooms
        .get_mut(*location)
        .ok_or_else(|| anyhow::anyhow!("player's room index ({location}) not found in world"))?;

    if player.remove_item(name) {
        room.items.push(name.to_string());
    } else if let Some(item) = player.remove_complex_item(name) {
        room.complex_items.push(item);
    } else if player.get_key(name).is_some() {
        view.push(ViewItem::ActionFailure(format!("You can't drop the {name}. Keys stay with you.")));
        return Ok(());
    } else {
        view.push(ViewItem::ActionFailure(format!("You don't have any {name}.")));
        return Ok(());
    }
    info!("player dropped '{name}' in '{}'", room.name);
    view.push(ViewItem::ActionSuccess(format!("You dropped the {name}.")));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::Enemy;
    use crate::item::{ComplexItem, Key, Recipe};
    use crate::room::Room;

    fn hostile_world(items: &[&str], complex: Vec<ComplexItem>) -> DelveWorld {
        let mut room = Room::new("Store", "Shelves.");
        room.items = items.iter().map(|s| (*s).to_string()).collect();
        room.complex_items = complex;
        let mut lair = Room::new("Lair", "Teeth.");
        lair.enemies.insert("rat".into(), Enemy::new("rat", 1, 1));
        DelveWorld::new(vec![room, lair]).expect("world")
    }

    fn recipe() -> ComplexItem {
        ComplexItem::Recipe(Recipe {
            name: "torch_recipe".into(),
            ingredients: vec!["stick".into(), "rag".into()],
            result: Box::new(ComplexItem::Item("torch".into())),
        })
    }

    #[test]
    fn get_lowercases_and_prefers_plain_items() {
        let mut world = hostile_world(&["rope"], Vec::new());
        let mut view = View::new();
        get_handler(&mut world, &mut view, "ROPE").expect("get");
        assert_eq!(world.player.items, vec!["rope".to_string()]);
        assert!(world.rooms[0].items.is_empty());
        get_handler(&mut world, &mut view, "rope").expect("get");
        assert!(view.contains_text("There's no rope anywhere."));
    }

    #[test]
    fn full_pack_still_takes_recipes() {
        let stones: Vec<String> = (0..9).map(|n| format!("stone{n}")).collect();
        let names: Vec<&str> = stones.iter().map(String::as_str).collect();
        let mut world = hostile_world(&names, vec![recipe()]);
        world.rooms[0].items.push("gem".into());
        let mut view = View::new();
        let result = get_all_handler(&mut world, &mut view);
        assert!(matches!(result, Err(CommandError::CapacityExceeded)));
        // punch plus nine stones fills the pack
        assert_eq!(world.player.total_items(), 10);
        assert_eq!(world.rooms[0].items, vec!["gem".to_string()]);
        assert_eq!(world.player.recipes.len(), 1);
        assert!(matches!(
            get_handler(&mut world, &mut view, "gem"),
            Err(CommandError::CapacityExceeded)
        ));
    }

    #[test]
    fn drop_returns_things_to_the_floor() {
        let mut world = hostile_world(&["rope"], vec![recipe()]);
        let mut view = View::new();
        get_all_handler(&mut world, &mut view).expect("get all");
        drop_handler(&mut world, &mut view, "torch_recipe").expect("drop");
        drop_handler(&mut world, &mut view, "rope").expect("drop");
        assert_eq!(world.rooms[0].items, vec!["rope".to_string()]);
        assert_eq!(world.rooms[0].complex_items, vec![recipe()]);
        assert!(world.player.recipes.is_empty());
    }

    #[test]
    fn keys_cannot_be_dropped() {
        let mut world = hostile_world(&[], Vec::new());
        world.player.pick_key(Key {
            name: "brass key".into(),
            from: 1,
            to: 2,
        });
        let mut view = View::new();
        drop_handler(&mut world, &mut view, "brass key").expect("drop");
        assert_eq!(world.player.keys.len(), 1);
        assert!(world.rooms[0].complex_items.is_empty());
    }
}
