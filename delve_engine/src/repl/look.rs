//! `repl::look` module
//!
//! Handlers that only report on the world: the room, its floor, the player's pack and health.

use anyhow::Result;

use crate::room::Room;
use crate::view::{View, ViewItem};
use crate::world::DelveWorld;

/// Describe the current room in full.
///
/// # Errors
/// - if the player's room can't be found
pub fn look_handler(world: &DelveWorld, view: &mut View) -> Result<()> {
    let room = world.player_room_ref()?;
    show_room(room, world.player.hp, view);
    Ok(())
}

/// Push everything the player sees on entering `room`.
pub fn show_room(room: &Room, player_hp: i32, view: &mut View) {
    view.push(ViewItem::RoomHeader {
        name: room.name.clone(),
        id: room.id,
    });
    view.push(ViewItem::RoomDescription(room.description.clone()));
    if room.has_floor_items() {
        push_room_items(room, view);
    }
    view.push(ViewItem::RoomExits(room.exit_names()));
    if let Some(chest) = &room.chest {
        view.push(ViewItem::ChestHere(chest.name.clone()));
    }
    if room.has_enemies() {
        view.push(ViewItem::EnemyPresence {
            hp: player_hp,
            attack_desc: room.enemy_attack_desc.clone(),
            enemies: room.enemy_names(),
        });
    }
}

fn push_room_items(room: &Room, view: &mut View) {
    view.push(ViewItem::RoomItems {
        items: room.items.clone(),
        complex: room
            .complex_items
            .iter()
            .map(|item| (item.name().to_string(), item.kind()))
            .collect(),
    });
}

/// List what's lying around in the current room.
///
/// # Errors
/// - if the player's room can't be found
pub fn items_handler(world: &DelveWorld, view: &mut View) -> Result<()> {
    push_room_items(world.player_room_ref()?, view);
    Ok(())
}

pub fn inventory_handler(world: &DelveWorld, view: &mut View) {
    let player = &world.player;
    if player.is_carrying_nothing() {
        view.push(ViewItem::EmptyInventory);
        return;
    }
    view.push(ViewItem::Inventory {
        items: player.items.clone(),
        recipes: player.recipes.iter().map(|r| r.name.clone()).collect(),
        weapons: player.weapons.iter().map(|w| w.name.clone()).collect(),
        spells: player.spells.iter().map(|s| s.name.clone()).collect(),
        keys: player.keys.iter().map(|k| k.name.clone()).collect(),
    });
}

pub fn hp_handler(world: &DelveWorld, view: &mut View) {
    view.push(ViewItem::Hp(world.player.hp));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::Enemy;
    use crate::item::{ComplexItem, ItemKind, Weapon};

    #[test]
    fn look_shows_enemies_with_player_hp() {
        let mut room = Room::new("Crypt", "Cold stone.");
        room.id = Some(4);
        room.exits.insert("up".into(), 0);
        room.enemy_attack_desc = Some("Skeletons rattle toward you.".into());
        room.enemies.insert("skeleton".into(), Enemy::new("skeleton", 3, 2));
        let world = DelveWorld::new(vec![room]).expect("world");
        let mut view = View::new();
        look_handler(&world, &mut view).expect("look");
        assert!(view.items.contains(&ViewItem::RoomHeader {
            name: "Crypt".into(),
            id: Some(4)
        }));
        assert!(view.contains_text("Current HP: 100"));
        assert!(view.contains_text("skeleton"));
        assert!(!view.items.iter().any(ViewItem::is_room_items));
    }

    #[test]
    fn items_lists_complex_kinds() {
        let mut room = Room::new("Armory", "Racks.");
        room.complex_items.push(ComplexItem::Weapon(Weapon::punch()));
        let world = DelveWorld::new(vec![room]).expect("world");
        let mut view = View::new();
        items_handler(&world, &mut view).expect("items");
        assert_eq!(
            view.items,
            vec![ViewItem::RoomItems {
                items: Vec::new(),
                complex: vec![("punch".into(), ItemKind::Weapon)],
            }]
        );
    }

    #[test]
    fn empty_pack_is_reported() {
        let world = DelveWorld::new(vec![Room::new("Void", "Nothing.")]).expect("world");
        let mut view = View::new();
        inventory_handler(&world, &mut view);
        hp_handler(&world, &mut view);
        assert_eq!(view.items, vec![ViewItem::EmptyInventory, ViewItem::Hp(100)]);
    }
}
