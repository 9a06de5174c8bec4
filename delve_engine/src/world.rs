//! Data structures representing the game world.
//!
//! This module defines [`DelveWorld`], the complete state of a running session:
//! the room graph, the player, where the player stands, and any spell still in effect.

use anyhow::{Result, anyhow};
use log::info;

use crate::combat::ActiveSpell;
use crate::loader::MapError;
use crate::player::Player;
use crate::room::Room;

/// Complete state of the running game.
///
/// Created once from the loaded map and then mutated throughout play. The player's
/// location is an index into `rooms`; the first room is where play begins.
#[derive(Debug, Clone)]
pub struct DelveWorld {
    pub rooms: Vec<Room>,
    pub player: Player,
    pub location: usize,
    /// At most one multi-turn spell (rage or poison) is tracked at a time.
    pub spell_effect: Option<ActiveSpell>,
    pub turn_count: usize,
}
impl DelveWorld {
    /// Build a world from its rooms, placing the player in the first one.
    ///
    /// # Errors
    /// - if `rooms` is empty
    pub fn new(rooms: Vec<Room>) -> Result<DelveWorld, MapError> {
        if rooms.is_empty() {
            return Err(MapError::Empty);
        }
        let has_enemies = rooms.iter().any(Room::has_enemies);
        let world = DelveWorld {
            player: Player::new(has_enemies),
            rooms,
            location: 0,
            spell_effect: None,
            turn_count: 0,
        };
        info!(
            "new DelveWorld created with {} rooms (enemies present: {has_enemies})",
            world.rooms.len()
        );
        Ok(world)
    }

    /// Obtain a reference to the room the player occupies.
    /// # Errors
    /// - if the player's location index is out of range
    pub fn player_room_ref(&self) -> Result<&Room> {
        self.rooms
            .get(self.location)
            .ok_or_else(|| anyhow!("player's room index ({}) not found in world", self.location))
    }

    /// Obtain a mutable reference to the room the player occupies.
    /// # Errors
    /// - if the player's location index is out of range
    pub fn player_room_mut(&mut self) -> Result<&mut Room> {
        let location = self.location;
        self.rooms
            .get_mut(location)
            .ok_or_else(|| anyhow!("player's room index ({location}) not found in world"))
    }

    pub fn room(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    pub fn room_mut(&mut self, index: usize) -> Option<&mut Room> {
        self.rooms.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::Enemy;
    use crate::player::Capacity;

    #[test]
    fn empty_room_list_is_a_map_error() {
        assert!(matches!(DelveWorld::new(Vec::new()), Err(MapError::Empty)));
    }

    #[test]
    fn enemies_anywhere_shape_the_player() {
        let mut lair = Room::new("Lair", "Dark.");
        lair.enemies.insert("rat".into(), Enemy::new("rat", 2, 1));
        let world = DelveWorld::new(vec![Room::new("Start", "Quiet."), lair]).expect("world");
        assert_eq!(world.player.capacity, Capacity::Limited(10));
        assert_eq!(world.player.weapons.len(), 1);
        assert_eq!(world.player_room_ref().expect("room").name, "Start");
    }

    #[test]
    fn peaceful_world_has_unbounded_player() {
        let world = DelveWorld::new(vec![Room::new("Start", "Quiet.")]).expect("world");
        assert_eq!(world.player.capacity, Capacity::Unbounded);
        assert!(world.player.weapons.is_empty());
    }
}
