#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const DELVE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod combat;
pub mod command;
pub mod data_paths;
pub mod dice;
pub mod enemy;
pub mod item;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use dice::{Dice, RandDice, ScriptedDice};
pub use enemy::Enemy;
pub use item::{ComplexItem, ItemKind, Key, Recipe, Spell, SpellEffect, Weapon};
pub use loader::{MapError, load_world};
pub use player::Player;
pub use repl::input::{InputEvent, InputManager, LineSource, ScriptedInput};
pub use repl::{Ending, ReplControl, run_repl};
pub use room::{Chest, Room};
pub use view::{View, ViewItem};
pub use world::DelveWorld;
