//! `repl::crafting` module
//!
//! Recipes, their ingredients, and loot chests.

use log::info;

use crate::command::{CommandError, Verb};
use crate::dice::Dice;
use crate::view::{View, ViewItem};
use crate::world::DelveWorld;

/// Craft a recipe's result out of carried ingredients. Only possible in craftable rooms.
///
/// The ingredients are used up, the recipe is kept, and the crafted thing appears
/// on the floor.
///
/// # Errors
/// - [`CommandError::MissingArgument`] if no recipe is named (checked after the room)
/// - [`CommandError::Internal`] if the player's room can't be found
pub fn craft_handler(world: &mut DelveWorld, view: &mut View, arg: Option<&str>) -> Result<(), CommandError> {
    if !world.player_room_ref()?.craftable {
        view.push(ViewItem::ActionFailure("You can't craft anything here.".to_string()));
        return Ok(());
    }
    let name = Verb::Craft.require_arg(arg)?;
    let Some(recipe) = world.player.find_recipe(name).cloned() else {
        view.push(ViewItem::ActionFailure(format!("You don't have a recipe for {name}.")));
        return Ok(());
    };
    if !world.player.has_items(&recipe.ingredients) {
        view.push(ViewItem::ActionFailure(format!(
            "You don't have everything you need to craft {name}. Needed: {}",
            recipe.ingredients.join(", ")
        )));
        return Ok(());
    }

    for ingredient in &recipe.ingredients {
        world.player.remove_item(ingredient);
    }
    let result = *recipe.result;
    info!("player crafted '{}' from '{}'", result.name(), recipe.name);
    view.push(ViewItem::ActionSuccess(format!(
        "You crafted a {}! It's on the ground, ready to pick up.",
        result.name()
    )));
    world.player_room_mut()?.complex_items.push(result);
    Ok(())
}

/// Show what a recipe needs.
pub fn ingredients_handler(world: &DelveWorld, view: &mut View, name: &str) {
    match world.player.find_recipe(name) {
        Some(recipe) => view.push(ViewItem::Ingredients(recipe.ingredients.clone())),
        None => view.push(ViewItem::ActionFailure(format!("You don't have a recipe for {name}."))),
    }
}

/// Open the room's chest and tip its draws onto the floor.
///
/// # Errors
/// - [`CommandError::Internal`] if the player's room can't be found
pub fn open_chest_handler(world: &mut DelveWorld, view: &mut View, dice: &mut dyn Dice) -> Result<(), CommandError> {
    let room = world.player_room_mut()?;
    let Some(chest) = room.chest.as_mut() else {
        view.push(ViewItem::ActionFailure("There's no chest here.".to_string()));
        return Ok(());
    };
    if chest.is_empty() {
        view.push(ViewItem::ActionFailure("Wa Wa. The chest is empty.".to_string()));
        return Ok(());
    }
    let chest_name = chest.name.clone();
    let drawn = chest.open(dice);
    info!("chest '{chest_name}' opened: {} item(s) drawn", drawn.len());
    view.push(ViewItem::ActionSuccess(format!("You open the {chest_name}...")));
    for item in &drawn {
        view.push(ViewItem::LootDropped {
            name: item.name().to_string(),
            kind: item.kind(),
        });
    }
    room.complex_items.extend(drawn);
    Ok(())
}
