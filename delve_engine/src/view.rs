//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we aggregate needed information and messages
//! to be organized and displayed at the end of the turn.
use std::fmt::Write;

use colored::Colorize;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::item::ItemKind;
use crate::repl::Ending;
use crate::style::GameStyle;

const BANNER_WIDTH: usize = 50;

/// View aggregates information to be displayed on each pass through the REPL and then organizes
/// and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewItem>,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Compose the current frame as text, section by section.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for section in Section::ORDER {
            let entries: Vec<&ViewItem> = self.items.iter().filter(|i| i.section() == section).collect();
            if entries.is_empty() {
                continue;
            }
            if let Some(label) = section.label() {
                let _ = writeln!(out, "{:.>width$}\n", label.section_style(), width = self.width);
            }
            for entry in entries {
                self.render_item(&mut out, entry);
            }
            if section == Section::Threat {
                let _ = writeln!(out, "{}\n", "*".repeat(BANNER_WIDTH));
            }
        }
        out
    }

    /// Display all message contents in the current frame / turn, then clear it.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();
        if !self.items.is_empty() {
            print!("{}", self.render());
        }
        self.items.clear();
    }

    /// Returns true if any queued item renders text containing `needle` (styling ignored).
    pub fn contains_text(&self, needle: &str) -> bool {
        self.items.iter().any(|item| {
            let mut out = String::new();
            self.render_item(&mut out, item);
            strip_ansi(&out).contains(needle)
        })
    }

    fn wrap(&self, text: &str) -> String {
        fill(text, self.width.max(20))
    }

    #[allow(clippy::too_many_lines)]
    fn render_item(&self, out: &mut String, item: &ViewItem) {
        let _ = match item {
            ViewItem::PoisonTick => writeln!(out, "{}", "Enemies are affected by poison damage!".spell_style()),
            ViewItem::PoisonExpired => writeln!(out, "{}", "Your poison spell wore out!".spell_style()),
            ViewItem::RoomCleared => writeln!(out, "You snake-d your way to victory in this room!"),
            ViewItem::EnemyAttacked(name) => writeln!(out, "{} attacked you!", name.enemy_style()),
            ViewItem::EnemyMissed(name) => writeln!(out, "{} missed!", name.enemy_style()),
            ViewItem::HpLost(0) => writeln!(out, "Lucky you! You didn't lose any hp."),
            ViewItem::HpLost(amount) => writeln!(out, "{}", format!("You lost {amount} hp.").harm_style()),
            ViewItem::CurrentHp(hp) => writeln!(out, "Your current hp is: {hp}\n"),
            ViewItem::Transition(msg) => writeln!(out, "{msg}\n"),
            ViewItem::RoomHeader { name, id } => {
                let id_text = id.map(|id| format!("(ID: {id})")).unwrap_or_default();
                writeln!(out, "> {}{id_text}\n", name.room_style())
            },
            ViewItem::RoomDescription(text) => writeln!(out, "{}\n", self.wrap(text).description_style()),
            ViewItem::RoomItems { items, complex } => {
                let listed = if items.is_empty() {
                    "NA".to_string()
                } else {
                    items.iter().map(|i| i.item_style().to_string()).collect::<Vec<_>>().join(", ")
                };
                let _ = writeln!(out, "Items: {listed}");
                if !complex.is_empty() {
                    let listed = complex
                        .iter()
                        .map(|(name, kind)| format!("{} ({kind})", name.item_style()))
                        .collect::<Vec<_>>()
                        .join(", ");
                    let _ = writeln!(out, "Complex Items:\n{listed}");
                }
                writeln!(out)
            },
            ViewItem::RoomExits(exits) => {
                let listed = exits.iter().map(|e| e.exit_style().to_string()).collect::<Vec<_>>();
                writeln!(out, "Exits: {}\n", listed.join(" "))
            },
            ViewItem::ChestHere(name) => {
                let banner = "$".repeat(BANNER_WIDTH);
                writeln!(out, "{banner}\n\nThere is a {} in this room.\n\n{banner}\n", name.chest_style())
            },
            ViewItem::EnemyPresence {
                hp,
                attack_desc,
                enemies,
            } => {
                let banner = "*".repeat(BANNER_WIDTH);
                let _ = writeln!(out, "{banner}\n\nCurrent HP: {hp}\n");
                if let Some(desc) = attack_desc {
                    let _ = writeln!(out, "{}\n", self.wrap(desc));
                }
                let names = enemies.iter().map(|e| e.enemy_style().to_string()).collect::<Vec<_>>();
                writeln!(
                    out,
                    "There are the following enemies trying to attack you: {}\n\n{banner}\n",
                    names.join(", ")
                )
            },
            ViewItem::Inventory {
                items,
                recipes,
                weapons,
                spells,
                keys,
            } => {
                let _ = writeln!(out, "{}", "Inventory:".bold());
                if items.is_empty() {
                    let _ = writeln!(out, "NA");
                } else {
                    for item in items {
                        let _ = writeln!(out, "  {}", item.item_style());
                    }
                }
                for (heading, list) in [("Recipes:", recipes), ("Weapons:", weapons), ("Spells:", spells), ("Keys:", keys)] {
                    if list.is_empty() {
                        continue;
                    }
                    let _ = writeln!(out, "{}", heading.bold());
                    for name in list {
                        let _ = writeln!(out, "  {}", name.item_style());
                    }
                }
                Ok(())
            },
            ViewItem::EmptyInventory => writeln!(out, "You're not carrying anything."),
            ViewItem::Ingredients(list) => writeln!(out, "Ingredients:\n{}", list.join(", ")),
            ViewItem::Hp(hp) => writeln!(out, "Current HP: {hp}"),
            ViewItem::ActionSuccess(msg) | ViewItem::Combat(msg) => writeln!(out, "{msg}"),
            ViewItem::ActionFailure(msg) => writeln!(out, "{}", msg.italic()),
            ViewItem::EnemyKilled(name) => writeln!(out, "You killed the {}!", name.enemy_style()),
            ViewItem::LootDropped { name, kind } => writeln!(
                out,
                "You found one {kind}: `{}`!\nYou can pickup the item with the 'get' command.",
                name.item_style()
            ),
            ViewItem::EnemyWounded { name, hp } => writeln!(out, "The {} has {hp} hp left.", name.enemy_style()),
            ViewItem::SpellCast(msg) => writeln!(out, "{}", self.wrap(msg).spell_style()),
            ViewItem::Healed { amount, hp } => writeln!(
                out,
                "{}\nYou now have {hp} hp.",
                format!("You heal {amount} hp.").heal_style()
            ),
            ViewItem::Error(msg) => writeln!(out, "{}", msg.error_style()),
            ViewItem::EngineMessage(msg) => writeln!(out, "{}", msg.italic().dimmed()),
            ViewItem::GameOver(ending) => writeln!(out, "{}", self.wrap(ending.message()).ending_style()),
        };
    }
}

/// Remove ANSI escape sequences from rendered text.
fn strip_ansi(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for esc in chars.by_ref() {
                if esc.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}

/// Parts of a frame, shown in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Enemy phase at the start of a turn.
    Threat,
    Transition,
    Environment,
    DirectResult,
    System,
}
impl Section {
    const ORDER: [Section; 5] = [
        Section::Threat,
        Section::Transition,
        Section::Environment,
        Section::DirectResult,
        Section::System,
    ];

    fn label(self) -> Option<&'static str> {
        match self {
            Section::Threat => Some("enemies"),
            Section::Transition => None,
            Section::Environment => Some("scene"),
            Section::DirectResult => Some("results"),
            Section::System => Some("game"),
        }
    }
}

/// Everything a handler may want shown to the player.
#[derive(Debug, Clone, PartialEq, Variantly)]
pub enum ViewItem {
    PoisonTick,
    PoisonExpired,
    RoomCleared,
    EnemyAttacked(String),
    EnemyMissed(String),
    /// Total damage taken in an enemy phase.
    HpLost(i32),
    CurrentHp(i32),
    Transition(String),
    RoomHeader {
        name: String,
        id: Option<i64>,
    },
    RoomDescription(String),
    RoomItems {
        items: Vec<String>,
        complex: Vec<(String, ItemKind)>,
    },
    RoomExits(Vec<String>),
    ChestHere(String),
    EnemyPresence {
        hp: i32,
        attack_desc: Option<String>,
        enemies: Vec<String>,
    },
    Inventory {
        items: Vec<String>,
        recipes: Vec<String>,
        weapons: Vec<String>,
        spells: Vec<String>,
        keys: Vec<String>,
    },
    EmptyInventory,
    Ingredients(Vec<String>),
    Hp(i32),
    ActionSuccess(String),
    ActionFailure(String),
    Combat(String),
    EnemyKilled(String),
    LootDropped {
        name: String,
        kind: ItemKind,
    },
    EnemyWounded {
        name: String,
        hp: i32,
    },
    SpellCast(String),
    Healed {
        amount: i32,
        hp: i32,
    },
    Error(String),
    EngineMessage(String),
    GameOver(Ending),
}
impl ViewItem {
    pub fn section(&self) -> Section {
        match self {
            ViewItem::PoisonTick
            | ViewItem::PoisonExpired
            | ViewItem::RoomCleared
            | ViewItem::EnemyAttacked(_)
            | ViewItem::EnemyMissed(_)
            | ViewItem::HpLost(_)
            | ViewItem::CurrentHp(_) => Section::Threat,
            ViewItem::Transition(_) => Section::Transition,
            ViewItem::RoomHeader { .. }
            | ViewItem::RoomDescription(_)
            | ViewItem::RoomItems { .. }
            | ViewItem::RoomExits(_)
            | ViewItem::ChestHere(_)
            | ViewItem::EnemyPresence { .. } => Section::Environment,
            ViewItem::EngineMessage(_) | ViewItem::GameOver(_) => Section::System,
            _ => Section::DirectResult,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_render_in_fixed_order() {
        colored::control::set_override(false);
        let mut view = View::new();
        view.width = 40;
        view.push(ViewItem::ActionSuccess("You pick up the rope.".into()));
        view.push(ViewItem::EnemyAttacked("goblin".into()));
        view.push(ViewItem::HpLost(3));
        let text = view.render();
        let attack = text.find("goblin attacked you!").expect("attack line");
        let pickup = text.find("You pick up the rope.").expect("pickup line");
        assert!(attack < pickup);
        assert!(text.contains("You lost 3 hp."));
    }

    #[test]
    fn room_items_list_kinds() {
        colored::control::set_override(false);
        let mut view = View::new();
        view.push(ViewItem::RoomItems {
            items: Vec::new(),
            complex: vec![("sword".into(), ItemKind::Weapon)],
        });
        let text = view.render();
        assert!(text.contains("Items: NA"));
        assert!(text.contains("sword (weapon)"));
    }

    #[test]
    fn contains_text_ignores_styling() {
        let mut view = View::new();
        view.push(ViewItem::EnemyWounded {
            name: "troll".into(),
            hp: 4,
        });
        assert!(view.contains_text("The troll has 4 hp left."));
        view.flush();
        assert!(view.items.is_empty());
    }

    #[test]
    fn strip_ansi_removes_escapes() {
        assert_eq!(strip_ansi("\u{1b}[1;31mred\u{1b}[0m"), "red");
    }
}
