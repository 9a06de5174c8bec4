//! Command module
//!
//! Turns a raw input line into a [`Command`]: the first whitespace-delimited token picks
//! the [`Verb`] from a fixed table, and for verbs that take one, everything after it is
//! the argument.
use std::collections::HashMap;
use std::fmt::Display;

use lazy_static::lazy_static;
use thiserror::Error;
use variantly::Variantly;

lazy_static! {
    /// Every recognized command token, built once.
    pub static ref COMMAND_TABLE: HashMap<&'static str, Verb> =
        Verb::ALL.iter().map(|verb| (verb.token(), *verb)).collect();
}

/// Recognized command verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Variantly)]
pub enum Verb {
    Quit,
    Look,
    Inventory,
    Items,
    GetAll,
    OpenChest,
    Hp,
    Get,
    Drop,
    Go,
    Punch,
    Attack,
    Craft,
    Unlock,
    Ingredients,
    Use,
}

/// Whether a verb stands alone or takes the rest of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Zero,
    One,
}

impl Verb {
    pub const ALL: [Verb; 16] = [
        Verb::Quit,
        Verb::Look,
        Verb::Inventory,
        Verb::Items,
        Verb::GetAll,
        Verb::OpenChest,
        Verb::Hp,
        Verb::Get,
        Verb::Drop,
        Verb::Go,
        Verb::Punch,
        Verb::Attack,
        Verb::Craft,
        Verb::Unlock,
        Verb::Ingredients,
        Verb::Use,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Verb::Quit => "quit",
            Verb::Look => "look",
            Verb::Inventory => "inventory",
            Verb::Items => "items",
            Verb::GetAll => "get_all",
            Verb::OpenChest => "open_chest",
            Verb::Hp => "hp",
            Verb::Get => "get",
            Verb::Drop => "drop",
            Verb::Go => "go",
            Verb::Punch => "punch",
            Verb::Attack => "attack",
            Verb::Craft => "craft",
            Verb::Unlock => "unlock",
            Verb::Ingredients => "ingredients",
            Verb::Use => "use",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Verb::Quit | Verb::Look | Verb::Inventory | Verb::Items | Verb::GetAll | Verb::OpenChest | Verb::Hp => {
                Arity::Zero
            },
            _ => Arity::One,
        }
    }

    /// Unwrap the argument of a one-argument command, or explain what is missing.
    ///
    /// # Errors
    /// - [`CommandError::MissingArgument`] if `arg` is absent
    pub fn require_arg(self, arg: Option<&str>) -> Result<&str, CommandError> {
        arg.ok_or_else(|| {
            let object = match self {
                Verb::Go => "somewhere",
                Verb::Attack => "someone with something",
                Verb::Punch => "someone",
                _ => "something",
            };
            CommandError::MissingArgument(format!("Sorry, you need to '{self}' {object}."))
        })
    }
}
impl Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: Verb,
    /// The trimmed remainder of the line, if the verb takes one and anything was given.
    pub arg: Option<String>,
}
impl Command {
    pub fn arg(&self) -> Option<&str> {
        self.arg.as_deref()
    }
}

/// Recoverable problems with a command. Reported to the player; the game goes on.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Please enter a command.")]
    Empty,
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("{0}")]
    MissingArgument(String),
    #[error("You can't carry any more items.")]
    CapacityExceeded,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Parse a line of input.
///
/// The leading token is matched case-insensitively. Anything after a zero-argument
/// verb is ignored; for one-argument verbs the rest of the line is kept verbatim
/// (apart from trimming), spaces and all.
///
/// # Errors
/// - [`CommandError::Empty`] for a blank line
/// - [`CommandError::Unknown`] if the leading token isn't a command
pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CommandError::Empty);
    }
    let (token, rest) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
    let verb = *COMMAND_TABLE
        .get(token.to_lowercase().as_str())
        .ok_or_else(|| CommandError::Unknown(token.to_string()))?;
    let rest = rest.trim();
    let arg = match verb.arity() {
        Arity::One if !rest.is_empty() => Some(rest.to_string()),
        _ => None,
    };
    Ok(Command { verb, arg })
}

/// Split `enemy:weapon`, trimming both parts. Either part may come back empty.
///
/// # Errors
/// - [`CommandError::MissingArgument`] if there's no colon
pub fn split_attack_target(arg: &str) -> Result<(&str, &str), CommandError> {
    match arg.split_once(':') {
        Some((enemy, weapon)) => Ok((enemy.trim(), weapon.trim())),
        None => Err(CommandError::MissingArgument(format!(
            "Sorry, you need to 'attack' {} with something.",
            arg.trim()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_holds_every_verb() {
        assert_eq!(COMMAND_TABLE.len(), Verb::ALL.len());
        for verb in Verb::ALL {
            assert_eq!(COMMAND_TABLE.get(verb.token()), Some(&verb));
        }
    }

    #[test]
    fn one_argument_keeps_spaces() {
        let cmd = parse_command("  get   rusty old key  ").expect("parse");
        assert_eq!(cmd.verb, Verb::Get);
        assert_eq!(cmd.arg(), Some("rusty old key"));
    }

    #[test]
    fn zero_argument_ignores_trailing_words() {
        let cmd = parse_command("LOOK around").expect("parse");
        assert_eq!(cmd.verb, Verb::Look);
        assert_eq!(cmd.arg, None);
    }

    #[test]
    fn unknown_and_empty_lines_are_errors() {
        assert!(matches!(parse_command("dance wildly"), Err(CommandError::Unknown(t)) if t == "dance"));
        assert!(matches!(parse_command("   "), Err(CommandError::Empty)));
        assert_eq!(
            parse_command("xyzzy").err().map(|e| e.to_string()),
            Some("Unknown command: xyzzy".to_string())
        );
    }

    #[test]
    fn missing_argument_messages() {
        let cmd = parse_command("go").expect("parse");
        let err = cmd.verb.require_arg(cmd.arg()).expect_err("no direction");
        assert_eq!(err.to_string(), "Sorry, you need to 'go' somewhere.");
        let err = Verb::Craft.require_arg(None).expect_err("no recipe");
        assert_eq!(err.to_string(), "Sorry, you need to 'craft' something.");
    }

    #[test]
    fn attack_target_needs_a_colon() {
        assert_eq!(split_attack_target(" goblin : punch ").expect("split"), ("goblin", "punch"));
        let err = split_attack_target("goblin").expect_err("no weapon");
        assert_eq!(err.to_string(), "Sorry, you need to 'attack' goblin with something.");
        assert_eq!(split_attack_target("goblin:").expect("split"), ("goblin", ""));
        assert_eq!(split_attack_target(":punch").expect("split"), ("", "punch"));
    }
}
