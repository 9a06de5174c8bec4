//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn item_style(&self) -> ColoredString;
    fn enemy_style(&self) -> ColoredString;
    fn room_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn exit_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn harm_style(&self) -> ColoredString;
    fn heal_style(&self) -> ColoredString;
    fn spell_style(&self) -> ColoredString;
    fn chest_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
    fn ending_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.truecolor(75, 80, 75)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn enemy_style(&self) -> ColoredString {
        self.truecolor(230, 80, 80).bold()
    }
    fn room_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn exit_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn harm_style(&self) -> ColoredString {
        self.truecolor(200, 50, 50)
    }
    fn heal_style(&self) -> ColoredString {
        self.truecolor(13, 200, 60)
    }
    fn spell_style(&self) -> ColoredString {
        self.italic().truecolor(190, 110, 250)
    }
    fn chest_style(&self) -> ColoredString {
        self.bold().truecolor(230, 200, 30)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(150, 150, 150)
    }
    fn ending_style(&self) -> ColoredString {
        self.bold().truecolor(230, 230, 30)
    }
}

impl GameStyle for String {
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn enemy_style(&self) -> ColoredString {
        self.as_str().enemy_style()
    }
    fn room_style(&self) -> ColoredString {
        self.as_str().room_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn exit_style(&self) -> ColoredString {
        self.as_str().exit_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn harm_style(&self) -> ColoredString {
        self.as_str().harm_style()
    }
    fn heal_style(&self) -> ColoredString {
        self.as_str().heal_style()
    }
    fn spell_style(&self) -> ColoredString {
        self.as_str().spell_style()
    }
    fn chest_style(&self) -> ColoredString {
        self.as_str().chest_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn ending_style(&self) -> ColoredString {
        self.as_str().ending_style()
    }
}
