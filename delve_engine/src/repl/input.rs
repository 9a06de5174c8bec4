//! Terminal input handling for the Delve REPL.
//!
//! Wraps rustyline configuration and completion tailored to the engine's command
//! table, with a plain stdin fallback and a scripted source for tests.

use std::collections::VecDeque;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::COMMAND_TABLE;

/// Replies to a yes/no prompt that count as "no". An empty reply does too.
pub const NEGATIVE_REPLIES: &[&str] = &["n", "no", "false", "f", "0", "nope"];

/// Outcome of reading a line from the REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Anything the REPL can read player input from.
pub trait LineSource {
    /// Show `prompt` and read one line, without its line ending.
    ///
    /// # Errors
    /// - on an unrecoverable I/O failure
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent>;
}

/// Ask a yes/no question. Anything but a negative or empty reply is a yes;
/// end of input or Ctrl-C count as no.
///
/// # Errors
/// - if the input source fails
pub fn confirm(input: &mut dyn LineSource, prompt: &str) -> io::Result<bool> {
    match input.read_line(prompt)? {
        InputEvent::Line(reply) => Ok(is_affirmative(&reply)),
        InputEvent::Eof | InputEvent::Interrupted => Ok(false),
    }
}

fn is_affirmative(reply: &str) -> bool {
    let reply = reply.trim().to_lowercase();
    !reply.is_empty() && !NEGATIVE_REPLIES.contains(&reply.as_str())
}

type ReplEditor = rustyline::Editor<DelveHelper, DefaultHistory>;

#[derive(Default)]
struct DelveHelper;

impl Helper for DelveHelper {}

impl Completer for DelveHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        // only the command word is completed
        if prefix.is_empty() || prefix.contains(char::is_whitespace) {
            return Ok((start, Vec::new()));
        }
        Ok((start, command_completions(&prefix.to_lowercase())))
    }
}

impl Hinter for DelveHelper {
    type Hint = String;
}

impl Highlighter for DelveHelper {}

impl Validator for DelveHelper {}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_string())
}

fn command_completions(lower: &str) -> Vec<Pair> {
    let mut terms: Vec<&str> = COMMAND_TABLE.keys().copied().filter(|t| t.starts_with(lower)).collect();
    terms.sort_unstable();
    terms
        .into_iter()
        .map(|term| Pair {
            display: term.to_string(),
            replacement: term.to_string(),
        })
        .collect()
}

/// Helper responsible for managing the interactive input backend.
///
/// Prefers `rustyline` when an interactive terminal is available, falling back to
/// a basic stdin reader otherwise.
pub struct InputManager {
    backend: Backend,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        let backend = if io::stdin().is_terminal() {
            match RustylineInput::new() {
                Ok(editor) => {
                    info!("using rustyline-backed REPL input");
                    Backend::Rustyline(editor)
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };

        Self { backend }
    }

    /// Always read from plain stdin, with no line editing or history.
    pub fn plain() -> Self {
        Self {
            backend: Backend::plain(),
        }
    }
}

impl LineSource for InputManager {
    /// Read a line from the current backend. If the interactive backend reports an
    /// unrecoverable error, switch to the plain stdin backend and retry once.
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) => {
                if self.backend.is_rustyline() {
                    warn!("rustyline input failed: {err} -- switching to basic stdin");
                    self.backend = Backend::plain();
                    self.backend.read_line(prompt)
                } else {
                    Err(err)
                }
            },
        }
    }
}

enum Backend {
    Rustyline(RustylineInput),
    Plain(StdinInput),
}

impl Backend {
    fn plain() -> Self {
        Backend::Plain(StdinInput::default())
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => editor.read_line(prompt),
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

struct RustylineInput {
    editor: ReplEditor,
    history_path: Option<PathBuf>,
}

impl RustylineInput {
    fn new() -> io::Result<Self> {
        let mut editor = ReplEditor::new().map_err(map_io_err)?;
        editor.set_helper(Some(DelveHelper));
        let history_path = history_file_path();

        if let Some(path) = history_path.as_ref() {
            if let Some(dir) = path.parent() {
                if let Err(err) = fs::create_dir_all(dir) {
                    warn!("failed to create history directory {}: {err}", dir.display());
                }
            }
            match editor.load_history(path) {
                Ok(()) => {},
                Err(ReadlineError::Io(ref io_err)) if io_err.kind() == io::ErrorKind::NotFound => {
                    info!("no prior history found at {}, starting fresh", path.display());
                },
                Err(other) => warn!("failed to load history from {}: {other}", path.display()),
            }
        }

        Ok(Self { editor, history_path })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                        warn!("failed to append to history: {err}");
                    }
                    if let Some(path) = self.history_path.as_ref() {
                        if let Err(err) = self.editor.save_history(path) {
                            warn!("failed to persist history to {}: {err}", path.display());
                        }
                    }
                }
                Ok(InputEvent::Line(line))
            },
            Err(err) => convert_readline_error(err),
        }
    }
}

#[derive(Default)]
struct StdinInput {
    buffer: String,
}

impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }
        let line = self.buffer.trim_end_matches(['\n', '\r']);
        Ok(InputEvent::Line(line.to_string()))
    }
}

/// Lines supplied up front. Reports end of input once they run out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    /// Prompts shown so far, in order.
    pub prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front().map_or(InputEvent::Eof, InputEvent::Line))
    }
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

fn map_io_err(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| build_history_path(&base))
}

fn build_history_path(base: &Path) -> PathBuf {
    let mut path = base.to_path_buf();
    path.push("delve");
    path.push("history.txt");
    path
}
