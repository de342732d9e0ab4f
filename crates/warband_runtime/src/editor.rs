//! Line editor abstraction for the REPL.
//!
//! This module provides a trait-based abstraction over line editing libraries,
//! allowing the REPL to use rustyline while remaining swappable (and testable
//! with scripted input).

use std::borrow::Cow;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};
use warband_foundation::{Error, ErrorKind, Result};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set the unit names offered for completion.
    fn set_names(&mut self, names: Vec<String>);
}

/// REPL commands offered for completion.
pub const COMMANDS: &[&str] = &[
    ":help",
    ":units",
    ":leaders",
    ":camps",
    ":adventures",
    ":find",
    ":strict",
    ":coerce",
    ":leader",
    ":save",
    ":quit",
];

/// Byte offset where the fragment being completed starts.
///
/// For a command that is the whole line; for a blueprint it is the name
/// following the last quantity.
#[must_use]
pub fn completion_start(line: &str) -> usize {
    if line.starts_with(':') {
        return line.rfind(' ').map_or(0, |i| i + 1);
    }
    let Some(last_digit) = line.rfind(|c: char| c.is_ascii_digit()) else {
        return 0;
    };
    let after = last_digit + 1;
    after + (line[after..].len() - line[after..].trim_start().len())
}

/// Completions for `line`, as `(start, candidates)`.
#[must_use]
pub fn complete(line: &str, names: &[String]) -> (usize, Vec<String>) {
    let start = completion_start(line);
    let fragment = &line[start..];

    if start == 0 && line.starts_with(':') {
        let commands = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(fragment))
            .map(|cmd| (*cmd).to_string())
            .collect();
        return (start, commands);
    }

    let fragment = fragment.to_lowercase();
    let candidates = names
        .iter()
        .filter(|name| name.to_lowercase().starts_with(&fragment))
        .cloned()
        .collect();
    (start, candidates)
}

/// Completer for commands and unit names.
struct WarbandCompleter {
    names: Vec<String>,
}

impl Completer for WarbandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, candidates) = complete(&line[..pos], &self.names);
        let pairs = candidates
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();
        Ok((start, pairs))
    }
}

/// Helper for rustyline that provides completion, hints, and prompt color.
#[derive(Helper, Completer, Hinter, Validator)]
struct WarbandHelper {
    #[rustyline(Completer)]
    completer: WarbandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for WarbandHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<WarbandHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = WarbandHelper {
            completer: WarbandCompleter { names: Vec::new() },
            hinter: HistoryHinter::new(),
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            tracing::debug!(error = %e, "history entry dropped");
        }
    }

    fn set_names(&mut self, names: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.names = names;
        }
    }
}
