//! The main REPL implementation.

use std::fmt::Write as _;

use warband_catalog::{CatalogEntry, Lookup, UnitType};
use warband_foundation::{Error, Result, Tag};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::serialize;
use crate::session::Session;

/// Settings file written by `:save` when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "settings.msgpack";

/// The interactive REPL.
///
/// Every line is either a `:command` or an army blueprint. Blueprints are
/// built against the session's unit catalog and echoed back in canonical
/// and compact form, followed by whatever the build had to say.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (catalogs, settings).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Cleared by `:quit`.
    running: bool,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "army> ".to_string(),
            running: true,
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self.refresh_names();
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Hands every unit name to the editor for completion.
    pub fn refresh_names(&mut self) {
        let names = self
            .session
            .units()
            .iter()
            .flat_map(|unit| unit.names.iter().cloned())
            .collect();
        self.editor.set_names(names);
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }
        self.refresh_names();

        while self.running {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Some(output)) => println!("{output}"),
            Ok(None) => {}
            Err(e) => print_error(&e),
        }
        Ok(true)
    }

    /// Evaluates one line and returns the text to show, if any.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands, bad arguments, or a failed
    /// `:save`.
    pub fn eval(&mut self, line: &str) -> Result<Option<String>> {
        let line = line.trim();
        match line.strip_prefix(':') {
            Some(command) => self.eval_command(command),
            None => Ok(Some(self.eval_blueprint(line))),
        }
    }

    fn eval_blueprint(&mut self, text: &str) -> String {
        let army = self.session.evaluate(text);
        let mut out = String::new();
        for warning in self.session.drain_warnings() {
            let _ = writeln!(out, "! {warning}");
        }
        if army.is_empty() {
            out.push_str("empty");
        } else {
            let _ = write!(
                out,
                "{army}\n= {} ({} units)",
                army.to_compact_string(),
                army.count_units()
            );
        }
        out
    }

    fn eval_command(&mut self, command: &str) -> Result<Option<String>> {
        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        let output = match name {
            "help" | "h" => HELP.to_string(),
            "units" => list(self.session.units().iter().map(describe_unit)),
            "leaders" => list(self.session.units().leaders().map(describe_unit)),
            "camps" => list(self.session.camps().iter().map(|camp| {
                format!(
                    "{} ({} hp, {}% reduction)",
                    camp.first_name(),
                    camp.hit_points,
                    camp.damage_reduction
                )
            })),
            "adventures" => list(self.session.adventures().iter().map(|adventure| adventure.summary())),
            "find" => self.find(arg)?,
            "strict" => {
                let on = parse_switch(name, arg)?;
                self.session.settings_mut().build.strict = on;
                format!("strict {}", on_off(on))
            }
            "coerce" => {
                let on = parse_switch(name, arg)?;
                self.session.settings_mut().build.coerce_factions = on;
                format!("coerce {}", on_off(on))
            }
            "leader" => {
                let on = parse_switch(name, arg)?;
                self.session.settings_mut().build.require_leader = on;
                format!("leader {}", on_off(on))
            }
            "save" => {
                let path = self
                    .session
                    .resolve_path(if arg.is_empty() { DEFAULT_SETTINGS_FILE } else { arg });
                serialize::save_to_file(self.session.settings(), &path)?;
                format!("Saved settings to {}", path.display())
            }
            "quit" | "q" => {
                self.running = false;
                return Ok(None);
            }
            other => {
                return Err(Error::usage(format!("unknown command :{other} (try :help)")));
            }
        };
        Ok(Some(output))
    }

    fn find(&mut self, query: &str) -> Result<String> {
        if query.is_empty() {
            return Err(Error::usage(":find requires a name"));
        }

        let mut out = match self.session.find_unit(query) {
            Lookup::Found(unit) => describe_unit(unit),
            Lookup::Ambiguous { suggestions, .. } | Lookup::NotFound { suggestions } => {
                if suggestions.is_empty() {
                    format!("No unit matches {query:?}.")
                } else {
                    format!("Suggestions: {}", suggestions.join(", "))
                }
            }
        };
        let warnings = self.session.drain_warnings();
        if !warnings.is_empty() {
            out = format!("! {}\n{out}", warnings.join("\n! "));
        }
        Ok(out)
    }

    fn print_banner(&self) {
        println!(
            "\x1b[1mWarband\x1b[0m v{} ({} units, {} camps, {} adventures)",
            env!("CARGO_PKG_VERSION"),
            self.session.units().len(),
            self.session.camps().len(),
            self.session.adventures().len()
        );
        println!("Type an army like \x1b[1m1 Nusala 50 recruits\x1b[0m, or :help.");
        println!();
    }
}

const HELP: &str = "\
<qty> <name> ...     Build an army, e.g. 1 Nusala 50 recruits 10 archers
:units               List unit types
:leaders             List generals
:camps               List camps
:adventures          List adventures
:find <name>         Look a unit up by fuzzy name
:strict on|off       Only suggest single-faction alternatives
:coerce on|off       Retry mixed-faction armies one faction at a time
:leader on|off       Warn about armies without a general
:save [path]         Save settings
:quit                Exit";

fn describe_unit(unit: &UnitType) -> String {
    format!(
        "{:>4}  {} [{}] ({})",
        unit.id,
        unit.names.join(", "),
        unit.shortest_name(),
        unit.faction.name()
    )
}

fn list<I: Iterator<Item = String>>(lines: I) -> String {
    let lines: Vec<String> = lines.collect();
    if lines.is_empty() {
        "(none)".to_string()
    } else {
        lines.join("\n")
    }
}

fn parse_switch(command: &str, arg: &str) -> Result<bool> {
    match arg {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(Error::usage(format!(":{command} expects on or off, got {arg:?}"))),
    }
}

const fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}
