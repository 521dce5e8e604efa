//! Console Output
//!
//! The [`Presenter`] trait is the seam between the round and whatever shows
//! it to the human. [`ConsolePresenter`] writes the line-oriented protocol:
//!
//! ```text
//! HMAC: 3f1c...
//! Available moves:
//! 1 - Rock
//! 2 - Paper
//! 3 - Scissors
//! 0 - exit
//! ? - help
//! Enter your move:
//! ```

use std::io::{self, Write};

use crate::game::{InvalidChoice, Prompt, RoundDisclosure, RulesTable};

/// Receives everything the round wants the human to see.
pub trait Presenter {
    /// Show the digest and the move menu.
    fn prompt(&mut self, prompt: &Prompt) -> io::Result<()>;

    /// Ask for one line of input.
    fn ask(&mut self) -> io::Result<()>;

    /// Show the rules table.
    fn help(&mut self, table: &RulesTable) -> io::Result<()>;

    /// Explain why input was rejected.
    fn invalid(&mut self, error: &InvalidChoice) -> io::Result<()>;

    /// Show both moves, the outcome, and the key.
    fn resolved(&mut self, disclosure: &RoundDisclosure) -> io::Result<()>;

    /// Confirm the round was abandoned.
    fn aborted(&mut self) -> io::Result<()>;
}

/// Writes the protocol to any `Write` (stdout in the binary).
#[derive(Debug)]
pub struct ConsolePresenter<W> {
    out: W,
    json: bool,
}

impl<W: Write> ConsolePresenter<W> {
    /// Plain-text presenter.
    pub fn new(out: W) -> Self {
        Self { out, json: false }
    }

    /// Print the resolution as a JSON record instead of text lines.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn prompt(&mut self, prompt: &Prompt) -> io::Result<()> {
        writeln!(self.out, "HMAC: {}", prompt.digest_hex)?;
        writeln!(self.out, "Available moves:")?;
        for (number, label) in &prompt.menu {
            writeln!(self.out, "{} - {}", number, label)?;
        }
        writeln!(self.out, "{} - exit", prompt.exit_token)?;
        writeln!(self.out, "{} - help", prompt.help_token)
    }

    fn ask(&mut self) -> io::Result<()> {
        write!(self.out, "Enter your move: ")?;
        self.out.flush()
    }

    fn help(&mut self, table: &RulesTable) -> io::Result<()> {
        writeln!(self.out, "Rules (row move against column move):")?;
        write!(self.out, "{}", table)
    }

    fn invalid(&mut self, error: &InvalidChoice) -> io::Result<()> {
        writeln!(self.out, "{}", error)
    }

    fn resolved(&mut self, disclosure: &RoundDisclosure) -> io::Result<()> {
        if self.json {
            serde_json::to_writer_pretty(&mut self.out, disclosure)?;
            return writeln!(self.out);
        }

        writeln!(self.out, "Your move: {}", disclosure.human_move)?;
        writeln!(self.out, "Computer move: {}", disclosure.automated_move)?;
        writeln!(self.out, "Result: {}", disclosure.outcome)?;
        writeln!(self.out, "HMAC key: {}", disclosure.key)
    }

    fn aborted(&mut self) -> io::Result<()> {
        writeln!(self.out, "Exit")
    }
}
