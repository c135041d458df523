//! # Jflyz Interactive Chat
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! This module implements `jflyz chat`, the interactive terminal shell. It
//! prints the header and the session's seed messages, then reads one line at
//! a time from stdin and prints the brain's reply until `/quit` or EOF.
//!
//! ## Architecture
//!
//! - `handle_chat` loads configuration and wires the real stdin/stdout.
//! - `run_repl` is the loop itself. It is generic over `BufRead`/`Write` so
//!   tests can drive it with in-memory buffers.
//! - Lines starting with `/` are shell commands (`MetaCommand`) and never
//!   reach the brain.
//!
//! ## Usage
//!
//! ```bash
//! jflyz chat
//! jflyz chat --no-timestamps
//! jflyz chat --config ./demo.toml
//! ```
//!
//! Shell commands: `/help`, `/history`, `/tags`, `/quit` (or `/exit`).
//!
use crate::chat::render::{header, render_message};
use crate::chat::ChatSession;
use crate::core::config::{self, ShellConfig, CONFIG_ENV_VAR};
use crate::core::error::{JflyzError, Result};
use clap::Parser;
use rand::Rng;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

/// Arguments for the `chat` command.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Do not prefix messages with their creation time.
    #[arg(long)]
    pub no_timestamps: bool,

    /// Configuration file to use instead of the project and user files.
    #[arg(long, env = CONFIG_ENV_VAR, value_name = "PATH")]
    pub config: Option<String>,
}

/// Shell commands recognised in the REPL.
#[derive(Debug, Clone, PartialEq, Eq)]
enum MetaCommand {
    Help,
    History,
    Tags,
    Quit,
    Unknown(String),
}

impl MetaCommand {
    /// Parses the text after the leading `/`.
    fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "help" | "?" => MetaCommand::Help,
            "history" => MetaCommand::History,
            "tags" => MetaCommand::Tags,
            "quit" | "exit" => MetaCommand::Quit,
            other => MetaCommand::Unknown(other.to_string()),
        }
    }
}

const HELP_TEXT: &str = "Commands:
  /history   show everything you've said this session
  /tags      show what Jflyz has picked up on
  /quit      end the session (also /exit or Ctrl-D)
Anything else is sent to Jflyz.";

/// Handler for `jflyz chat`.
pub fn handle_chat(args: ChatArgs) -> Result<()> {
    let mut config = config::load_config(args.config.as_deref())?;
    if args.no_timestamps {
        config.shell.show_timestamps = false;
    }

    let mut session = ChatSession::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_repl(&mut session, &config.shell, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Runs the read-reply loop until `/quit` or end of input.
pub fn run_repl<R, I, O>(
    session: &mut ChatSession<R>,
    shell: &ShellConfig,
    mut input: I,
    mut output: O,
) -> std::result::Result<(), JflyzError>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(output, "{}", header())?;
    writeln!(output, "{}", session.greeting())?;
    writeln!(output)?;
    for message in session.messages() {
        writeln!(output, "{}", render_message(message, shell))?;
    }

    loop {
        write!(output, "{}> ", shell.user_label)?;
        output.flush()?;

        let mut raw = Vec::new();
        if input.read_until(b'\n', &mut raw)? == 0 {
            writeln!(output)?;
            debug!("End of input reached");
            break;
        }

        let line = String::from_utf8_lossy(&raw);
        if let Cow::Owned(_) = line {
            warn!("Input line was not valid UTF-8; invalid bytes replaced");
        }
        let trimmed = line.trim();
        if let Some(command) = trimmed.strip_prefix('/') {
            match MetaCommand::parse(command) {
                MetaCommand::Help => writeln!(output, "{}", HELP_TEXT)?,
                MetaCommand::History => print_history(session, &mut output)?,
                MetaCommand::Tags => print_tags(session, &mut output)?,
                MetaCommand::Quit => break,
                MetaCommand::Unknown(name) => writeln!(
                    output,
                    "Unknown command '/{}'. Type /help for the list.",
                    name
                )?,
            }
            continue;
        }

        if let Some(reply) = session.send(trimmed) {
            writeln!(output, "{}", render_message(reply, shell))?;
        }
    }

    info!(turns = session.turns(), "Chat session ended");
    writeln!(output, "Session ended after {} turn(s).", session.turns())?;
    output.flush()?;
    Ok(())
}

fn print_history<R: Rng, O: Write>(session: &ChatSession<R>, output: &mut O) -> io::Result<()> {
    let log = session.brain().conversation_log();
    if log.is_empty() {
        return writeln!(output, "Nothing said yet.");
    }
    for (index, entry) in log.iter().enumerate() {
        writeln!(output, "{:>3}. {}", index + 1, entry)?;
    }
    Ok(())
}

fn print_tags<R: Rng, O: Write>(session: &ChatSession<R>, output: &mut O) -> io::Result<()> {
    let tags = session.brain().learned_tags();
    if tags.is_empty() {
        return writeln!(output, "No tags learned yet.");
    }
    let names: Vec<_> = tags.iter().map(|tag| tag.name()).collect();
    writeln!(output, "Learned tags: {}", names.join(", "))
}
