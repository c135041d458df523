//! # Jflyz One-Shot Ask
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! `jflyz ask <MESSAGE...>` sends a single message to a fresh brain and prints
//! the reply on stdout. Words are joined with spaces and trimmed, the same
//! way the chat shell trims a line. A blank message is an error, since there
//! is no shell here to silently drop it.
//!
//! ```bash
//! jflyz ask what should our next sneaker drop look like
//! jflyz ask --explain "Let's talk strategy for growth"
//! ```
//!
use crate::brain::Brain;
use crate::core::error::{JflyzError, Result};
use clap::Parser;
use tracing::debug;

/// Arguments for the `ask` command.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message to send. Multiple words are joined with spaces.
    #[arg(required = true)]
    pub message: Vec<String>,

    /// Print the name of the rule that produced the reply to stderr.
    #[arg(long)]
    pub explain: bool,
}

/// Handler for `jflyz ask`.
pub fn handle_ask(args: AskArgs) -> Result<()> {
    let joined = args.message.join(" ");
    let message = joined.trim();
    if message.is_empty() {
        return Err(JflyzError::EmptyMessage.into());
    }

    if args.explain {
        eprintln!("rule: {}", Brain::classify(message));
    }

    let mut brain = Brain::new();
    let reply = brain.process_message(message);
    debug!(tags = ?brain.learned_tags(), "Learned tags after ask");
    println!("{}", reply);
    Ok(())
}
