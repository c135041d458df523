//! # Chat Session
//!
//! File: cli/src/chat/session.rs
//!
//! ## Overview
//!
//! The presentation-independent half of the chat shell. A `ChatSession` owns
//! the visible message log and the `Brain` for one conversation. Any front end
//! (the terminal REPL in `commands::chat`, or something else) drives it
//! through [`ChatSession::send`] and reads [`ChatSession::messages`].
//!
//! Input is trimmed before it reaches the brain; blank input is dropped
//! without touching either log. Each accepted send appends exactly two
//! messages: the user's text, then the response.
//!
use super::message::ChatMessage;
use crate::brain::Brain;
use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, info};

/// Bot messages shown when a session starts.
pub const SEED_MESSAGES: &[&str] = &[
    "🧠 Jflyz Advanced Brain Activated",
    "JamesFlyzone Strategic Partner Online",
    "Memory systems: READY",
    "What's our next move, James?",
];

#[derive(Debug)]
pub struct ChatSession<R = ThreadRng> {
    brain: Brain<R>,
    messages: Vec<ChatMessage>,
}

impl ChatSession<ThreadRng> {
    pub fn new() -> Self {
        Self::with_brain(Brain::new())
    }
}

impl Default for ChatSession<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ChatSession<R> {
    /// Starts a session around an existing brain, seeding the display log.
    pub fn with_brain(brain: Brain<R>) -> Self {
        let messages = SEED_MESSAGES
            .iter()
            .map(|text| ChatMessage::from_bot(*text))
            .collect();
        info!("Chat session started");
        Self { brain, messages }
    }

    /// Sends one line of user input. Returns the bot's reply, or `None` when
    /// the input was blank and nothing happened.
    pub fn send(&mut self, raw: &str) -> Option<&ChatMessage> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            debug!("Discarding blank input");
            return None;
        }

        self.messages.push(ChatMessage::from_user(trimmed));
        let response = self.brain.process_message(trimmed);
        self.messages.push(ChatMessage::from_bot(response));
        self.messages.last()
    }

    /// A welcome line from the brain's greetings pool. Not added to the log.
    pub fn greeting(&mut self) -> String {
        self.brain.greeting()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn brain(&self) -> &Brain<R> {
        &self.brain
    }

    /// Number of completed user/bot exchanges.
    pub fn turns(&self) -> usize {
        self.brain.conversation_log().len()
    }
}
