//! # Chat Messages
//!
//! File: cli/src/chat/message.rs
//!
use chrono::{DateTime, Local};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One entry of the display log. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    text: String,
    is_from_user: bool,
    created_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn from_user(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    pub fn from_bot(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    fn new(text: impl Into<String>, is_from_user: bool) -> Self {
        Self {
            text: text.into(),
            is_from_user,
            created_at: Local::now(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_from_user(&self) -> bool {
        self.is_from_user
    }

    pub fn sender(&self) -> Sender {
        if self.is_from_user {
            Sender::User
        } else {
            Sender::Bot
        }
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}
