//! # Jflyz Chat Shell Model
//!
//! File: cli/src/chat/mod.rs
//!
//! ## Overview
//!
//! Everything between the user's keystrokes and the brain, minus the actual
//! terminal loop (see `commands::chat`):
//!
//! - `message`: immutable `ChatMessage` records with creation timestamps
//! - `session`: `ChatSession`, the display log plus the `Brain` it feeds
//! - `render`: one-line terminal formatting of messages
//!
pub mod message;
pub mod render;
pub mod session;

pub use message::{ChatMessage, Sender};
pub use session::{ChatSession, SEED_MESSAGES};
