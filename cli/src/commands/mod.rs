//! # Jflyz Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the `jflyz` CLI. Each
//! command defines its own clap arguments struct and a handler function that
//! `main.rs` routes to.
//!
//! ## Commands
//!
//! - `chat`: Interactive terminal chat with Jflyz (the default)
//! - `ask`: Send one message and print the reply
//! - `knowledge`: Show the static business knowledge and response pools
//!

/// Interactive REPL over a `ChatSession`.
pub mod chat;

/// One-shot message/reply.
pub mod ask;

/// Business knowledge and pool listing.
pub mod knowledge;
