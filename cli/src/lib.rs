//! # Jflyz Library
//!
//! File: cli/src/lib.rs
//!
//! The library half of the `jflyz` crate. It exposes the responder (`brain`),
//! the presentation-independent chat session model (`chat`), the command
//! handlers used by the binary (`commands`), and shared infrastructure
//! (`core`). Integration tests in `cli/tests/` use these modules directly.
//!

pub mod brain;
pub mod chat;
pub mod commands;
pub mod core;
