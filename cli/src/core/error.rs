//! # Jflyz Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used by the outer layers of Jflyz:
//! configuration loading, the command handlers, and terminal I/O.
//!
//! The responder itself (`crate::brain`) never fails. Every input, the
//! empty string included, maps to a response, so nothing in this module is
//! reachable from `Brain::process_message`.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `JflyzError`: A custom error enum using `thiserror` for specific error kinds
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! use jflyz::core::error::{JflyzError, Result};
//!
//! fn read_message(raw: &str) -> Result<String> {
//!     let trimmed = raw.trim();
//!     if trimmed.is_empty() {
//!         return Err(JflyzError::EmptyMessage.into());
//!     }
//!     Ok(trimmed.to_string())
//! }
//!
//! assert!(read_message("   ").is_err());
//! ```
//!
use thiserror::Error;

/// Custom error type for the Jflyz application.
#[derive(Error, Debug)]
pub enum JflyzError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Message cannot be empty.")]
    EmptyMessage,

    #[error("Terminal I/O failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
