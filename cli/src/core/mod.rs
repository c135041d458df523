//! # Jflyz Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the command handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//!
//! ## Usage
//!
//! ```rust
//! use jflyz::core::config; // For loading configuration
//! use jflyz::core::error::{JflyzError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
