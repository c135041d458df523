//! # Jflyz CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each `.rs` file in
//! `cli/tests/` is compiled as its own test crate and pulls this in with
//! `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// # Get Jflyz Command (`jflyz_cmd`)
///
/// An `assert_cmd::Command` for the compiled `jflyz` binary.
///
/// ## Panics
/// Panics if the `jflyz` binary cannot be found via `Command::cargo_bin`.
pub fn jflyz_cmd() -> Command {
    Command::cargo_bin("jflyz").expect("Failed to find jflyz binary for testing")
}

/// # Isolated Config (`isolated_config`)
///
/// Writes `contents` to a `config.toml` in a fresh temp dir. Point
/// `JFLYZ_CONFIG` at the returned path so tests ignore any user or project
/// configuration on the machine running them. Keep the `TempDir` alive for
/// the duration of the test.
pub fn isolated_config(contents: &str) -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir for config");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).expect("Failed to write test config");
    let path = path_string(&path);
    (dir, path)
}

fn path_string(path: &Path) -> String {
    path.to_str().expect("temp path is valid UTF-8").to_string()
}
