//! # Jflyz CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//!
//! ## Overview
//!
//! Drives `jflyz chat` through stdin and checks what the shell prints.
//! Every test points `JFLYZ_CONFIG` at its own temp file.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_chat_seed_messages_and_reply() {
    let (_dir, config) = isolated_config("[shell]\nshow_timestamps = false\n");

    jflyz_cmd()
        .arg("chat")
        .env("JFLYZ_CONFIG", &config)
        .write_stdin("hello there\n/quit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("JFLYZ AI")
                .and(predicate::str::contains("Jflyz: Memory systems: READY"))
                .and(predicate::str::contains(
                    "I'm learning from this conversation. Tell me more about your thinking.",
                ))
                .and(predicate::str::contains("Session ended after 1 turn(s).")),
        );
}

#[test]
fn test_chat_is_default_command() {
    let (_dir, config) = isolated_config("");

    jflyz_cmd()
        .env("JFLYZ_CONFIG", &config)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("What's our next move, James?"));
}

#[test]
fn test_chat_custom_labels() {
    let (_dir, config) =
        isolated_config("[shell]\nbot_label = \"Jay\"\nuser_label = \"James\"\n");

    jflyz_cmd()
        .args(["chat", "--no-timestamps"])
        .env("JFLYZ_CONFIG", &config)
        .write_stdin("our community\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("James> ")
                .and(predicate::str::contains("Jay: Our community is everything!")),
        );
}

#[test]
fn test_chat_tags_command() {
    let (_dir, config) = isolated_config("");

    jflyz_cmd()
        .arg("chat")
        .env("JFLYZ_CONFIG", &config)
        .write_stdin("I prefer black colorways\n/tags\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Learned tags: preferences"));
}

#[test]
fn test_chat_invalid_config_fails() {
    let (_dir, config) = isolated_config("[shell]\nbot_label = \"\"\n");

    jflyz_cmd()
        .arg("chat")
        .env("JFLYZ_CONFIG", &config)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Configuration validation failed"));
}

#[test]
fn test_chat_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    jflyz_cmd()
        .arg("chat")
        .env("JFLYZ_CONFIG", missing.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a readable file"));
}

#[test]
fn test_chat_config_flag() {
    let (_dir, config) =
        isolated_config("[shell]\nbot_label = \"Jay\"\nshow_timestamps = false\n");

    jflyz_cmd()
        .args(["chat", "--config", config.as_str()])
        .env_remove("JFLYZ_CONFIG")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jay: Memory systems: READY"));
}
