//! # Jflyz CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Top-level behavior of the `jflyz` binary: standard flags, the `ask` and
//! `knowledge` commands, and error reporting.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    jflyz_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat").and(predicate::str::contains("ask")));
}

#[test]
fn test_version_flag() {
    jflyz_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_ask_strategy() {
    jflyz_cmd()
        .args(["ask", "Let's", "talk", "strategy", "for", "growth"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            " Let's analyze this from multiple angles.\n",
        ));
}

#[test]
fn test_ask_community_is_fixed() {
    jflyz_cmd()
        .args(["ask", "How do we reach more customers?"])
        .assert()
        .success()
        .stdout(
            "Our community is everything! Trendsetters aged 18-35 who value exclusivity \
             and cultural authenticity. How can we serve them better?\n",
        );
}

#[test]
fn test_ask_explain_prints_rule() {
    jflyz_cmd()
        .args(["ask", "--explain", "business product"])
        .assert()
        .success()
        .stderr(predicate::str::contains("rule: business"));
}

#[test]
fn test_ask_blank_message_fails() {
    jflyz_cmd()
        .args(["ask", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Message cannot be empty."));
}

#[test]
fn test_ask_requires_message() {
    jflyz_cmd().arg("ask").assert().failure();
}

#[test]
fn test_knowledge() {
    jflyz_cmd()
        .arg("knowledge")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Mission: Elevating street culture through exclusive gear",
        ));
}
