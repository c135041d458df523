//! # Jflyz Brain
//!
//! File: cli/src/brain/mod.rs
//!
//! ## Overview
//!
//! The rule-based responder behind the chat shell. A `Brain` turns one line of
//! conversation into one response string:
//!
//! 1. The input is appended verbatim to the conversation log.
//! 2. Learning triggers ("like"/"prefer", "idea"/"should") record tags.
//! 3. The first matching rule of the decision list (`rules`) composes the
//!    response from the fixed pools (`pools`).
//!
//! Matching is case-insensitive substring search; it is not tokenized.
//! Sampling is uniform with replacement, so consecutive calls may return the
//! same text.
//!
//! ## Examples
//!
//! ```rust
//! use jflyz::brain::{Brain, LearnedTag};
//!
//! let mut brain = Brain::new();
//! let reply = brain.process_message("Let's talk strategy for growth");
//! assert!(reply.ends_with(" Let's analyze this from multiple angles."));
//!
//! brain.process_message("I like pizza");
//! assert!(brain.has_learned(LearnedTag::Preferences));
//! assert_eq!(brain.conversation_log().len(), 2);
//! ```
//!
use rand::rngs::ThreadRng;
use rand::Rng;
use std::collections::BTreeSet;
use tracing::debug;

pub mod pools;
pub mod rules;
pub mod tags;

pub use pools::{BusinessKnowledge, Pool, KNOWLEDGE};
pub use rules::Rule;
pub use tags::LearnedTag;

/// One responder instance, owning its log and tag set for one session.
#[derive(Debug)]
pub struct Brain<R = ThreadRng> {
    rng: R,
    // Grows for the whole session; nothing is evicted.
    conversation_log: Vec<String>,
    learned_tags: BTreeSet<LearnedTag>,
}

impl Brain<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }

    /// Which rule `input` would select. No side effects.
    pub fn classify(input: &str) -> Rule {
        Rule::classify(&input.to_lowercase())
    }
}

impl Default for Brain<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Brain<R> {
    /// Creates a brain drawing its picks from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            conversation_log: Vec::new(),
            learned_tags: BTreeSet::new(),
        }
    }

    /// Records `input` and returns the response for it. Never fails: an empty
    /// input takes the default (learning) rule like any unmatched text.
    pub fn process_message(&mut self, input: &str) -> String {
        self.conversation_log.push(input.to_string());

        let lowered = input.to_lowercase();
        for tag in tags::detect(&lowered) {
            if self.learned_tags.insert(tag) {
                debug!(%tag, "Recorded new learned tag");
            }
        }

        let rule = Rule::classify(&lowered);
        debug!(%rule, turn = self.conversation_log.len(), "Selected response rule");
        rule.compose(&mut self.rng)
    }

    /// A random welcome line from the greetings pool.
    pub fn greeting(&mut self) -> String {
        Pool::Greetings.pick(&mut self.rng).to_string()
    }

    /// Every input passed to [`Brain::process_message`], in call order.
    pub fn conversation_log(&self) -> &[String] {
        &self.conversation_log
    }

    pub fn learned_tags(&self) -> &BTreeSet<LearnedTag> {
        &self.learned_tags
    }

    pub fn has_learned(&self, tag: LearnedTag) -> bool {
        self.learned_tags.contains(&tag)
    }
}
