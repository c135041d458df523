//! # Response Rules
//!
//! File: cli/src/brain/rules.rs
//!
//! ## Overview
//!
//! The responder's decision list. Rules are evaluated top-down against the
//! lowercased input and the first rule with a matching trigger substring
//! wins. `Learning` has no triggers and is the default.
//!
//! | Priority | Rule        | Triggers (any)                     |
//! |----------|-------------|------------------------------------|
//! | 1        | `Business`  | store, business, jamesflyzone      |
//! | 2        | `Product`   | product, sneaker, design           |
//! | 3        | `Community` | customer, client, community        |
//! | 4        | `Strategic` | strategy, plan, growth             |
//! | 5        | `Learning`  | (none matched)                     |
//!
use super::pools::{Pool, KNOWLEDGE, LEARNING_SUFFIX, STRATEGIC_SUFFIX};
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Business,
    Product,
    Community,
    Strategic,
    Learning,
}

/// Rules in evaluation order.
pub const DECISION_LIST: [Rule; 5] = [
    Rule::Business,
    Rule::Product,
    Rule::Community,
    Rule::Strategic,
    Rule::Learning,
];

impl Rule {
    pub fn triggers(self) -> &'static [&'static str] {
        match self {
            Rule::Business => &["store", "business", "jamesflyzone"],
            Rule::Product => &["product", "sneaker", "design"],
            Rule::Community => &["customer", "client", "community"],
            Rule::Strategic => &["strategy", "plan", "growth"],
            Rule::Learning => &[],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::Business => "business",
            Rule::Product => "product",
            Rule::Community => "community",
            Rule::Strategic => "strategic",
            Rule::Learning => "learning",
        }
    }

    /// First rule in [`DECISION_LIST`] whose triggers occur in `lowered`.
    /// Expects already-lowercased input.
    pub fn classify(lowered: &str) -> Rule {
        DECISION_LIST
            .into_iter()
            .find(|rule| rule.triggers().iter().any(|t| lowered.contains(t)))
            .unwrap_or(Rule::Learning)
    }

    /// Builds this rule's response, drawing fresh picks from `rng`.
    pub fn compose<R: Rng + ?Sized>(self, rng: &mut R) -> String {
        match self {
            Rule::Business => format!(
                "{} {}",
                Pool::BusinessStrategies.pick(rng),
                Pool::Enthusiastic.pick(rng)
            ),
            Rule::Product => format!(
                "{} {}",
                Pool::ProductIdeas.pick(rng),
                Pool::Enthusiastic.pick(rng)
            ),
            Rule::Community => format!(
                "Our community is everything! {}. How can we serve them better?",
                KNOWLEDGE.target
            ),
            Rule::Strategic => format!("{} {}", Pool::Strategic.pick(rng), STRATEGIC_SUFFIX),
            Rule::Learning => format!("{} {}", Pool::Enthusiastic.pick(rng), LEARNING_SUFFIX),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
