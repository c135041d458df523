//! # Response Pools and Business Knowledge
//!
//! File: cli/src/brain/pools.rs
//!
//! Fixed, hand-authored strings the responder samples from. Everything here
//! is `'static` and immutable for the lifetime of the process.
//!
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Returned by [`pick`] if a pool ever turned out to be empty.
pub const FALLBACK_PICK: &str = "Let's build!";

/// Appended after a strategic pick.
pub const STRATEGIC_SUFFIX: &str = "Let's analyze this from multiple angles.";

/// Appended after an enthusiastic pick when no rule matched.
pub const LEARNING_SUFFIX: &str =
    "I'm learning from this conversation. Tell me more about your thinking.";

pub const GREETINGS: &[&str] = &[
    "Ayo! Jflyz in the system 🚀",
    "What's good? Ready to build?",
    "Yo! The future is now 💫",
    "Hey! Let's make moves!",
];

pub const ENTHUSIASTIC: &[&str] = &[
    "Let's build! 🔥",
    "That's the vision! ⚡",
    "Exactly! We moving different 🎯",
    "Now we're talking! 🚀",
];

pub const STRATEGIC: &[&str] = &[
    "How can we scale that idea?",
    "Let's think long-term on this",
    "What's the bigger picture here?",
    "How does this fit our 5-year vision?",
];

pub const BUSINESS_STRATEGIES: &[&str] = &[
    "Limited drops create hype - let's plan our next exclusive release ⚡",
    "Community events could really strengthen our brand presence 🎯",
    "Our social media needs to tell the authentic JamesFlyzone story 📱",
    "Collaborations with local artists could be fire for growth 🔥",
];

pub const PRODUCT_IDEAS: &[&str] = &[
    "I'm tracking trends for our next limited edition sneaker drop",
    "Our premium streetwear line could use some fresh designs",
    "Accessories like exclusive collectibles are perfect for brand expansion",
    "The market is ready for something new from JamesFlyzone",
];

/// Named response categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    Greetings,
    Enthusiastic,
    Strategic,
    BusinessStrategies,
    ProductIdeas,
}

impl Pool {
    pub const ALL: [Pool; 5] = [
        Pool::Greetings,
        Pool::Enthusiastic,
        Pool::Strategic,
        Pool::BusinessStrategies,
        Pool::ProductIdeas,
    ];

    pub fn entries(self) -> &'static [&'static str] {
        match self {
            Pool::Greetings => GREETINGS,
            Pool::Enthusiastic => ENTHUSIASTIC,
            Pool::Strategic => STRATEGIC,
            Pool::BusinessStrategies => BUSINESS_STRATEGIES,
            Pool::ProductIdeas => PRODUCT_IDEAS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pool::Greetings => "greetings",
            Pool::Enthusiastic => "enthusiastic",
            Pool::Strategic => "strategic",
            Pool::BusinessStrategies => "business strategies",
            Pool::ProductIdeas => "product ideas",
        }
    }

    /// Uniform pick with replacement.
    pub fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> &'static str {
        pick(self.entries(), rng)
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Selects one entry uniformly at random, or [`FALLBACK_PICK`] for an empty pool.
pub fn pick<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or(FALLBACK_PICK)
}

/// Static facts about JamesFlyzone the responder can quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessKnowledge {
    pub mission: &'static str,
    pub values: &'static [&'static str],
    pub target: &'static str,
}

pub const KNOWLEDGE: BusinessKnowledge = BusinessKnowledge {
    mission: "Elevating street culture through exclusive gear and authentic community building",
    values: &[
        "Quality",
        "Exclusivity",
        "Community",
        "Innovation",
        "Authenticity",
    ],
    target: "Trendsetters aged 18-35 who value exclusivity and cultural authenticity",
};
