//! # Learned Tags
//!
//! File: cli/src/brain/tags.rs
//!
//! Markers recorded when an input mentions a learning trigger. A tag carries
//! no payload: its presence only says the trigger was seen at least once.
//!
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LearnedTag {
    Preferences,
    Ideas,
}

impl LearnedTag {
    pub const ALL: [LearnedTag; 2] = [LearnedTag::Preferences, LearnedTag::Ideas];

    /// Substrings that record this tag.
    pub fn triggers(self) -> &'static [&'static str] {
        match self {
            LearnedTag::Preferences => &["like", "prefer"],
            LearnedTag::Ideas => &["idea", "should"],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LearnedTag::Preferences => "preferences",
            LearnedTag::Ideas => "ideas",
        }
    }
}

impl fmt::Display for LearnedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tags whose triggers occur in `lowered`. Expects already-lowercased input.
pub fn detect(lowered: &str) -> impl Iterator<Item = LearnedTag> + '_ {
    LearnedTag::ALL
        .into_iter()
        .filter(move |tag| tag.triggers().iter().any(|t| lowered.contains(t)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_both_tags_independently() {
        let found: Vec<_> = detect("i like this idea").collect();
        assert_eq!(found, vec![LearnedTag::Preferences, LearnedTag::Ideas]);

        let found: Vec<_> = detect("we should ship").collect();
        assert_eq!(found, vec![LearnedTag::Ideas]);

        assert_eq!(detect("hello there").count(), 0);
    }

    #[test]
    fn substring_not_word_match() {
        // "likely" contains "like"; matching is not tokenized.
        let found: Vec<_> = detect("likely soon").collect();
        assert_eq!(found, vec![LearnedTag::Preferences]);
    }
}
