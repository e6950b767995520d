//! Board and clue words.
//!
//! A [`Word`] is a lowercase token. Construction normalizes case so that
//! oracle lookups, history keys, and board membership all compare the same
//! way regardless of how the source list was capitalized.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// A lowercase word token.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Create a word, normalizing to lowercase.
    #[must_use]
    pub fn new(token: &str) -> Self {
        Self(token.to_lowercase())
    }

    /// The word as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a single clean token: non-empty, alphanumeric only.
    ///
    /// Embedding vocabularies carry multi-word entries (`new_york`), sense
    /// suffixes, and punctuation-bearing tokens; none of those are legal
    /// Codenames clues.
    #[must_use]
    pub fn is_clean_token(&self) -> bool {
        !self.0.is_empty() && self.0.chars().all(|c| c.is_alphanumeric())
    }

    /// Whether either word is a substring of the other.
    ///
    /// Used to reject trivial clues like "oceans" for "ocean".
    #[must_use]
    pub fn overlaps(&self, other: &Word) -> bool {
        self.0.contains(&other.0) || other.0.contains(&self.0)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Word {
    fn from(token: &str) -> Self {
        Word::new(token)
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
