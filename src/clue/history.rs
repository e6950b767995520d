//! Per-team clue history.
//!
//! Insertion-ordered record of every clue a team's spymaster has given and
//! which board words each clue intended. The guesser reads the latest entry
//! for its guess budget; the spymaster never re-issues a recorded clue.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Word;

/// One clue with its accumulated intended words.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueEntry {
    /// The clue word.
    pub clue: Word,
    /// Board words the clue pointed at. At most 3 per round.
    pub intended: SmallVec<[Word; 3]>,
}

/// Ordered clue record for one team.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueHistory {
    entries: Vec<ClueEntry>,
}

impl ClueHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a clue with its intended words.
    ///
    /// A clue already on record accumulates the new intended words instead
    /// of creating a second entry.
    pub fn add(&mut self, clue: Word, intended: &[Word]) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.clue == clue) {
            for word in intended {
                if !entry.intended.contains(word) {
                    entry.intended.push(word.clone());
                }
            }
        } else {
            self.entries.push(ClueEntry {
                clue,
                intended: intended.iter().cloned().collect(),
            });
        }
    }

    /// Whether a clue word has been given before.
    #[must_use]
    pub fn contains(&self, clue: &str) -> bool {
        self.entries.iter().any(|e| e.clue == clue)
    }

    /// The most recent clue entry.
    #[must_use]
    pub fn last(&self) -> Option<&ClueEntry> {
        self.entries.last()
    }

    /// All entries in the order the clues were given.
    pub fn iter(&self) -> impl Iterator<Item = &ClueEntry> {
        self.entries.iter()
    }

    /// Number of distinct clues given.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no clue has been given yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
