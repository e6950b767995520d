//! Board construction, tag assignment, and reveals.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, GameRng, Tag, Team, Word};
use crate::oracle::SimilarityOracle;

/// Words on a full board.
pub const BOARD_SIZE: usize = 25;

/// Red words on a full board.
pub const RED_WORDS: usize = 8;
/// Blue words on a full board. Blue moves first and carries the extra word.
pub const BLUE_WORDS: usize = 9;
/// Neutral words on a full board.
pub const NEUTRAL_WORDS: usize = 7;
/// Assassin words on a full board.
pub const ASSASSIN_WORDS: usize = 1;

/// One board position: a word, its hidden tag, and whether it was revealed.
///
/// The slot stays in place after a reveal; a revealed slot is the positional
/// sentinel that keeps the 5×5 layout and indices stable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    word: Word,
    tag: Tag,
    revealed: bool,
}

impl Slot {
    /// The slot's word.
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// The slot's hidden tag.
    #[must_use]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Whether the slot has been revealed.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// The word grid with hidden tag assignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    slots: Vec<Slot>,
}

impl Board {
    /// Deal a full 25-word board from a word pool.
    ///
    /// Pool words are lowercased, deduplicated, and filtered to the oracle's
    /// vocabulary; 25 survivors are sampled with `rng` and partitioned
    /// 8 red / 9 blue / 7 neutral / 1 assassin.
    ///
    /// # Errors
    ///
    /// [`EngineError::InsufficientWords`] when fewer than 25 pool words are
    /// in the oracle's vocabulary.
    pub fn deal(
        pool: &[&str],
        oracle: &dyn SimilarityOracle,
        rng: &mut GameRng,
    ) -> Result<Self, EngineError> {
        let mut seen = rustc_hash::FxHashSet::default();
        let candidates: Vec<Word> = pool
            .iter()
            .map(|raw| Word::new(raw))
            .filter(|word| oracle.contains(word.as_str()))
            .filter(|word| seen.insert(word.clone()))
            .collect();

        if candidates.len() < BOARD_SIZE {
            return Err(EngineError::InsufficientWords {
                available: candidates.len(),
                needed: BOARD_SIZE,
            });
        }

        let mut words = rng.sample(&candidates, BOARD_SIZE);
        rng.shuffle(&mut words);

        let mut slots = Vec::with_capacity(BOARD_SIZE);
        for (i, word) in words.into_iter().enumerate() {
            let tag = match i {
                i if i < RED_WORDS => Tag::Red,
                i if i < RED_WORDS + BLUE_WORDS => Tag::Blue,
                i if i < RED_WORDS + BLUE_WORDS + NEUTRAL_WORDS => Tag::Neutral,
                _ => Tag::Assassin,
            };
            slots.push(Slot {
                word,
                tag,
                revealed: false,
            });
        }
        // Tags were assigned by position in the sampled order; shuffle slots
        // so the grid layout does not leak the assignment
        rng.shuffle(&mut slots);

        Ok(Self { slots })
    }

    /// Build a board from an explicit tag assignment.
    ///
    /// Counts are not validated, so harnesses and tests can set up boards
    /// smaller than the full 25 words. Duplicate words are rejected.
    pub fn from_assignment(
        red: &[&str],
        blue: &[&str],
        neutral: &[&str],
        assassin: &[&str],
    ) -> Result<Self, EngineError> {
        let tagged = [
            (Tag::Red, red),
            (Tag::Blue, blue),
            (Tag::Neutral, neutral),
            (Tag::Assassin, assassin),
        ];

        let mut seen = rustc_hash::FxHashSet::default();
        let mut slots = Vec::new();
        for (tag, words) in tagged {
            for raw in words {
                let word = Word::new(raw);
                if !seen.insert(word.clone()) {
                    return Err(EngineError::InsufficientWords {
                        available: seen.len(),
                        needed: seen.len() + 1,
                    });
                }
                slots.push(Slot {
                    word,
                    tag,
                    revealed: false,
                });
            }
        }

        Ok(Self { slots })
    }

    /// All slots in grid order, revealed or not.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Live (unrevealed) words in grid order.
    pub fn live_words(&self) -> impl Iterator<Item = &Word> {
        self.slots.iter().filter(|s| !s.revealed).map(|s| &s.word)
    }

    /// Live words carrying the given tag.
    #[must_use]
    pub fn tag_words(&self, tag: Tag) -> Vec<&Word> {
        self.slots
            .iter()
            .filter(|s| !s.revealed && s.tag == tag)
            .map(|s| &s.word)
            .collect()
    }

    /// Live words belonging to a team.
    #[must_use]
    pub fn team_words(&self, team: Team) -> Vec<&Word> {
        self.tag_words(team.tag())
    }

    /// Live words a team's clue must avoid: enemy, neutral, and assassin.
    #[must_use]
    pub fn taboo_words(&self, team: Team) -> Vec<&Word> {
        self.slots
            .iter()
            .filter(|s| !s.revealed && s.tag != team.tag())
            .map(|s| &s.word)
            .collect()
    }

    /// Whether a word is on the board and unrevealed.
    #[must_use]
    pub fn is_live(&self, word: &str) -> bool {
        self.slots
            .iter()
            .any(|s| !s.revealed && s.word == word)
    }

    /// Number of live words belonging to a team.
    #[must_use]
    pub fn remaining(&self, team: Team) -> u8 {
        self.tag_words(team.tag()).len() as u8
    }

    /// Reveal a word, returning its tag.
    ///
    /// Returns `None` when the word is not on the board or already revealed
    /// (the invalid-reveal no-op: board state is unchanged). A word can be
    /// revealed at most once.
    pub fn reveal(&mut self, word: &str) -> Option<Tag> {
        let slot = self
            .slots
            .iter_mut()
            .find(|s| !s.revealed && s.word == word)?;
        slot.revealed = true;
        Some(slot.tag)
    }
}
