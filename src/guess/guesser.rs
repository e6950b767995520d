//! The guesser: ranks live board words by similarity to the latest clue.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::board::Board;
use crate::clue::ClueHistory;
use crate::core::{Team, Word};
use crate::oracle::SimilarityOracle;

/// Word selector for one team.
///
/// Suggestion is pure with respect to board state: identical inputs produce
/// identical output. The guesser additionally records which words were
/// actually guessed per clue, for accuracy accounting after the game.
#[derive(Clone, Debug)]
pub struct Guesser {
    team: Team,
    /// Guessed words per clue, in guess order.
    guessed: FxHashMap<Word, Vec<Word>>,
}

impl Guesser {
    /// Create a guesser for a team.
    #[must_use]
    pub fn new(team: Team) -> Self {
        Self {
            team,
            guessed: FxHashMap::default(),
        }
    }

    /// The guesser's team.
    #[must_use]
    pub fn team(&self) -> Team {
        self.team
    }

    /// Rank live board words against the team's latest clue.
    ///
    /// Every live word is scored by similarity to the clue; out-of-vocabulary
    /// words drop out rather than failing the ranking. The result is sorted
    /// by descending similarity (stable) and truncated to the clue's intended
    /// count. Empty when the team has no clue on record.
    #[must_use]
    pub fn suggest(
        &self,
        board: &Board,
        history: &ClueHistory,
        oracle: &dyn SimilarityOracle,
    ) -> Vec<Word> {
        let Some(entry) = history.last() else {
            return Vec::new();
        };
        let budget = entry.intended.len();

        let mut scored: Vec<(Word, f32)> = board
            .live_words()
            .filter_map(|word| {
                oracle
                    .similarity(entry.clue.as_str(), word.as_str())
                    .map(|score| (word.clone(), score))
            })
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(budget);

        debug!(team = %self.team, clue = %entry.clue, suggestions = scored.len(), "guesses ranked");
        scored.into_iter().map(|(word, _)| word).collect()
    }

    /// Record a guess made under a clue.
    pub fn record_guess(&mut self, clue: &Word, guess: &Word) {
        self.guessed
            .entry(clue.clone())
            .or_default()
            .push(guess.clone());
    }

    /// Words guessed under a clue, in guess order.
    #[must_use]
    pub fn guessed_under(&self, clue: &Word) -> &[Word] {
        self.guessed.get(clue).map_or(&[], Vec::as_slice)
    }
}
