//! The spymaster: greedy heuristic clue generation.
//!
//! ## Algorithm
//!
//! 1. Build a candidate vocabulary from the oracle's neighbors of every
//!    unrevealed team word, filtered down to clean, non-trivial, in-vocabulary
//!    tokens that are not themselves live board words.
//! 2. Score each unused candidate: sum of similarities to team words minus
//!    sum of similarities to taboo words.
//! 3. Take the highest score (lexicographic tie-break), then derive the
//!    intended word set by scanning similarity gaps among the top-ranked
//!    team words.
//!
//! Greedy by design: the best clue for this round, not a plan for the game.

use smallvec::SmallVec;
use tracing::debug;

use crate::board::Board;
use crate::core::{EngineConfig, EngineError, Team, Word};
use crate::oracle::SimilarityOracle;

use super::ClueHistory;

/// Most words a single clue may intend.
const MAX_INTENDED: usize = 3;

/// Clue generator for one team.
#[derive(Clone, Debug)]
pub struct Spymaster {
    team: Team,
    config: EngineConfig,
}

impl Spymaster {
    /// Create a spymaster for a team.
    #[must_use]
    pub fn new(team: Team, config: EngineConfig) -> Self {
        Self { team, config }
    }

    /// The spymaster's team.
    #[must_use]
    pub fn team(&self) -> Team {
        self.team
    }

    /// Produce a clue and its intended count, recording both in `history`.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoClueAvailable`] when every candidate was filtered
    /// out, already used as a clue, or unscorable.
    pub fn give_clue(
        &self,
        board: &Board,
        history: &mut ClueHistory,
        oracle: &dyn SimilarityOracle,
    ) -> Result<(Word, usize), EngineError> {
        let team_words = board.team_words(self.team);
        let taboo_words = board.taboo_words(self.team);

        let candidates = self.candidate_vocabulary(&team_words, &taboo_words, oracle);
        let clue = Self::pick_clue(&candidates, &team_words, &taboo_words, history, oracle)
            .ok_or(EngineError::NoClueAvailable { team: self.team })?;

        let intended = Self::intended_words(
            &clue,
            &team_words,
            oracle,
            self.config.cosine_sim_difference,
        );
        let count = intended.len();
        debug!(team = %self.team, clue = %clue, count, "clue selected");

        history.add(clue.clone(), &intended);
        Ok((clue, count))
    }

    /// Collect candidate clues: oracle neighbors of each team word, filtered.
    ///
    /// A candidate survives only if it is in the oracle's vocabulary, is a
    /// single alphanumeric token, neither contains nor is contained in any
    /// team word, and is not itself a live taboo word. First occurrence wins
    /// on duplicates.
    fn candidate_vocabulary(
        &self,
        team_words: &[&Word],
        taboo_words: &[&Word],
        oracle: &dyn SimilarityOracle,
    ) -> Vec<Word> {
        let mut seen = rustc_hash::FxHashSet::default();
        let mut vocabulary = Vec::new();

        for team_word in team_words {
            for candidate in oracle.most_similar(team_word.as_str(), self.config.topn) {
                if !oracle.contains(candidate.as_str()) {
                    continue;
                }
                if !candidate.is_clean_token() {
                    continue;
                }
                if team_words.iter().any(|t| candidate.overlaps(t)) {
                    continue;
                }
                // A neighbor can be a live enemy, neutral, or assassin word;
                // no board word is a legal clue
                if taboo_words.iter().any(|t| candidate == **t) {
                    continue;
                }
                if seen.insert(candidate.clone()) {
                    vocabulary.push(candidate);
                }
            }
        }

        vocabulary
    }

    /// Greedy scan for the best-scoring unused candidate.
    ///
    /// Ties break to the lexicographically smaller word so the choice does
    /// not depend on candidate collection order.
    fn pick_clue(
        candidates: &[Word],
        team_words: &[&Word],
        taboo_words: &[&Word],
        history: &ClueHistory,
        oracle: &dyn SimilarityOracle,
    ) -> Option<Word> {
        let mut best: Option<(Word, f32)> = None;

        for candidate in candidates {
            if history.contains(candidate.as_str()) {
                continue;
            }
            // An unscorable candidate (oracle miss on any pair) is skipped,
            // not fatal
            let Some(score) = Self::score_candidate(candidate, team_words, taboo_words, oracle)
            else {
                continue;
            };

            let better = match &best {
                None => true,
                Some((best_word, best_score)) => {
                    score > *best_score || (score == *best_score && candidate < best_word)
                }
            };
            if better {
                best = Some((candidate.clone(), score));
            }
        }

        best.map(|(word, _)| word)
    }

    /// Candidate score: Σ sim(candidate, team) − Σ sim(candidate, taboo).
    fn score_candidate(
        candidate: &Word,
        team_words: &[&Word],
        taboo_words: &[&Word],
        oracle: &dyn SimilarityOracle,
    ) -> Option<f32> {
        let mut score = 0.0;
        for word in team_words {
            score += oracle.similarity(candidate.as_str(), word.as_str())?;
        }
        for word in taboo_words {
            score -= oracle.similarity(candidate.as_str(), word.as_str())?;
        }
        Some(score)
    }

    /// Derive the intended word set for a chosen clue.
    ///
    /// Team words are ranked by similarity to the clue. A single remaining
    /// team word is intended on its own. Otherwise consecutive gaps among
    /// the top three are scanned: a gap below `threshold` pulls both words
    /// in; the first gap at or above it adds the boundary word and stops.
    fn intended_words(
        clue: &Word,
        team_words: &[&Word],
        oracle: &dyn SimilarityOracle,
        threshold: f32,
    ) -> SmallVec<[Word; 3]> {
        let mut ranked: Vec<(&Word, f32)> = team_words
            .iter()
            .filter_map(|word| {
                oracle
                    .similarity(clue.as_str(), word.as_str())
                    .map(|score| (*word, score))
            })
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut intended: SmallVec<[Word; 3]> = SmallVec::new();
        if let [only] = ranked.as_slice() {
            intended.push(only.0.clone());
            return intended;
        }

        let top = &ranked[..ranked.len().min(MAX_INTENDED)];
        for pair in top.windows(2) {
            let gap = pair[0].1 - pair[1].1;
            if gap < threshold {
                push_unique(&mut intended, pair[0].0);
                push_unique(&mut intended, pair[1].0);
            } else {
                push_unique(&mut intended, pair[0].0);
                break;
            }
        }

        intended
    }
}

fn push_unique(intended: &mut SmallVec<[Word; 3]>, word: &Word) {
    if !intended.contains(word) {
        intended.push(word.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::TableOracle;

    /// Red team: ocean + river, taboo: mountain. "water" is the good clue,
    /// "rocky" leans taboo.
    fn water_oracle() -> TableOracle {
        let mut oracle = TableOracle::new();
        oracle.set_similarity("ocean", "river", 0.6);
        oracle.set_similarity("ocean", "mountain", 0.1);

        oracle.set_similarity("water", "ocean", 0.7);
        oracle.set_similarity("water", "river", 0.65);
        oracle.set_similarity("water", "mountain", 0.05);

        oracle.set_similarity("rocky", "ocean", 0.2);
        oracle.set_similarity("rocky", "river", 0.2);
        oracle.set_similarity("rocky", "mountain", 0.8);

        oracle.set_neighbors("ocean", &["water", "rocky"]);
        oracle.set_neighbors("river", &["water"]);
        oracle
    }

    fn water_board() -> Board {
        Board::from_assignment(&["ocean", "river"], &[], &["mountain"], &[]).unwrap()
    }

    #[test]
    fn test_good_clue_beats_taboo_heavy_candidate() {
        let oracle = water_oracle();
        let board = water_board();
        let mut history = ClueHistory::new();

        let spymaster = Spymaster::new(Team::Red, EngineConfig::default());
        let (clue, _) = spymaster.give_clue(&board, &mut history, &oracle).unwrap();

        // score(water) = 0.7 + 0.65 - 0.05 = 1.3
        // score(rocky) = 0.2 + 0.2 - 0.8 = -0.4
        assert_eq!(clue, "water");
    }

    #[test]
    fn test_clue_is_not_a_board_word() {
        let oracle = water_oracle();
        let board = water_board();
        let mut history = ClueHistory::new();

        let spymaster = Spymaster::new(Team::Red, EngineConfig::default());
        let (clue, _) = spymaster.give_clue(&board, &mut history, &oracle).unwrap();

        assert!(!board.is_live(clue.as_str()));
    }

    #[test]
    fn test_clue_recorded_in_history() {
        let oracle = water_oracle();
        let board = water_board();
        let mut history = ClueHistory::new();

        let spymaster = Spymaster::new(Team::Red, EngineConfig::default());
        let (clue, count) = spymaster.give_clue(&board, &mut history, &oracle).unwrap();

        let entry = history.last().unwrap();
        assert_eq!(entry.clue, clue);
        assert_eq!(entry.intended.len(), count);
    }

    #[test]
    fn test_intended_count_follows_threshold() {
        let oracle = water_oracle();
        let board = water_board();

        // Gap between water->ocean (0.7) and water->river (0.65) is 0.05.
        // A generous threshold covers both words; a strict one stops at one.
        let generous = Spymaster::new(Team::Red, EngineConfig::default().with_cosine_sim_difference(0.3));
        let mut history = ClueHistory::new();
        let (_, count) = generous.give_clue(&board, &mut history, &oracle).unwrap();
        assert_eq!(count, 2);

        let strict = Spymaster::new(Team::Red, EngineConfig::default().with_cosine_sim_difference(0.01));
        let mut history = ClueHistory::new();
        let (_, count) = strict.give_clue(&board, &mut history, &oracle).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_single_team_word_intends_itself() {
        let mut oracle = water_oracle();
        oracle.set_neighbors("ocean", &["water"]);
        let board = Board::from_assignment(&["ocean"], &[], &["mountain"], &[]).unwrap();

        let spymaster = Spymaster::new(Team::Red, EngineConfig::default());
        let mut history = ClueHistory::new();
        let (_, count) = spymaster.give_clue(&board, &mut history, &oracle).unwrap();

        assert_eq!(count, 1);
        assert_eq!(history.last().unwrap().intended.as_slice(), [Word::new("ocean")]);
    }

    #[test]
    fn test_used_clue_not_reissued() {
        let oracle = water_oracle();
        let board = water_board();
        let mut history = ClueHistory::new();

        let spymaster = Spymaster::new(Team::Red, EngineConfig::default());
        let (first, _) = spymaster.give_clue(&board, &mut history, &oracle).unwrap();
        assert_eq!(first, "water");

        let (second, _) = spymaster.give_clue(&board, &mut history, &oracle).unwrap();
        assert_eq!(second, "rocky");
    }

    #[test]
    fn test_exhausted_candidates_is_hard_failure() {
        let oracle = water_oracle();
        let board = water_board();
        let mut history = ClueHistory::new();
        history.add(Word::new("water"), &[]);
        history.add(Word::new("rocky"), &[]);

        let spymaster = Spymaster::new(Team::Red, EngineConfig::default());
        let result = spymaster.give_clue(&board, &mut history, &oracle);

        assert_eq!(result, Err(EngineError::NoClueAvailable { team: Team::Red }));
    }

    #[test]
    fn test_filters_trivial_and_dirty_candidates() {
        let mut oracle = TableOracle::new();
        oracle.set_similarity("ocean", "river", 0.6);
        oracle.set_similarity("wet", "ocean", 0.5);
        oracle.set_similarity("wet", "river", 0.5);
        // "oceans" contains a team word, "new_york" is not a clean token,
        // "ghost" is out of vocabulary; only "wet" survives
        oracle.set_neighbors("ocean", &["oceans", "new_york", "ghost", "wet"]);
        oracle.set_neighbors("river", &[]);
        oracle.add_word("oceans");
        oracle.add_word("new_york");

        let board = Board::from_assignment(&["ocean", "river"], &[], &[], &[]).unwrap();
        let spymaster = Spymaster::new(Team::Red, EngineConfig::default());
        let mut history = ClueHistory::new();

        let (clue, _) = spymaster.give_clue(&board, &mut history, &oracle).unwrap();
        assert_eq!(clue, "wet");
    }

    #[test]
    fn test_taboo_board_word_is_not_a_clue() {
        // "wave" sits on the board as a neutral word and shows up in the
        // team word's neighbor list; it must never be issued as the clue
        let mut oracle = TableOracle::new();
        oracle.set_similarity("wave", "ocean", 0.8);
        oracle.set_similarity("wet", "ocean", 0.4);
        oracle.set_neighbors("ocean", &["wave", "wet"]);

        let board = Board::from_assignment(&["ocean"], &[], &["wave"], &[]).unwrap();
        let spymaster = Spymaster::new(Team::Red, EngineConfig::default());
        let mut history = ClueHistory::new();

        let (clue, _) = spymaster.give_clue(&board, &mut history, &oracle).unwrap();
        assert_eq!(clue, "wet");
        assert!(!board.is_live(clue.as_str()));
    }

    #[test]
    fn test_only_taboo_candidates_is_hard_failure() {
        let mut oracle = TableOracle::new();
        oracle.set_similarity("wave", "ocean", 0.8);
        oracle.set_neighbors("ocean", &["wave"]);

        let board = Board::from_assignment(&["ocean"], &[], &["wave"], &[]).unwrap();
        let spymaster = Spymaster::new(Team::Red, EngineConfig::default());
        let mut history = ClueHistory::new();

        let result = spymaster.give_clue(&board, &mut history, &oracle);
        assert_eq!(result, Err(EngineError::NoClueAvailable { team: Team::Red }));
    }

    #[test]
    fn test_unscorable_candidate_skipped() {
        // "river" sits on the board but not in the oracle's vocabulary, so
        // candidates cannot be scored against the taboo set
        let mut oracle = TableOracle::new();
        oracle.set_similarity("wave", "ocean", 0.9);
        oracle.set_similarity("wet", "ocean", 0.4);
        oracle.set_neighbors("ocean", &["wave", "wet"]);

        let board = Board::from_assignment(&["ocean"], &[], &["river"], &[]).unwrap();
        let spymaster = Spymaster::new(Team::Red, EngineConfig::default());
        let mut history = ClueHistory::new();

        // "wave" outranks "wet" on ocean but both need a taboo score against
        // out-of-vocabulary "river": no candidate survives
        let result = spymaster.give_clue(&board, &mut history, &oracle);
        assert_eq!(result, Err(EngineError::NoClueAvailable { team: Team::Red }));

        // With the taboo word known, the skip no longer applies
        oracle.add_word("river");
        let (clue, _) = spymaster.give_clue(&board, &mut history, &oracle).unwrap();
        assert_eq!(clue, "wave");
    }

    #[test]
    fn test_lexicographic_tie_break() {
        let mut oracle = TableOracle::new();
        oracle.set_similarity("zebra", "ocean", 0.5);
        oracle.set_similarity("acorn", "ocean", 0.5);
        oracle.set_neighbors("ocean", &["zebra", "acorn"]);

        let board = Board::from_assignment(&["ocean"], &[], &[], &[]).unwrap();
        let spymaster = Spymaster::new(Team::Red, EngineConfig::default());
        let mut history = ClueHistory::new();

        let (clue, _) = spymaster.give_clue(&board, &mut history, &oracle).unwrap();
        assert_eq!(clue, "acorn");
    }

    #[test]
    fn test_intended_capped_at_three() {
        let mut oracle = TableOracle::new();
        let team = ["alpha", "bravo", "charlie", "delta"];
        for (i, word) in team.iter().enumerate() {
            // Tightly packed similarities: every gap below any sane threshold
            oracle.set_similarity("group", word, 0.9 - i as f32 * 0.01);
        }
        oracle.set_neighbors("alpha", &["group"]);

        let board = Board::from_assignment(&team, &[], &[], &[]).unwrap();
        let spymaster =
            Spymaster::new(Team::Red, EngineConfig::default().with_cosine_sim_difference(0.3));
        let mut history = ClueHistory::new();

        let (_, count) = spymaster.give_clue(&board, &mut history, &oracle).unwrap();
        assert_eq!(count, 3);
    }
}
