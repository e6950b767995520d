//! Engine failure taxonomy.
//!
//! Only conditions that abort the current game are errors. Oracle
//! out-of-vocabulary misses are recovered locally (words drop out of the
//! candidate or ranking set), and an invalid reveal is a no-op signal from
//! [`Board::reveal`](crate::board::Board::reveal); neither appears here.

use thiserror::Error;

use super::Team;

/// Fatal engine failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The spymaster's candidate vocabulary is exhausted: every neighbor was
    /// filtered out or already used as a clue. The round cannot proceed.
    ///
    /// Distinct from any game-over outcome; an orchestrator must not conflate
    /// this with an assassin loss.
    #[error("no clue available for {team} team: candidate vocabulary exhausted")]
    NoClueAvailable {
        /// The team whose spymaster failed.
        team: Team,
    },

    /// The word pool did not yield enough in-vocabulary words for a board.
    #[error("insufficient board words: {available} in vocabulary, {needed} needed")]
    InsufficientWords {
        /// In-vocabulary words found in the pool.
        available: usize,
        /// Words a board requires.
        needed: usize,
    },
}
