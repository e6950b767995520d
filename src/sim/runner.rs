//! Batch runner for automated games.
//!
//! Plays N games from one base seed, forking an RNG stream per game so that
//! game K deals the same board no matter how earlier games went. Aggregates
//! the measurements the engine is tuned against: turns to win, assassin
//! losses, and how many intended words the guesser actually found.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::core::{EngineConfig, EngineError, GameRng, Team, TeamMap};
use crate::oracle::SimilarityOracle;
use crate::session::{GameOutcome, GameReport, GameSession};

/// Batch simulation parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    /// Games to play (default: 10).
    pub games: usize,

    /// Base seed; each game forks its own stream from it (default: 42).
    pub seed: u64,

    /// Team that opens every game (default: blue, which carries the extra
    /// board word).
    pub starting_team: Team,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            games: 10,
            seed: 42,
            starting_team: Team::Blue,
        }
    }
}

impl SimConfig {
    /// Create a new config with a custom game count.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Create a new config with a custom base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom starting team.
    pub fn with_starting_team(mut self, team: Team) -> Self {
        self.starting_team = team;
        self
    }
}

/// Aggregate results of a batch run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimStats {
    /// Games attempted.
    pub games: usize,
    /// Wins per team.
    pub wins: TeamMap<usize>,
    /// Games lost to the assassin.
    pub assassin_losses: usize,
    /// Games aborted because a spymaster ran out of clues. Tracked apart
    /// from assassin losses; these are engine failures, not game outcomes.
    pub failed_games: usize,
    /// Winner's turn counts summed over won games.
    pub total_winner_turns: u32,
    /// Fewest turns any winner needed.
    pub min_winner_turns: Option<u32>,
    /// Intended words across all clues of won games.
    pub intended_words: usize,
    /// Intended words the guesser actually picked, across won games.
    pub correct_guesses: usize,
}

impl SimStats {
    /// Games that finished with a winner.
    #[must_use]
    pub fn won_games(&self) -> usize {
        self.wins[Team::Red] + self.wins[Team::Blue]
    }

    /// Mean turns the winner needed, over won games. Zero without wins.
    #[must_use]
    pub fn average_winner_turns(&self) -> f64 {
        if self.won_games() == 0 {
            return 0.0;
        }
        f64::from(self.total_winner_turns) / self.won_games() as f64
    }

    /// Share of intended words the guesser found, over won games.
    /// Zero without intended words.
    #[must_use]
    pub fn guess_accuracy(&self) -> f64 {
        if self.intended_words == 0 {
            return 0.0;
        }
        self.correct_guesses as f64 / self.intended_words as f64
    }

    fn absorb(&mut self, report: &GameReport) {
        match report.outcome {
            GameOutcome::Won { winner } => {
                self.wins[winner] += 1;
                let turns = report.turns[winner];
                self.total_winner_turns += turns;
                self.min_winner_turns = Some(match self.min_winner_turns {
                    Some(min) => min.min(turns),
                    None => turns,
                });
                for (_, records) in report.rounds.iter() {
                    for record in records {
                        self.intended_words += record.intended.len();
                        self.correct_guesses += record
                            .intended
                            .iter()
                            .filter(|word| record.guessed.contains(word))
                            .count();
                    }
                }
            }
            GameOutcome::AssassinLoss { .. } => {
                self.assassin_losses += 1;
            }
        }
    }
}

/// Plays batches of automated games over one oracle and word pool.
pub struct SimRunner<'a> {
    oracle: &'a dyn SimilarityOracle,
    pool: Vec<String>,
    engine: EngineConfig,
    sim: SimConfig,
}

impl<'a> SimRunner<'a> {
    /// Create a runner over a word pool.
    #[must_use]
    pub fn new(
        oracle: &'a dyn SimilarityOracle,
        pool: &[&str],
        engine: EngineConfig,
        sim: SimConfig,
    ) -> Self {
        Self {
            oracle,
            pool: pool.iter().map(|w| (*w).to_string()).collect(),
            engine,
            sim,
        }
    }

    /// Play all configured games.
    ///
    /// A game whose spymaster runs out of clues is counted in
    /// `failed_games` and the batch continues.
    ///
    /// # Errors
    ///
    /// [`EngineError::InsufficientWords`] when the pool cannot produce a
    /// board at all; that fate is shared by every game in the batch.
    pub fn run(&self) -> Result<SimStats, EngineError> {
        let pool_refs: Vec<&str> = self.pool.iter().map(String::as_str).collect();
        let mut rng = GameRng::new(self.sim.seed);
        let mut stats = SimStats {
            games: self.sim.games,
            ..SimStats::default()
        };

        for game in 0..self.sim.games {
            let mut game_rng = rng.fork();
            let board = Board::deal(&pool_refs, self.oracle, &mut game_rng)?;
            let mut session = GameSession::new(board, self.oracle, self.engine.clone());

            match session.run(self.sim.starting_team) {
                Ok(report) => {
                    debug!(game, outcome = ?report.outcome, "game finished");
                    stats.absorb(&report);
                }
                Err(EngineError::NoClueAvailable { team }) => {
                    debug!(game, %team, "game failed: no clue available");
                    stats.failed_games += 1;
                }
                Err(other) => return Err(other),
            }
        }

        info!(
            games = stats.games,
            won = stats.won_games(),
            assassin = stats.assassin_losses,
            failed = stats.failed_games,
            "batch finished"
        );
        Ok(stats)
    }
}
