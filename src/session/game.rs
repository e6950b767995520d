//! One automated game from deal to terminal outcome.
//!
//! `GameSession` owns every piece of shared mutable state: board, score,
//! per-team clue histories, and guess logs. It mutates them only inside the
//! acting team's round. Turns alternate in an explicit loop driven by
//! [`RoundOutcome`]; a long game never deepens the stack.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::clue::{ClueHistory, Spymaster};
use crate::core::{EngineConfig, EngineError, Team, TeamMap, Word};
use crate::guess::Guesser;
use crate::rules::{resolve_reveal, RoundOutcome, Score};
use crate::oracle::SimilarityOracle;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// A team revealed its last word.
    Won { winner: Team },
    /// A team revealed the assassin.
    AssassinLoss { loser: Team },
}

/// One clue with what it intended and what was actually guessed under it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    pub clue: Word,
    pub intended: Vec<Word>,
    pub guessed: Vec<Word>,
}

/// Summary of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub outcome: GameOutcome,
    /// Rounds each team played.
    pub turns: TeamMap<u32>,
    /// Per-team clue records in the order the clues were given.
    pub rounds: TeamMap<Vec<ClueRecord>>,
}

/// Owned state for a single game.
pub struct GameSession<'a> {
    board: Board,
    oracle: &'a dyn SimilarityOracle,
    spymasters: TeamMap<Spymaster>,
    guessers: TeamMap<Guesser>,
    histories: TeamMap<ClueHistory>,
    score: Score,
    turns: TeamMap<u32>,
}

impl<'a> GameSession<'a> {
    /// Create a session over a dealt board.
    ///
    /// The starting score is read off the board's live tag counts.
    #[must_use]
    pub fn new(board: Board, oracle: &'a dyn SimilarityOracle, config: EngineConfig) -> Self {
        let score = Score::new(board.remaining(Team::Red), board.remaining(Team::Blue));
        Self {
            board,
            oracle,
            spymasters: TeamMap::new(|team| Spymaster::new(team, config.clone())),
            guessers: TeamMap::new(Guesser::new),
            histories: TeamMap::new(|_| ClueHistory::new()),
            score,
            turns: TeamMap::with_value(0),
        }
    }

    /// The board as it currently stands.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current score.
    #[must_use]
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// A team's clue history.
    #[must_use]
    pub fn history(&self, team: Team) -> &ClueHistory {
        &self.histories[team]
    }

    /// Play one round for `team`: clue, ranked guesses, reveals.
    ///
    /// Returns `TurnEnd` when the guess budget is spent or a wrong word ends
    /// the turn early, or a terminal outcome when the round decides the game.
    /// `TeamContinue` never escapes: it only continues the in-round loop.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoClueAvailable`] when the spymaster cannot produce a
    /// clue. The game cannot proceed; callers must surface this as a failed
    /// game, distinct from any game-over outcome.
    pub fn play_round(&mut self, team: Team) -> Result<RoundOutcome, EngineError> {
        self.turns[team] += 1;

        let history = self.histories.get_mut(team);
        let (clue, count) = self.spymasters[team].give_clue(&self.board, history, self.oracle)?;
        info!(%team, %clue, count, "round start");

        let suggestions = self.guessers[team].suggest(&self.board, &self.histories[team], self.oracle);

        for guess in suggestions {
            self.guessers.get_mut(team).record_guess(&clue, &guess);

            let Some(tag) = self.board.reveal(guess.as_str()) else {
                // Invalid reveal: a no-op, round state unchanged
                debug!(%team, word = %guess, "guess not on live board");
                continue;
            };
            debug!(%team, word = %guess, %tag, "revealed");

            let outcome = resolve_reveal(tag, team, &mut self.score);
            match outcome {
                RoundOutcome::TeamContinue => {}
                other => return Ok(other),
            }
        }

        // Guess budget spent without a wrong word
        Ok(RoundOutcome::TurnEnd)
    }

    /// Play rounds alternating from `starting_team` until the game ends.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineError::NoClueAvailable`] from any round.
    pub fn run(&mut self, starting_team: Team) -> Result<GameReport, EngineError> {
        let mut team = starting_team;
        loop {
            match self.play_round(team)? {
                RoundOutcome::TeamContinue | RoundOutcome::TurnEnd => {
                    team = team.enemy();
                }
                RoundOutcome::GameWon(winner) => {
                    info!(%winner, "game won");
                    return Ok(self.report(GameOutcome::Won { winner }));
                }
                RoundOutcome::GameLost(loser) => {
                    info!(%loser, "assassin revealed, game lost");
                    return Ok(self.report(GameOutcome::AssassinLoss { loser }));
                }
            }
        }
    }

    fn report(&self, outcome: GameOutcome) -> GameReport {
        GameReport {
            outcome,
            turns: self.turns.clone(),
            rounds: TeamMap::new(|team| {
                self.histories[team]
                    .iter()
                    .map(|entry| ClueRecord {
                        clue: entry.clue.clone(),
                        intended: entry.intended.to_vec(),
                        guessed: self.guessers[team].guessed_under(&entry.clue).to_vec(),
                    })
                    .collect()
            }),
        }
    }
}
