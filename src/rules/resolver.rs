//! Round outcome resolution.
//!
//! Maps a revealed tag to a flow-control signal and updates the score.
//! The session's turn loop is driven entirely by [`RoundOutcome`]:
//!
//! - own word → keep guessing, unless that reveal emptied a score
//! - enemy or neutral word → the turn passes
//! - assassin → immediate loss
//!
//! Terminal outcomes (`GameWon`, `GameLost`) end the game; the others end at
//! most the round.

use serde::{Deserialize, Serialize};

use crate::core::{Tag, Team, TeamMap};

/// Remaining un-revealed words per team.
///
/// Decrements as a team's words are revealed; never goes below zero. A team
/// with zero remaining words has had its whole set found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score(TeamMap<u8>);

impl Score {
    /// Create a score with the given starting counts.
    #[must_use]
    pub fn new(red: u8, blue: u8) -> Self {
        Self(TeamMap::new(|team| match team {
            Team::Red => red,
            Team::Blue => blue,
        }))
    }

    /// Words a team still has on the board.
    #[must_use]
    pub fn remaining(&self, team: Team) -> u8 {
        self.0[team]
    }

    /// Whether a team has no words left.
    #[must_use]
    pub fn is_exhausted(&self, team: Team) -> bool {
        self.0[team] == 0
    }

    fn decrement(&mut self, team: Team) {
        self.0[team] = self.0[team].saturating_sub(1);
    }
}

/// Flow-control signal after a reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Correct own-team guess; the guesser may keep guessing this round.
    TeamContinue,
    /// Enemy or neutral word revealed, or guess budget spent; turn passes.
    TurnEnd,
    /// The named team won: a score reached zero on their reveal.
    GameWon(Team),
    /// The named team revealed the assassin and lost, whatever the scores.
    GameLost(Team),
}

impl RoundOutcome {
    /// Whether this outcome ends the game.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundOutcome::GameWon(_) | RoundOutcome::GameLost(_))
    }
}

/// Resolve a reveal made by `acting` team, mutating `score`.
///
/// Own tag decrements the actor's score; a zero score for either team on
/// that reveal wins the game for the actor, exactly once, on the reveal
/// that causes it. An enemy tag decrements the enemy's score but still ends
/// the turn. Neutral changes nothing and ends the turn. The assassin loses
/// the game for the actor regardless of scores.
pub fn resolve_reveal(tag: Tag, acting: Team, score: &mut Score) -> RoundOutcome {
    match tag {
        Tag::Assassin => RoundOutcome::GameLost(acting),
        Tag::Neutral => RoundOutcome::TurnEnd,
        Tag::Red | Tag::Blue => {
            // Red/blue tags always belong to a team
            let owner = match tag {
                Tag::Red => Team::Red,
                _ => Team::Blue,
            };
            score.decrement(owner);
            if owner == acting {
                if score.is_exhausted(Team::Red) || score.is_exhausted(Team::Blue) {
                    RoundOutcome::GameWon(acting)
                } else {
                    RoundOutcome::TeamContinue
                }
            } else {
                RoundOutcome::TurnEnd
            }
        }
    }
}
