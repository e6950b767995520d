//! Game session: owned state for one game and the turn loop that drives it.

pub mod game;

pub use game::{ClueRecord, GameOutcome, GameReport, GameSession};
