//! # codenames-engine
//!
//! A heuristic Codenames simulator: automated spymasters and guessers driven
//! by a word-embedding similarity oracle.
//!
//! ## Design Principles
//!
//! 1. **Oracle-Agnostic**: The engine never loads embedding files. It consumes
//!    a [`SimilarityOracle`] and works with whatever backend implements it.
//!
//! 2. **Greedy By Design**: Clue selection is a greedy heuristic over a
//!    candidate pool, not a global optimum. That is the point of the engine.
//!
//! 3. **Owned Session State**: Score, per-team clue history, and the board
//!    live inside one [`GameSession`]. No ambient globals.
//!
//! ## Architecture
//!
//! - **Explicit Turn Loop**: Rounds alternate in a plain loop driven by the
//!   [`RoundOutcome`] state machine, so a long game never grows the stack.
//!
//! - **Deterministic Simulation**: Board sampling and the batch runner use a
//!   seeded, forkable ChaCha8 RNG. Same seed, same games.
//!
//! ## Modules
//!
//! - `core`: Teams, tags, words, configuration, RNG, errors
//! - `oracle`: Similarity oracle trait and in-memory backends
//! - `board`: 25-word board, tag assignment, reveals
//! - `clue`: Clue history and the spymaster clue generator
//! - `guess`: Guesser similarity ranking
//! - `rules`: Score tracking and the round outcome resolver
//! - `session`: Single-game session and turn loop
//! - `sim`: Batch simulation runner with aggregate statistics

pub mod core;
pub mod oracle;
pub mod board;
pub mod clue;
pub mod guess;
pub mod rules;
pub mod session;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, EngineError, GameRng, Tag, Team, TeamMap, Word,
};

pub use crate::oracle::{SimilarityOracle, TableOracle, VectorOracle};

pub use crate::board::{Board, Slot, BOARD_SIZE};

pub use crate::clue::{ClueEntry, ClueHistory, Spymaster};

pub use crate::guess::Guesser;

pub use crate::rules::{resolve_reveal, RoundOutcome, Score};

pub use crate::session::{ClueRecord, GameOutcome, GameReport, GameSession};

pub use crate::sim::{SimConfig, SimRunner, SimStats};
