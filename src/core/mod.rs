//! Core engine types: teams, tags, words, RNG, configuration, errors.
//!
//! These are the building blocks every other module leans on. Nothing here
//! knows about the heuristic algorithms or the oracle backends.

pub mod team;
pub mod word;
pub mod rng;
pub mod config;
pub mod error;

pub use team::{Tag, Team, TeamMap};
pub use word::Word;
pub use rng::GameRng;
pub use config::EngineConfig;
pub use error::EngineError;
