//! Clue generation: per-team history and the spymaster heuristic.

pub mod history;
pub mod spymaster;

pub use history::{ClueEntry, ClueHistory};
pub use spymaster::Spymaster;
