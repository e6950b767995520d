//! Guessing: similarity ranking of live board words against the last clue.

pub mod guesser;

pub use guesser::Guesser;
