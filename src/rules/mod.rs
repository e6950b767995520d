//! Game rules: score tracking and the round outcome state machine.

pub mod resolver;

pub use resolver::{resolve_reveal, RoundOutcome, Score};
