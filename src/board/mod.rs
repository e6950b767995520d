//! Board: the 5×5 word grid with hidden tags.
//!
//! Slots keep their index for the whole game; revealing a word marks its
//! slot instead of removing it, so board geometry stays stable.

pub mod board;

pub use board::{Board, Slot, ASSASSIN_WORDS, BLUE_WORDS, BOARD_SIZE, NEUTRAL_WORDS, RED_WORDS};
