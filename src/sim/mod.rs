//! Batch simulation: many automated games with aggregate statistics.

pub mod runner;

pub use runner::{SimConfig, SimRunner, SimStats};
