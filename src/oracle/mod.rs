//! Similarity oracle: the embedding-backed service the engine depends on.
//!
//! The engine never loads embedding files. It consumes anything implementing
//! [`SimilarityOracle`]; two in-memory backends ship with the crate.

pub mod traits;
pub mod vector;
pub mod table;

pub use traits::SimilarityOracle;
pub use vector::VectorOracle;
pub use table::TableOracle;
