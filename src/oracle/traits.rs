//! The similarity oracle trait.
//!
//! This is the seam between the heuristic engine and whatever embedding
//! backend drives it. Callers depend only on this trait; backends differ in
//! how scores and neighbor lists are produced (dense vectors, precomputed
//! tables, bindings to an external model server).

use crate::core::Word;

/// Word-embedding similarity service.
///
/// ## Contract
///
/// - `similarity` is symmetric and returns scores in [-1, 1]. A word outside
///   the vocabulary yields `None`, never an error. Callers recover by
///   excluding the word from candidate or ranking sets.
/// - `most_similar` is deterministic for a fixed oracle, returns at most
///   `top_n` entries, and may contain words outside the caller's active
///   vocabulary (multi-word tokens, inflections); callers filter.
pub trait SimilarityOracle {
    /// Whether a word is in the oracle's vocabulary.
    fn contains(&self, word: &str) -> bool;

    /// Similarity of two words, or `None` if either is out of vocabulary.
    fn similarity(&self, a: &str, b: &str) -> Option<f32>;

    /// The `top_n` most similar words to `word`, most similar first.
    ///
    /// Empty when `word` is out of vocabulary.
    fn most_similar(&self, word: &str, top_n: usize) -> Vec<Word>;
}
