//! Pair-table oracle backend.
//!
//! Sense2vec-shaped: similarities and neighbor lists are precomputed and
//! stored directly instead of derived from vectors. Also the natural fixture
//! backend for tests, where exact scores must be pinned.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::Word;

use super::SimilarityOracle;

/// In-memory precomputed similarity oracle.
///
/// Pairs not present in the table score 0.0 as long as both words are in the
/// vocabulary; a word scores 1.0 against itself.
#[derive(Clone, Debug, Default)]
pub struct TableOracle {
    vocab: FxHashSet<Word>,
    /// Symmetric pair scores, keyed with the lexicographically smaller word
    /// first.
    pairs: FxHashMap<(Word, Word), f32>,
    neighbors: FxHashMap<Word, Vec<Word>>,
}

impl TableOracle {
    /// Create an empty oracle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn key(a: &str, b: &str) -> (Word, Word) {
        let a = Word::new(a);
        let b = Word::new(b);
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Add a word to the vocabulary without any pair scores.
    pub fn add_word(&mut self, word: &str) {
        self.vocab.insert(Word::new(word));
    }

    /// Set the symmetric similarity of a word pair.
    ///
    /// Both words join the vocabulary.
    pub fn set_similarity(&mut self, a: &str, b: &str, score: f32) {
        self.vocab.insert(Word::new(a));
        self.vocab.insert(Word::new(b));
        self.pairs.insert(Self::key(a, b), score);
    }

    /// Set the precomputed neighbor list for a word, most similar first.
    ///
    /// The word joins the vocabulary; neighbors do not (an embedding model's
    /// neighbor lists routinely contain tokens outside the caller's active
    /// vocabulary).
    pub fn set_neighbors(&mut self, word: &str, neighbors: &[&str]) {
        self.vocab.insert(Word::new(word));
        self.neighbors
            .insert(Word::new(word), neighbors.iter().map(|n| Word::new(n)).collect());
    }
}

impl SimilarityOracle for TableOracle {
    fn contains(&self, word: &str) -> bool {
        self.vocab.contains(&Word::new(word))
    }

    fn similarity(&self, a: &str, b: &str) -> Option<f32> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        if a.eq_ignore_ascii_case(b) {
            return Some(1.0);
        }
        Some(self.pairs.get(&Self::key(a, b)).copied().unwrap_or(0.0))
    }

    fn most_similar(&self, word: &str, top_n: usize) -> Vec<Word> {
        let mut neighbors = self
            .neighbors
            .get(&Word::new(word))
            .cloned()
            .unwrap_or_default();
        neighbors.truncate(top_n);
        neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_scores_symmetric() {
        let mut oracle = TableOracle::new();
        oracle.set_similarity("ocean", "river", 0.6);

        assert_eq!(oracle.similarity("ocean", "river"), Some(0.6));
        assert_eq!(oracle.similarity("river", "ocean"), Some(0.6));
    }

    #[test]
    fn test_self_similarity() {
        let mut oracle = TableOracle::new();
        oracle.add_word("ocean");

        assert_eq!(oracle.similarity("ocean", "ocean"), Some(1.0));
    }

    #[test]
    fn test_unset_pair_scores_zero() {
        let mut oracle = TableOracle::new();
        oracle.add_word("ocean");
        oracle.add_word("flute");

        assert_eq!(oracle.similarity("ocean", "flute"), Some(0.0));
    }

    #[test]
    fn test_out_of_vocabulary_is_none() {
        let mut oracle = TableOracle::new();
        oracle.add_word("ocean");

        assert_eq!(oracle.similarity("ocean", "unknown"), None);
    }

    #[test]
    fn test_neighbors_order_and_truncation() {
        let mut oracle = TableOracle::new();
        oracle.set_neighbors("ocean", &["sea", "water", "wave"]);

        assert_eq!(
            oracle.most_similar("ocean", 2),
            vec![Word::new("sea"), Word::new("water")]
        );
        assert!(oracle.most_similar("river", 5).is_empty());
    }

    #[test]
    fn test_neighbors_outside_vocab() {
        let mut oracle = TableOracle::new();
        oracle.set_neighbors("ocean", &["sea"]);

        // The neighbor list mentions "sea" but it is not in vocabulary
        assert!(!oracle.contains("sea"));
        assert_eq!(oracle.similarity("ocean", "sea"), None);
    }

    #[test]
    fn test_case_insensitive() {
        let mut oracle = TableOracle::new();
        oracle.set_similarity("Ocean", "River", 0.6);

        assert!(oracle.contains("ocean"));
        assert_eq!(oracle.similarity("OCEAN", "river"), Some(0.6));
    }
}
