//! Dense-vector oracle backend.
//!
//! Word2vec-shaped: each word carries a dense vector, similarity is cosine,
//! and `most_similar` scans the vocabulary. Insertion order is preserved so
//! neighbor queries are deterministic, and an optional vocabulary cap bounds
//! memory the way a `vocab_size` limit bounds a loaded model.

use rustc_hash::FxHashMap;

use crate::core::Word;

use super::SimilarityOracle;

/// In-memory dense-vector similarity oracle.
#[derive(Clone, Debug, Default)]
pub struct VectorOracle {
    /// Words in insertion order (scan order for `most_similar`).
    words: Vec<Word>,
    /// Word -> index into `words` / `vectors`.
    index: FxHashMap<Word, usize>,
    vectors: Vec<Vec<f32>>,
    /// Maximum vocabulary size; `None` = unbounded.
    limit: Option<usize>,
}

impl VectorOracle {
    /// Create an unbounded oracle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an oracle that accepts at most `vocab_size` words.
    ///
    /// Inserts past the cap are ignored, mirroring how an embedding model is
    /// loaded with a vocabulary limit.
    #[must_use]
    pub fn with_limit(vocab_size: usize) -> Self {
        Self {
            limit: Some(vocab_size),
            ..Self::default()
        }
    }

    /// Insert a word with its embedding vector.
    ///
    /// Re-inserting a known word replaces its vector. Returns whether the
    /// word is in the vocabulary after the call.
    pub fn insert(&mut self, word: &str, vector: Vec<f32>) -> bool {
        let word = Word::new(word);
        if let Some(&i) = self.index.get(&word) {
            self.vectors[i] = vector;
            return true;
        }
        if self.limit.is_some_and(|cap| self.words.len() >= cap) {
            return false;
        }
        self.index.insert(word.clone(), self.words.len());
        self.words.push(word);
        self.vectors.push(vector);
        true
    }

    /// Number of words in the vocabulary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn cosine(a: &[f32], b: &[f32]) -> Option<f32> {
        if a.len() != b.len() {
            return None;
        }
        let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return None;
        }
        Some(dot / (norm_a * norm_b))
    }
}

impl SimilarityOracle for VectorOracle {
    fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    fn similarity(&self, a: &str, b: &str) -> Option<f32> {
        let ia = *self.index.get(a)?;
        let ib = *self.index.get(b)?;
        Self::cosine(&self.vectors[ia], &self.vectors[ib])
    }

    fn most_similar(&self, word: &str, top_n: usize) -> Vec<Word> {
        let Some(&query) = self.index.get(word) else {
            return Vec::new();
        };

        let mut scored: Vec<(usize, f32)> = (0..self.words.len())
            .filter(|&i| i != query)
            .filter_map(|i| {
                Self::cosine(&self.vectors[query], &self.vectors[i]).map(|s| (i, s))
            })
            .collect();
        // Stable sort keeps insertion order among ties, so results are
        // deterministic for a fixed oracle
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(top_n);

        scored.into_iter().map(|(i, _)| self.words[i].clone()).collect()
    }
}
