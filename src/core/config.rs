//! Engine configuration parameters.

use serde::{Deserialize, Serialize};

/// Heuristic engine hyperparameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Candidate pool size per team word (default: 10).
    /// The spymaster queries the oracle for this many neighbors of each
    /// unrevealed team word when building the candidate vocabulary.
    pub topn: usize,

    /// Similarity gap threshold for growing the intended set (default: 0.3).
    /// While consecutive ranked team words sit closer than this to each
    /// other, the clue is considered to cover both. Higher values produce
    /// more intended words per clue.
    pub cosine_sim_difference: f32,

    /// Oracle vocabulary cap (default: 50,000).
    /// Bounds memory and scan cost for backends that honor it.
    pub vocab_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            topn: 10,
            cosine_sim_difference: 0.3,
            vocab_size: 50_000,
        }
    }
}

impl EngineConfig {
    /// Create a new config with custom candidate pool size.
    pub fn with_topn(mut self, topn: usize) -> Self {
        self.topn = topn;
        self
    }

    /// Create a new config with custom intended-set gap threshold.
    pub fn with_cosine_sim_difference(mut self, threshold: f32) -> Self {
        self.cosine_sim_difference = threshold;
        self
    }

    /// Create a new config with custom vocabulary cap.
    pub fn with_vocab_size(mut self, vocab_size: usize) -> Self {
        self.vocab_size = vocab_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.topn, 10);
        assert!((config.cosine_sim_difference - 0.3).abs() < 0.001);
        assert_eq!(config.vocab_size, 50_000);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_topn(25)
            .with_cosine_sim_difference(0.1)
            .with_vocab_size(1_000);

        assert_eq!(config.topn, 25);
        assert_eq!(config.cosine_sim_difference, 0.1);
        assert_eq!(config.vocab_size, 1_000);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_topn(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.topn, 5);
    }
}
