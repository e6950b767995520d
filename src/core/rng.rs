//! Deterministic random number generation for board sampling and simulation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical boards and games
//! - **Forkable**: The batch runner forks one stream per game, so game N
//!   plays out the same regardless of how many games run before it
//!
//! ## Usage
//!
//! ```
//! use codenames_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut game_rng = rng.fork();
//!
//! let mut words = vec!["ocean", "river", "mountain", "flute"];
//! game_rng.shuffle(&mut words);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking for per-game streams.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Sample `n` distinct elements from a slice, in random order.
    ///
    /// Returns fewer than `n` elements if the slice is shorter than `n`.
    #[must_use]
    pub fn sample<T: Clone>(&mut self, slice: &[T], n: usize) -> Vec<T> {
        slice.choose_multiple(&mut self.inner, n).cloned().collect()
    }
}
