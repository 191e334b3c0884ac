//! Seeded shuffling for the draw pile.
//!
//! The match owns one ChaCha8 stream. `start_game` and `shuffle_deck` both
//! pull from it, and a snapshot records the stream position, so a reloaded
//! match shuffles exactly as the original would have.
//!
//! ```
//! use castle_ccg::core::GameRng;
//! use im::Vector;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let pile: Vector<u32> = (0..10).collect();
//! assert_eq!(a.shuffle_pile(&pile), b.shuffle_pile(&pile));
//! ```

use im::Vector;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// The match's shuffle stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, cards: &mut [T]) {
        cards.shuffle(&mut self.stream);
    }

    /// Shuffled copy of a persistent pile.
    #[must_use]
    pub fn shuffle_pile<T: Clone>(&mut self, pile: &Vector<T>) -> Vector<T> {
        let mut cards: Vec<T> = pile.iter().cloned().collect();
        self.shuffle(&mut cards);
        cards.into_iter().collect()
    }

    /// Position in the stream, for snapshots.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: u64::try_from(self.stream.get_word_pos()).unwrap_or(u64::MAX),
        }
    }

    /// Resume a stream at a recorded position.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut stream = ChaCha8Rng::seed_from_u64(state.seed);
        stream.set_word_pos(u128::from(state.word_pos));
        Self {
            stream,
            seed: state.seed,
        }
    }
}

impl PartialEq for GameRng {
    fn eq(&self, other: &Self) -> bool {
        self.state() == other.state()
    }
}

impl Eq for GameRng {}

/// Snapshot form of the shuffle stream: `{seed, wordPos}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 counts words in 128 bits; a match never leaves the low 64.
    pub word_pos: u64,
}
