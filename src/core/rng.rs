//! Random sources for dice and card draws.
//!
//! The engine never touches a global RNG. Every roll and every deck draw
//! goes through a [`RandomSource`], so a test can hand the engine an exact
//! sequence of dice faces and deck picks.
//!
//! ```
//! use board_engine::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.roll_die(), b.roll_die());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Faces on a die.
pub const DIE_FACES: u8 = 6;

/// Source of dice faces and deck picks.
pub trait RandomSource {
    /// Uniform die face in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// Uniform index in `0..len`. `len` is never 0.
    fn pick(&mut self, len: usize) -> usize;
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed; the same seed always yields the same game.
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

    /// Fork an independent, deterministic branch.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RandomSource for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Serializable RNG state.
///
/// ChaCha8 word position gives O(1) restore regardless of how many
/// numbers were drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
    pub fork_counter: u64,
}

/// Replays a fixed script of dice faces and deck picks.
///
/// Once a queue runs dry it yields 1 for dice and 0 for picks.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    dice: VecDeque<u8>,
    picks: VecDeque<usize>,
}

impl ScriptedRng {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a pair of dice for the next roll.
    #[must_use]
    pub fn with_roll(mut self, die1: u8, die2: u8) -> Self {
        self.push_roll(die1, die2);
        self
    }

    /// Queue several rolls in order.
    #[must_use]
    pub fn with_rolls(mut self, rolls: &[(u8, u8)]) -> Self {
        for &(d1, d2) in rolls {
            self.push_roll(d1, d2);
        }
        self
    }

    /// Queue a deck index for the next card draw.
    #[must_use]
    pub fn with_pick(mut self, index: usize) -> Self {
        self.picks.push_back(index);
        self
    }

    pub fn push_roll(&mut self, die1: u8, die2: u8) {
        self.dice.push_back(die1);
        self.dice.push_back(die2);
    }

    pub fn push_pick(&mut self, index: usize) {
        self.picks.push_back(index);
    }

    /// Remaining scripted die faces.
    #[must_use]
    pub fn dice_remaining(&self) -> usize {
        self.dice.len()
    }
}

impl RandomSource for ScriptedRng {
    fn roll_die(&mut self) -> u8 {
        self.dice.pop_front().unwrap_or(1).clamp(1, DIE_FACES)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }
}
