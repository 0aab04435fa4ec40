//! Injectable randomness: dice rolls and card draws.
//!
//! ## Key Features
//!
//! - **Single source**: every die and every draw goes through one
//!   `RandomSource`, so a fixed seed replays a whole game
//! - **Deterministic**: `GameRng` with the same seed produces the same sequence
//! - **Scriptable**: `ScriptedRolls` replays an exact list of die faces for
//!   scenario tests
//! - **Serializable**: `GameRngState` captures the stream position in O(1)
//!
//! ```
//! use summoner_tactics::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let rolls_a: Vec<u8> = (0..5).map(|_| a.roll_die(6)).collect();
//! let rolls_b: Vec<u8> = (0..5).map(|_| b.roll_die(6)).collect();
//! assert_eq!(rolls_a, rolls_b);
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of all randomness consumed by the engine.
///
/// Object safe so the engine can hold a `Box<dyn RandomSource>` and tests
/// can swap in a scripted source without touching engine logic.
pub trait RandomSource {
    /// Roll one die with faces `1..=sides`.
    fn roll_die(&mut self, sides: u8) -> u8;

    /// Pick a uniformly random index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
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
        }
    }
}

impl RandomSource for GameRng {
    fn roll_die(&mut self, sides: u8) -> u8 {
        self.inner.gen_range(1..=sides)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture and restore are O(1)
/// regardless of how many numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of die faces.
///
/// Once the script runs out, rolls fall back to the `fallback` stream so a
/// long test never stalls. Index picks always come from the fallback.
///
/// ```
/// use summoner_tactics::core::{RandomSource, ScriptedRolls};
///
/// let mut dice = ScriptedRolls::new([5, 1]);
/// assert_eq!(dice.roll_die(6), 5);
/// assert_eq!(dice.roll_die(6), 1);
/// assert_eq!(dice.remaining(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRolls {
    script: VecDeque<u8>,
    fallback: GameRng,
}

impl ScriptedRolls {
    /// Create a script with a default fallback stream.
    #[must_use]
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self::with_fallback(rolls, GameRng::new(0))
    }

    /// Create a script with an explicit fallback stream.
    #[must_use]
    pub fn with_fallback(rolls: impl IntoIterator<Item = u8>, fallback: GameRng) -> Self {
        Self {
            script: rolls.into_iter().collect(),
            fallback,
        }
    }

    /// Queue more faces at the end of the script.
    pub fn push(&mut self, rolls: impl IntoIterator<Item = u8>) {
        self.script.extend(rolls);
    }

    /// Number of scripted faces not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedRolls {
    fn roll_die(&mut self, sides: u8) -> u8 {
        match self.script.pop_front() {
            Some(face) => face.clamp(1, sides),
            None => self.fallback.roll_die(sides),
        }
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.fallback.pick_index(len)
    }
}
