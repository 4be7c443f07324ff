//! Deterministic random streams for battle decisions.
//!
//! # Determinism
//!
//! Every battle owns exactly one sequential stream. Given the same seed, a
//! stream yields the same sequence of draws, so a battle can be replayed
//! from its seed as long as every consumer draws in the same order.

/// The battle's single sequential random stream.
pub trait RandomStream {
    /// Next raw 32-bit draw.
    fn next_u32(&mut self) -> u32;

    /// Uniform real in `[0, 1)`.
    fn next_uniform01(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Integer in `[min, max_exclusive)`; returns `min` for an empty range.
    fn next_int_range(&mut self, min: u32, max_exclusive: u32) -> u32 {
        if min >= max_exclusive {
            return min;
        }
        let range = max_exclusive - min;
        min + (self.next_u32() % range)
    }
}

impl<R: RandomStream + ?Sized> RandomStream for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_uniform01(&mut self) -> f64 {
        (**self).next_uniform01()
    }

    fn next_int_range(&mut self, min: u32, max_exclusive: u32) -> u32 {
        (**self).next_int_range(min, max_exclusive)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the LCG state: `state' = state * multiplier + increment (mod 2^64)`.
    #[inline]
    pub const fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    pub const fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Single stateless draw keyed by `seed`.
    pub const fn next_u32(seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Sequential PCG stream: the production [`RandomStream`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgStream {
    state: u64,
}

impl PcgStream {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Stream for one battle, derived from the save's game seed.
    pub fn for_battle(game_seed: u64, battle_id: u64) -> Self {
        Self::new(compute_seed(game_seed, battle_id, 0, 0))
    }

    /// Current state; a stream rebuilt from it continues the same sequence.
    pub const fn state(&self) -> u64 {
        self.state
    }
}

impl RandomStream for PcgStream {
    fn next_u32(&mut self) -> u32 {
        self.state = PcgRng::step(self.state);
        PcgRng::output(self.state)
    }
}

/// Scripted stream replaying fixed uniform draws, for tests and tooling.
///
/// Each scripted value is a uniform draw in `[0, 1)`; integer draws are
/// derived from it. Once the script runs out every further draw is `0.0`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SequenceStream {
    draws: Vec<f64>,
    cursor: usize,
}

impl SequenceStream {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of draws consumed so far, including draws past the script.
    pub const fn consumed(&self) -> usize {
        self.cursor
    }

    fn next_scripted(&mut self) -> f64 {
        let value = self.draws.get(self.cursor).copied().unwrap_or(0.0);
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

impl RandomStream for SequenceStream {
    fn next_u32(&mut self) -> u32 {
        (self.next_scripted() * (f64::from(u32::MAX) + 1.0)) as u32
    }

    fn next_uniform01(&mut self) -> f64 {
        self.next_scripted()
    }

    fn next_int_range(&mut self, min: u32, max_exclusive: u32) -> u32 {
        if min >= max_exclusive {
            return min;
        }
        let range = f64::from(max_exclusive - min);
        min + (self.next_scripted() * range) as u32
    }
}

/// Compute deterministic seed from game state components.
///
/// # Arguments
///
/// * `game_seed` - Base seed set at game start (for replay/determinism)
/// * `nonce` - Battle or turn sequence number
/// * `actor_id` - Participant the draw belongs to
/// * `context` - Additional context for several independent streams
pub fn compute_seed(game_seed: u64, nonce: u64, actor_id: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style combiners
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(actor_id).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
