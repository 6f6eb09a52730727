//! Randomness provider threaded through every effect and show selection.
//!
//! Effects never reach for a global generator: the caller injects a
//! [`Random`] so that two runs with the same seed draw identical frames.

/// Source of pseudo-random numbers
///
/// Only [`Random::random16`] is required; the 8-bit helpers follow the
/// ranges of `FastLED`'s `random8`/`random16` family.
pub trait Random {
    /// Next raw 16-bit value
    fn random16(&mut self) -> u16;

    /// Next 8-bit value
    #[allow(clippy::cast_possible_truncation)]
    fn random8(&mut self) -> u8 {
        let value = self.random16();
        (value as u8).wrapping_add((value >> 8) as u8)
    }

    /// Value in `0..limit` (0 when `limit` is 0)
    #[allow(clippy::cast_possible_truncation)]
    fn random8_below(&mut self, limit: u8) -> u8 {
        ((u16::from(self.random8()) * u16::from(limit)) >> 8) as u8
    }

    /// Value in `min..limit`
    fn random8_between(&mut self, min: u8, limit: u8) -> u8 {
        min + self.random8_below(limit.saturating_sub(min))
    }

    /// Value in `0..limit` (0 when `limit` is 0)
    #[allow(clippy::cast_possible_truncation)]
    fn random16_below(&mut self, limit: u16) -> u16 {
        ((u32::from(self.random16()) * u32::from(limit)) >> 16) as u16
    }

    /// Index in `0..len`, for picking from a table
    #[allow(clippy::cast_possible_truncation)]
    fn pick(&mut self, len: usize) -> usize {
        let limit = len.min(usize::from(u16::MAX)) as u16;
        usize::from(self.random16_below(limit))
    }
}

const FAST_RANDOM_MUL: u16 = 2053;
const FAST_RANDOM_ADD: u16 = 13849;

/// 16-bit linear congruential generator
///
/// Tiny and fast; good enough for sparks, glitter and show shuffling.
#[derive(Debug, Clone)]
pub struct FastRandom {
    seed: u16,
}

impl FastRandom {
    /// Create a generator from a seed
    pub const fn new(seed: u16) -> Self {
        Self { seed }
    }

    /// Mix extra entropy (e.g. radio noise or uptime) into the state
    pub fn add_entropy(&mut self, entropy: u16) {
        self.seed = self.seed.wrapping_add(entropy);
    }
}

impl Default for FastRandom {
    fn default() -> Self {
        Self::new(1337)
    }
}

impl Random for FastRandom {
    fn random16(&mut self) -> u16 {
        self.seed = self
            .seed
            .wrapping_mul(FAST_RANDOM_MUL)
            .wrapping_add(FAST_RANDOM_ADD);
        self.seed
    }
}
