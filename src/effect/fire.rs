//! Fire simulation
//!
//! One heat cell per pixel. Every tick the cells cool a little, heat
//! drifts away from the origin, new sparks ignite near the origin, and the
//! heat is mapped onto a black-body color ramp.

use super::{Effect, TickContext};
use crate::{
    color::{Rgb, heat_color},
    math8::{qadd8, qsub8},
    random::Random,
};

/// How much the air cools as it rises (higher = shorter flames)
const COOLING: usize = 55;

/// Chance (out of 255) that a new spark ignites on a tick
const SPARKING: u8 = 120;

/// Number of cells near the origin where sparks can appear
const SPARK_ZONE: usize = 7;

/// Range of heat added by a spark
const SPARK_HEAT_MIN: u8 = 160;
const SPARK_HEAT_LIMIT: u8 = 255;

/// Fire effect over a heat buffer of `N` cells
#[derive(Debug, Clone)]
pub struct FireEffect<const N: usize> {
    heat: [u8; N],
    reverse: bool,
}

impl<const N: usize> Default for FireEffect<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FireEffect<N> {
    pub const fn new() -> Self {
        Self {
            heat: [0; N],
            reverse: false,
        }
    }

    /// Burn from the far end of the strip toward index 0
    #[must_use]
    pub const fn with_reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Current heat cells
    pub fn heat(&self) -> &[u8] {
        &self.heat
    }

    #[allow(clippy::cast_possible_truncation)]
    fn step<R: Random>(&mut self, rng: &mut R, count: usize) {
        let heat = &mut self.heat[..count];

        // Cool down every cell a little
        let cooldown_limit = ((COOLING * 10) / count + 2).min(255) as u8;
        for cell in heat.iter_mut() {
            *cell = qsub8(*cell, rng.random8_below(cooldown_limit));
        }

        // Heat drifts away from the origin and diffuses a little
        for k in (2..count).rev() {
            let below = u16::from(heat[k - 1]) + 2 * u16::from(heat[k - 2]);
            heat[k] = (below / 3) as u8;
        }

        // Randomly ignite a new spark near the origin
        if rng.random8() < SPARKING {
            let zone = SPARK_ZONE.min(count) as u8;
            let y = usize::from(rng.random8_below(zone));
            let spark = rng.random8_between(SPARK_HEAT_MIN, SPARK_HEAT_LIMIT);
            heat[y] = qadd8(heat[y], spark);
        }
    }
}

impl<const N: usize> Effect for FireEffect<N> {
    fn tick<R: Random>(&mut self, ctx: &mut TickContext<'_, R>, leds: &mut [Rgb]) {
        let count = leds.len().min(N);
        if count == 0 {
            return;
        }

        self.step(ctx.rng, count);

        for (cell, &heat) in self.heat[..count].iter().enumerate() {
            let pixel = if self.reverse { count - 1 - cell } else { cell };
            leds[pixel] = heat_color(heat);
        }
    }

    fn reset(&mut self) {
        self.heat = [0; N];
    }
}
