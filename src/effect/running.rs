//! Running lights
//!
//! A handful of single-pixel runners travel around the strip, each in its
//! own direction, wrapping at both ends.

use heapless::Vec;

use super::{Effect, TickContext};
use crate::{
    color::{BLACK, Rgb},
    random::Random,
};

/// Maximum number of runners on the strip
pub const MAX_RUNNERS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the far end of the strip
    Forward,
    /// Toward index 0
    Backward,
}

/// A single running pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Runner {
    position: usize,
    direction: Direction,
}

impl Runner {
    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Move one pixel, wrapping within `0..count`
    fn step(&mut self, count: usize) {
        self.position = match self.direction {
            Direction::Forward => (self.position + 1) % count,
            Direction::Backward if self.position == 0 || self.position >= count => count - 1,
            Direction::Backward => self.position - 1,
        };
    }
}

#[derive(Debug, Clone)]
pub struct RunningLightsEffect {
    requested: u8,
    runners: Vec<Runner, MAX_RUNNERS>,
}

impl RunningLightsEffect {
    /// Spread up to [`MAX_RUNNERS`] runners evenly over the strip, each with a
    /// random direction
    pub fn new<R: Random>(runners: u8, pixel_count: usize, rng: &mut R) -> Self {
        let mut effect = Self {
            requested: runners,
            runners: Vec::new(),
        };
        let count = usize::from(runners).min(MAX_RUNNERS);
        if count == 0 || pixel_count == 0 {
            return effect;
        }

        let spacing = pixel_count / count;
        for index in 0..count {
            let direction = if rng.random8() & 1 == 0 {
                Direction::Forward
            } else {
                Direction::Backward
            };
            let runner = Runner {
                position: (index * spacing) % pixel_count,
                direction,
            };
            // Cannot fail: count is capped at capacity
            let _ = effect.runners.push(runner);
        }
        effect
    }

    /// Runner count as requested when started
    pub const fn requested(&self) -> u8 {
        self.requested
    }

    pub fn runners(&self) -> &[Runner] {
        &self.runners
    }
}

impl Effect for RunningLightsEffect {
    fn tick<R: Random>(&mut self, ctx: &mut TickContext<'_, R>, leds: &mut [Rgb]) {
        let count = leds.len();
        if count == 0 {
            return;
        }

        // Blank everything first so a runner never erases another one
        for runner in &self.runners {
            if let Some(led) = leds.get_mut(runner.position) {
                *led = BLACK;
            }
        }
        for runner in &mut self.runners {
            runner.step(count);
            leds[runner.position] = ctx.color;
        }
    }
}
