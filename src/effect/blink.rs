//! Flashing and "broadway" marquee effects
//!
//! Both toggle a blink flag on every tick. Flashing switches the whole
//! strip between the color and black; broadway alternates even and odd
//! pixels.

use super::{Effect, TickContext};
use crate::{
    color::{BLACK, Rgb},
    random::Random,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkPattern {
    /// All pixels on, then all off
    Flash,
    /// Even pixels on, then odd pixels on
    Broadway,
}

#[derive(Debug, Clone)]
pub struct BlinkEffect {
    pattern: BlinkPattern,
    lit: bool,
}

impl BlinkEffect {
    pub const fn new(pattern: BlinkPattern) -> Self {
        Self {
            pattern,
            lit: false,
        }
    }

    pub const fn pattern(&self) -> BlinkPattern {
        self.pattern
    }

    /// Phase drawn by the last tick: whole strip (flash) or even pixels
    /// (broadway) lit
    pub const fn is_lit(&self) -> bool {
        self.lit
    }
}

impl Effect for BlinkEffect {
    fn tick<R: Random>(&mut self, ctx: &mut TickContext<'_, R>, leds: &mut [Rgb]) {
        self.lit = !self.lit;

        match self.pattern {
            BlinkPattern::Flash => {
                leds.fill(if self.lit { ctx.color } else { BLACK });
            }
            BlinkPattern::Broadway => {
                for (index, led) in leds.iter_mut().enumerate() {
                    let even = index % 2 == 0;
                    *led = if even == self.lit { ctx.color } else { BLACK };
                }
            }
        }
    }

    fn reset(&mut self) {
        self.lit = false;
    }
}
