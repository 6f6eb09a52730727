//! Solid color fill effect
//!
//! Fills all LEDs with the color of one configured slot. The color is
//! resolved on every tick, so edits to the slot show on the next frame.

use super::{Effect, TickContext};
use crate::{color::Rgb, config::ColorSlot, random::Random};

/// Solid color effect - fills all LEDs with one color
#[derive(Debug, Clone)]
pub struct SolidEffect {
    slot: ColorSlot,
}

impl SolidEffect {
    /// Create a new solid effect drawing from `slot`
    pub const fn new(slot: ColorSlot) -> Self {
        Self { slot }
    }

    pub const fn slot(&self) -> ColorSlot {
        self.slot
    }
}

impl Effect for SolidEffect {
    fn tick<R: Random>(&mut self, ctx: &mut TickContext<'_, R>, leds: &mut [Rgb]) {
        leds.fill(ctx.color);
    }
}
