//! Palette cycling show
//!
//! Scrolls a 16-entry palette along the strip. The palette itself is
//! swapped on a wall-clock schedule keyed on the second hand of uptime,
//! independent of the tick period.

use embassy_time::Instant;

use super::{Effect, TickContext};
use crate::{
    color::{Blend, Palette16, Rgb, color_from_palette},
    random::Random,
};

/// Sample index advance per tick (scroll speed)
const SAMPLE_STEP: u8 = 1;

/// Palette index distance between neighbouring pixels
const PIXEL_STEP: u8 = 3;

const SHOW_BRIGHTNESS: u8 = 60;

#[derive(Debug, Clone)]
pub struct PaletteShowEffect {
    palette: Palette16,
    blend: Blend,
    sample_index: u8,
    last_second: Option<u8>,
}

impl Default for PaletteShowEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteShowEffect {
    pub const fn new() -> Self {
        Self {
            palette: Palette16::rainbow(),
            blend: Blend::Linear,
            sample_index: 0,
            last_second: None,
        }
    }

    pub const fn palette(&self) -> &Palette16 {
        &self.palette
    }

    pub const fn blend(&self) -> Blend {
        self.blend
    }

    /// Palette index sampled by the first pixel on the last tick
    pub const fn sample_index(&self) -> u8 {
        self.sample_index
    }

    /// Swap the palette when the second hand reaches a scheduled mark
    #[allow(clippy::cast_possible_truncation)]
    fn change_palette_periodically<R: Random>(&mut self, now: Instant, rng: &mut R) {
        let second = (now.as_secs() % 60) as u8;
        if self.last_second == Some(second) {
            return;
        }
        self.last_second = Some(second);

        let (palette, blend) = match second {
            0 => (Palette16::rainbow(), Blend::Linear),
            10 => (Palette16::rainbow_stripe(), Blend::None),
            15 => (Palette16::rainbow_stripe(), Blend::Linear),
            20 => (Palette16::purple_and_orange(), Blend::Linear),
            25 => (Palette16::random(rng), Blend::Linear),
            30 => (Palette16::black_and_fuchsia(), Blend::None),
            35 => (Palette16::black_and_fuchsia(), Blend::Linear),
            40 => (Palette16::cloud(), Blend::Linear),
            45 => (Palette16::party(), Blend::Linear),
            50 => (Palette16::red_white_blue(), Blend::None),
            55 => (Palette16::red_white_blue(), Blend::Linear),
            _ => return,
        };
        self.palette = palette;
        self.blend = blend;
    }
}

impl Effect for PaletteShowEffect {
    const BRIGHTNESS: Option<u8> = Some(SHOW_BRIGHTNESS);

    fn tick<R: Random>(&mut self, ctx: &mut TickContext<'_, R>, leds: &mut [Rgb]) {
        self.change_palette_periodically(ctx.now, ctx.rng);

        self.sample_index = self.sample_index.wrapping_add(SAMPLE_STEP);

        let mut index = self.sample_index;
        for led in leds {
            *led = color_from_palette(&self.palette, index, 255, self.blend);
            index = index.wrapping_add(PIXEL_STEP);
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
