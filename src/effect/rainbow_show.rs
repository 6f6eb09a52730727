//! Rainbow show: a rotation of ambient generative patterns
//!
//! Every pattern is driven by a shared base hue that creeps around the
//! color wheel on its own cadence, independent of the tick period. The
//! trail-leaving patterns fade the previous frame toward black before
//! drawing, so the frame buffer doubles as their state.

use embassy_time::{Duration, Instant};

use super::{Effect, TickContext};
use crate::{
    color::{
        Blend, Palette16, Rgb, WHITE, add_saturating, color_from_palette, fade_to_black_by,
        fill_rainbow, hsv, max_channels,
    },
    math8::{beatsin8, beatsin16},
    random::Random,
};

const HUE_STEP_PERIOD: Duration = Duration::from_millis(20);
const PATTERN_PERIOD: Duration = Duration::from_secs(3);

const RAINBOW_DELTA_HUE: u8 = 7;
const GLITTER_CHANCE: u8 = 80;
const CONFETTI_FADE: u8 = 10;
const CONFETTI_HUE_SPREAD: u8 = 64;
const TRAIL_FADE: u8 = 20;
const SINELON_BPM: u16 = 13;
const JUGGLE_DOTS: u16 = 8;
const JUGGLE_HUE_STEP: u8 = 32;
const BPM_BEATS_PER_MINUTE: u16 = 62;

const SHOW_BRIGHTNESS: u8 = 96;

/// Patterns the rainbow show rotates through, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbientPattern {
    /// Rainbow sweeping along the strip
    Rainbow,
    /// Rainbow with occasional white sparkles
    RainbowWithGlitter,
    /// Random colored speckles that fade out
    Confetti,
    /// A dot sweeping back and forth with a fading trail
    Sinelon,
    /// Eight dots weaving in and out of sync
    Juggle,
    /// Stripes pulsing at a fixed tempo
    Bpm,
}

impl AmbientPattern {
    pub const ALL: [Self; 6] = [
        Self::Rainbow,
        Self::RainbowWithGlitter,
        Self::Confetti,
        Self::Sinelon,
        Self::Juggle,
        Self::Bpm,
    ];

    /// Following pattern, wrapping around at the end
    pub const fn next(self) -> Self {
        match self {
            Self::Rainbow => Self::RainbowWithGlitter,
            Self::RainbowWithGlitter => Self::Confetti,
            Self::Confetti => Self::Sinelon,
            Self::Sinelon => Self::Juggle,
            Self::Juggle => Self::Bpm,
            Self::Bpm => Self::Rainbow,
        }
    }
}

/// Fires once per `period`, starting the clock at the first check
#[derive(Debug, Clone, Default)]
struct Cadence {
    last: Option<Instant>,
}

impl Cadence {
    fn elapsed(&mut self, now: Instant, period: Duration) -> bool {
        let Some(last) = self.last else {
            self.last = Some(now);
            return false;
        };
        let due = now
            .checked_duration_since(last)
            .is_some_and(|elapsed| elapsed >= period);
        if due {
            self.last = Some(now);
        }
        due
    }
}

#[derive(Debug, Clone)]
pub struct RainbowShowEffect {
    pattern: AmbientPattern,
    hue: u8,
    hue_cadence: Cadence,
    pattern_cadence: Cadence,
}

impl Default for RainbowShowEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl RainbowShowEffect {
    pub const fn new() -> Self {
        Self {
            pattern: AmbientPattern::Rainbow,
            hue: 0,
            hue_cadence: Cadence { last: None },
            pattern_cadence: Cadence { last: None },
        }
    }

    /// Start from a specific pattern instead of the plain rainbow
    #[must_use]
    pub const fn with_pattern(mut self, pattern: AmbientPattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub const fn pattern(&self) -> AmbientPattern {
        self.pattern
    }

    /// Base hue shared by all patterns
    pub const fn hue(&self) -> u8 {
        self.hue
    }

    fn rainbow(&self, leds: &mut [Rgb]) {
        fill_rainbow(leds, self.hue, RAINBOW_DELTA_HUE);
    }

    fn rainbow_with_glitter<R: Random>(&self, rng: &mut R, leds: &mut [Rgb]) {
        self.rainbow(leds);
        if rng.random8() < GLITTER_CHANCE {
            let pos = rng.pick(leds.len());
            leds[pos] = add_saturating(leds[pos], WHITE);
        }
    }

    fn confetti<R: Random>(&self, rng: &mut R, leds: &mut [Rgb]) {
        fade_to_black_by(leds, CONFETTI_FADE);
        let pos = rng.pick(leds.len());
        let hue = self.hue.wrapping_add(rng.random8_below(CONFETTI_HUE_SPREAD));
        leds[pos] = add_saturating(leds[pos], hsv(hue, 200, 255));
    }

    fn sinelon(&self, now: Instant, leds: &mut [Rgb]) {
        fade_to_black_by(leds, TRAIL_FADE);
        let pos = wave_position(SINELON_BPM, now, leds.len());
        leds[pos] = add_saturating(leds[pos], hsv(self.hue, 255, 192));
    }

    fn juggle(now: Instant, leds: &mut [Rgb]) {
        fade_to_black_by(leds, TRAIL_FADE);
        let mut dot_hue: u8 = 0;
        for dot in 0..JUGGLE_DOTS {
            let pos = wave_position(dot + 7, now, leds.len());
            leds[pos] = max_channels(leds[pos], hsv(dot_hue, 200, 255));
            dot_hue = dot_hue.wrapping_add(JUGGLE_HUE_STEP);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn bpm(&self, now: Instant, leds: &mut [Rgb]) {
        let palette = Palette16::party();
        let beat = beatsin8(BPM_BEATS_PER_MINUTE, now, 64, 255);
        for (i, led) in leds.iter_mut().enumerate() {
            // Indices wrap on purpose
            let i = i as u8;
            let index = self.hue.wrapping_add(i.wrapping_mul(2));
            let brightness = beat
                .wrapping_sub(self.hue)
                .wrapping_add(i.wrapping_mul(10));
            *led = color_from_palette(&palette, index, brightness, Blend::Linear);
        }
    }
}

/// Position of a sine-swept dot, always inside `0..count`
#[allow(clippy::cast_possible_truncation)]
fn wave_position(bpm: u16, now: Instant, count: usize) -> usize {
    let high = count.min(usize::from(u16::MAX)) as u16;
    usize::from(beatsin16(bpm, now, 0, high)).min(count - 1)
}

impl Effect for RainbowShowEffect {
    const BRIGHTNESS: Option<u8> = Some(SHOW_BRIGHTNESS);

    fn tick<R: Random>(&mut self, ctx: &mut TickContext<'_, R>, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        match self.pattern {
            AmbientPattern::Rainbow => self.rainbow(leds),
            AmbientPattern::RainbowWithGlitter => self.rainbow_with_glitter(ctx.rng, leds),
            AmbientPattern::Confetti => self.confetti(ctx.rng, leds),
            AmbientPattern::Sinelon => self.sinelon(ctx.now, leds),
            AmbientPattern::Juggle => Self::juggle(ctx.now, leds),
            AmbientPattern::Bpm => self.bpm(ctx.now, leds),
        }

        if self.hue_cadence.elapsed(ctx.now, HUE_STEP_PERIOD) {
            self.hue = self.hue.wrapping_add(1);
        }
        if self.pattern_cadence.elapsed(ctx.now, PATTERN_PERIOD) {
            self.pattern = self.pattern.next();
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
