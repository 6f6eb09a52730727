//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait and keeps its own state, so a
//! restart of the same effect can pick up where it left off.

mod blink;
mod fire;
mod palette_show;
mod rainbow_show;
mod running;
mod solid;

use embassy_time::Instant;

pub use blink::{BlinkEffect, BlinkPattern};
pub use fire::FireEffect;
pub use palette_show::PaletteShowEffect;
pub use rainbow_show::{AmbientPattern, RainbowShowEffect};
pub use running::{Direction, MAX_RUNNERS, Runner, RunningLightsEffect};
pub use solid::SolidEffect;

use crate::{color::Rgb, config::ColorSlot, random::Random};

const EFFECT_NAME_SOLID: &str = "solid";
const EFFECT_NAME_FLASHING: &str = "flashing";
const EFFECT_NAME_BROADWAY: &str = "broadway";
const EFFECT_NAME_RUNNING_LIGHTS: &str = "running_lights";
const EFFECT_NAME_FIRE: &str = "fire";
const EFFECT_NAME_PALETTE_SHOW: &str = "palette_show";
const EFFECT_NAME_RAINBOW_SHOW: &str = "rainbow_show";

/// Inputs shared by every effect for one tick
pub struct TickContext<'a, R: Random> {
    /// Time of this tick
    pub now: Instant,
    /// Color the effect should draw with
    pub color: Rgb,
    /// Randomness for sparks, glitter and direction picks
    pub rng: &'a mut R,
}

pub trait Effect {
    /// Fixed output brightness this effect runs at
    ///
    /// `None` keeps the configured brightness.
    const BRIGHTNESS: Option<u8> = None;

    /// Draw the next frame into `leds`
    fn tick<R: Random>(&mut self, ctx: &mut TickContext<'_, R>, leds: &mut [Rgb]);

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Known effects that can be started, with their parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectId {
    /// Whole strip in one configured color
    Solid(ColorSlot),
    Flashing,
    Broadway,
    /// Running lights with the given number of runners
    RunningLights(u8),
    Fire,
    PaletteShow,
    RainbowShow,
}

impl EffectId {
    /// Build fresh effect state for a strip of `pixel_count` pixels
    pub fn to_slot<R: Random, const N: usize>(
        self,
        pixel_count: usize,
        rng: &mut R,
    ) -> EffectSlot<N> {
        match self {
            Self::Solid(slot) => EffectSlot::Solid(SolidEffect::new(slot)),
            Self::Flashing => EffectSlot::Flashing(BlinkEffect::new(BlinkPattern::Flash)),
            Self::Broadway => EffectSlot::Broadway(BlinkEffect::new(BlinkPattern::Broadway)),
            Self::RunningLights(runners) => {
                EffectSlot::RunningLights(RunningLightsEffect::new(runners, pixel_count, rng))
            }
            Self::Fire => EffectSlot::Fire(FireEffect::new()),
            Self::PaletteShow => EffectSlot::PaletteShow(PaletteShowEffect::new()),
            Self::RainbowShow => EffectSlot::RainbowShow(RainbowShowEffect::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid(_) => EFFECT_NAME_SOLID,
            Self::Flashing => EFFECT_NAME_FLASHING,
            Self::Broadway => EFFECT_NAME_BROADWAY,
            Self::RunningLights(_) => EFFECT_NAME_RUNNING_LIGHTS,
            Self::Fire => EFFECT_NAME_FIRE,
            Self::PaletteShow => EFFECT_NAME_PALETTE_SHOW,
            Self::RainbowShow => EFFECT_NAME_RAINBOW_SHOW,
        }
    }
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot<const N: usize> {
    Solid(SolidEffect),
    Flashing(BlinkEffect),
    Broadway(BlinkEffect),
    RunningLights(RunningLightsEffect),
    Fire(FireEffect<N>),
    PaletteShow(PaletteShowEffect),
    RainbowShow(RainbowShowEffect),
}

impl<const N: usize> EffectSlot<N> {
    /// Fixed output brightness of the current effect
    ///
    /// Derived from each effect's `Effect::BRIGHTNESS` constant.
    pub fn brightness(&self) -> Option<u8> {
        match self {
            Self::Solid(_) => SolidEffect::BRIGHTNESS,
            Self::Flashing(_) | Self::Broadway(_) => BlinkEffect::BRIGHTNESS,
            Self::RunningLights(_) => RunningLightsEffect::BRIGHTNESS,
            Self::Fire(_) => FireEffect::<N>::BRIGHTNESS,
            Self::PaletteShow(_) => PaletteShowEffect::BRIGHTNESS,
            Self::RainbowShow(_) => RainbowShowEffect::BRIGHTNESS,
        }
    }

    /// Advance the current effect by one tick
    pub fn tick<R: Random>(&mut self, ctx: &mut TickContext<'_, R>, leds: &mut [Rgb]) {
        match self {
            Self::Solid(effect) => effect.tick(ctx, leds),
            Self::Flashing(effect) | Self::Broadway(effect) => effect.tick(ctx, leds),
            Self::RunningLights(effect) => effect.tick(ctx, leds),
            Self::Fire(effect) => effect.tick(ctx, leds),
            Self::PaletteShow(effect) => effect.tick(ctx, leds),
            Self::RainbowShow(effect) => effect.tick(ctx, leds),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Solid(effect) => Effect::reset(effect),
            Self::Flashing(effect) | Self::Broadway(effect) => Effect::reset(effect),
            Self::RunningLights(effect) => Effect::reset(effect),
            Self::Fire(effect) => Effect::reset(effect),
            Self::PaletteShow(effect) => Effect::reset(effect),
            Self::RainbowShow(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Solid(effect) => EffectId::Solid(effect.slot()),
            Self::Flashing(_) => EffectId::Flashing,
            Self::Broadway(_) => EffectId::Broadway,
            Self::RunningLights(effect) => EffectId::RunningLights(effect.requested()),
            Self::Fire(_) => EffectId::Fire,
            Self::PaletteShow(_) => EffectId::PaletteShow,
            Self::RainbowShow(_) => EffectId::RainbowShow,
        }
    }
}
