//! Output post-processing applied when the frame buffer is flushed.

use crate::color::{BLACK, Rgb, scale_color};

/// Global output brightness
///
/// Mirrors a strip driver's master brightness: effects draw at full scale
/// and the filter scales each pixel on its way to the sink. The configured
/// level is the base; an effect may run at its own fixed level until the
/// next brightness change or effect start.
#[derive(Debug, Clone)]
pub(crate) struct BrightnessFilter {
    base: u8,
    current: u8,
}

impl BrightnessFilter {
    pub(crate) const fn new(brightness: u8) -> Self {
        Self {
            base: brightness,
            current: brightness,
        }
    }

    pub(crate) const fn current(&self) -> u8 {
        self.current
    }

    /// Set the configured level, effective immediately
    pub(crate) fn set(&mut self, brightness: u8) {
        self.base = brightness;
        self.current = brightness;
    }

    /// Switch to an effect's fixed level, or back to the configured one
    pub(crate) fn set_effect_level(&mut self, level: Option<u8>) {
        self.current = level.unwrap_or(self.base);
    }

    /// Scale one pixel by the current brightness
    pub(crate) fn apply(&self, color: Rgb) -> Rgb {
        match self.current {
            255 => color,
            0 => BLACK,
            level => scale_color(color, level),
        }
    }
}
