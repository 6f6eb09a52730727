//! 16-entry color palettes
//!
//! A palette is sampled with an 8-bit index: the high nibble picks the entry
//! and the low nibble is the position between that entry and the next one.

use crate::{
    color::{BLACK, Rgb, blend_colors, hsv, rgb_from_u32, scale_color},
    random::Random,
};

const HUE_ORANGE: u8 = 32;
const HUE_PURPLE: u8 = 192;

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),* $(,)?) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

const ORANGE: u32 = 0xFF_A5_00;
const GRAY: u32 = 0x80_80_80;
const BLUE: u32 = 0x00_00_FF;
const DARK_BLUE: u32 = 0x00_00_8B;
const DARK_MAGENTA: u32 = 0x8B_00_8B;
const SKY_BLUE: u32 = 0x87_CE_EB;
const LIGHT_BLUE: u32 = 0xAD_D8_E6;
const WHITE: u32 = 0xFF_FF_FF;
const FUCHSIA: u32 = 0xFF_00_FF;

#[allow(clippy::unreadable_literal)]
const RAINBOW: [Rgb; 16] = hex_palette![
    0xFF0000, 0xD52A00, 0xAB5500, 0xAB7F00, 0xABAB00, 0x56D500, 0x00FF00, 0x00D52A, 0x00AB55,
    0x0056AA, 0x0000FF, 0x2A00D5, 0x5500AB, 0x7F0081, 0xAB0055, 0xD5002B,
];

#[allow(clippy::unreadable_literal)]
const RAINBOW_STRIPE: [Rgb; 16] = hex_palette![
    0xFF0000, 0x000000, 0xAB5500, 0x000000, 0xABAB00, 0x000000, 0x00FF00, 0x000000, 0x00AB55,
    0x000000, 0x0000FF, 0x000000, 0x5500AB, 0x000000, 0xAB0055, 0x000000,
];

const CLOUD: [Rgb; 16] = hex_palette![
    BLUE, DARK_BLUE, DARK_BLUE, DARK_BLUE, DARK_BLUE, DARK_BLUE, DARK_BLUE, DARK_BLUE, BLUE,
    DARK_BLUE, SKY_BLUE, SKY_BLUE, LIGHT_BLUE, WHITE, LIGHT_BLUE, SKY_BLUE,
];

#[allow(clippy::unreadable_literal)]
const PARTY: [Rgb; 16] = hex_palette![
    0x5500AB, 0x84007C, 0xB5004B, 0xE5001B, 0xE81700, 0xB84700, 0xAB7700, 0xABAB00, 0xAB5500,
    0xDD2200, 0xF2000E, 0xC2003E, 0x8F0071, 0x5F00A1, 0x2F00D0, 0x0007F9,
];

// Gray stands in for white, which overpowers the other entries
const RED_WHITE_BLUE: [Rgb; 16] = hex_palette![
    ORANGE,
    GRAY,
    BLUE,
    DARK_MAGENTA,
    ORANGE,
    GRAY,
    BLUE,
    DARK_MAGENTA,
    ORANGE,
    ORANGE,
    GRAY,
    GRAY,
    BLUE,
    BLUE,
    DARK_MAGENTA,
    DARK_MAGENTA,
];

/// How to sample between two palette entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blend {
    /// Snap to the entry selected by the high nibble
    None,
    /// Interpolate toward the next entry using the low nibble
    Linear,
}

/// Fixed 16-entry color table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette16 {
    entries: [Rgb; 16],
}

impl Palette16 {
    pub const fn new(entries: [Rgb; 16]) -> Self {
        Self { entries }
    }

    /// Evenly spaced hues around the color wheel
    pub const fn rainbow() -> Self {
        Self::new(RAINBOW)
    }

    /// Rainbow hues separated by black gaps
    pub const fn rainbow_stripe() -> Self {
        Self::new(RAINBOW_STRIPE)
    }

    /// Blues and whites
    pub const fn cloud() -> Self {
        Self::new(CLOUD)
    }

    /// Warm party hues, no greens
    pub const fn party() -> Self {
        Self::new(PARTY)
    }

    /// Orange, gray, blue and dark magenta bands
    pub const fn red_white_blue() -> Self {
        Self::new(RED_WHITE_BLUE)
    }

    /// Fuchsia on every fourth entry, black elsewhere
    pub const fn black_and_fuchsia() -> Self {
        let mut entries = [BLACK; 16];
        let fuchsia = rgb_from_u32(FUCHSIA);
        entries[0] = fuchsia;
        entries[4] = fuchsia;
        entries[8] = fuchsia;
        entries[12] = fuchsia;
        Self { entries }
    }

    /// Paired purple and orange stripes with black gaps
    pub fn purple_and_orange() -> Self {
        let purple = hsv(HUE_PURPLE, 255, 255);
        let orange = hsv(HUE_ORANGE, 255, 255);
        Self::new([
            orange, orange, BLACK, BLACK, purple, purple, BLACK, BLACK, orange, orange, BLACK,
            BLACK, purple, purple, BLACK, BLACK,
        ])
    }

    /// Fully saturated random hues at random brightness
    pub fn random<R: Random>(rng: &mut R) -> Self {
        let mut entries = [BLACK; 16];
        for entry in &mut entries {
            let hue = rng.random8();
            let val = rng.random8();
            *entry = hsv(hue, 255, val);
        }
        Self { entries }
    }

    /// Entry at `index` (wrapping at 16)
    pub const fn entry(&self, index: usize) -> Rgb {
        self.entries[index % 16]
    }
}

impl Default for Palette16 {
    fn default() -> Self {
        Self::rainbow()
    }
}

/// Sample a palette at an 8-bit position and scale by `brightness`
pub fn color_from_palette(palette: &Palette16, index: u8, brightness: u8, blend: Blend) -> Rgb {
    let hi4 = usize::from(index >> 4);
    let lo4 = index & 0x0F;

    let entry = palette.entry(hi4);
    let color = if lo4 != 0 && blend == Blend::Linear {
        blend_colors(entry, palette.entry(hi4 + 1), lo4 << 4)
    } else {
        entry
    };

    if brightness == 255 {
        color
    } else {
        scale_color(color, brightness)
    }
}
