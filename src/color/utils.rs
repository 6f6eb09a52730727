pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::{Hsv, Rgb},
    math8::{blend8, qadd8, scale8},
};

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// All channels full
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Shorthand for converting hue/saturation/value to RGB
#[inline]
pub fn hsv(hue: u8, sat: u8, val: u8) -> Rgb {
    hsv2rgb(Hsv { hue, sat, val })
}

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Scale every channel of a color (0-255 = 0.0-1.0)
#[inline]
pub fn scale_color(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}

/// Per-channel saturating add
#[inline]
pub fn add_saturating(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: qadd8(a.r, b.r),
        g: qadd8(a.g, b.g),
        b: qadd8(a.b, b.b),
    }
}

/// Per-channel maximum
#[inline]
pub fn max_channels(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.max(b.r),
        g: a.g.max(b.g),
        b: a.b.max(b.b),
    }
}

/// Dim every pixel toward black by `amount` (255 = fully black)
pub fn fade_to_black_by(leds: &mut [Rgb], amount: u8) {
    let keep = 255 - amount;
    for led in leds {
        *led = scale_color(*led, keep);
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
