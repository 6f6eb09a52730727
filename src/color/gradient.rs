use crate::color::{Hsv, Rgb, hsv2rgb};

const RAINBOW_SATURATION: u8 = 240;

/// Fill with a rainbow starting at `initial_hue`, stepping the hue by
/// `delta_hue` on each pixel
pub fn fill_rainbow(leds: &mut [Rgb], initial_hue: u8, delta_hue: u8) {
    let mut hue = initial_hue;
    for led in leds {
        *led = hsv2rgb(Hsv {
            hue,
            sat: RAINBOW_SATURATION,
            val: 255,
        });
        hue = hue.wrapping_add(delta_hue);
    }
}
