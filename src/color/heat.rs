use crate::{color::Rgb, math8::scale8_video};

/// Map a heat value to a black-body style color
///
/// Ramps black -> red -> orange -> yellow -> white as `temperature` rises.
/// The ramp is monotonic: a hotter cell is never darker in any channel.
pub fn heat_color(temperature: u8) -> Rgb {
    // Rescale to 0..=191 so the ramp splits into three 64-step thirds
    let t192 = scale8_video(temperature, 191);
    let ramp = (t192 & 0x3F) << 2;

    if t192 & 0x80 != 0 {
        Rgb {
            r: 255,
            g: 255,
            b: ramp,
        }
    } else if t192 & 0x40 != 0 {
        Rgb {
            r: 255,
            g: ramp,
            b: 0,
        }
    } else {
        Rgb { r: ramp, g: 0, b: 0 }
    }
}
