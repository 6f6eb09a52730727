mod gradient;
mod heat;
mod palette;
mod utils;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use gradient::fill_rainbow;
pub use heat::heat_color;
pub use palette::{Blend, Palette16, color_from_palette};
pub use utils::{
    BLACK, WHITE, add_saturating, blend_colors, fade_to_black_by, hsv, hsv2rgb, max_channels,
    rgb_from_u32, scale_color,
};

pub type Rgb = RGB8;
pub type Hsv = HSV;
