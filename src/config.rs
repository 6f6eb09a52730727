//! Live show configuration and controller settings.

use embassy_time::Duration;

use crate::color::{Rgb, rgb_from_u32};

/// Firmware version reported to the companion app (divide by 100 for x.yz)
pub const FIRMWARE_VERSION: u16 = 191;

/// Number of configurable accent colors
pub const ACCENT_COUNT: usize = 5;

const COLOR_SLOT_ACCENT_1: u8 = 0;
const COLOR_SLOT_ACCENT_2: u8 = 1;
const COLOR_SLOT_ACCENT_3: u8 = 2;
const COLOR_SLOT_ACCENT_4: u8 = 3;
const COLOR_SLOT_ACCENT_5: u8 = 4;
const COLOR_SLOT_BACKGROUND: u8 = 5;

const MODE_ID_OFF: u8 = 0;
const MODE_ID_SOLID: u8 = 1;
const MODE_ID_FLASHING: u8 = 2;
const MODE_ID_RUNNING_PAIR: u8 = 3;
const MODE_ID_FIRE: u8 = 4;
const MODE_ID_BROADWAY: u8 = 5;
const MODE_ID_SHOW: u8 = 6;
const MODE_ID_SOLID_INDEXED: u8 = 7;
const MODE_ID_PALETTE: u8 = 8;
const MODE_ID_RAINBOW: u8 = 9;

const DEFAULT_ACCENTS: [Rgb; ACCENT_COUNT] = [
    rgb_from_u32(0xFF_7F_50), // coral
    rgb_from_u32(0xA9_A9_A9), // gun metal
    rgb_from_u32(0xDC_DC_DC), // silver
    rgb_from_u32(0x87_CE_EB), // sky blue
    rgb_from_u32(0xEE_82_EE), // violet
];
const DEFAULT_BACKGROUND: Rgb = rgb_from_u32(0xFF_FF_E0); // warm yellow
const DEFAULT_BRIGHTNESS: u8 = 50;

/// Reference to one of the configurable colors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorSlot {
    Accent1 = COLOR_SLOT_ACCENT_1,
    Accent2 = COLOR_SLOT_ACCENT_2,
    Accent3 = COLOR_SLOT_ACCENT_3,
    Accent4 = COLOR_SLOT_ACCENT_4,
    Accent5 = COLOR_SLOT_ACCENT_5,
    Background = COLOR_SLOT_BACKGROUND,
}

impl ColorSlot {
    /// Accent slots in wire order
    pub const ACCENTS: [Self; ACCENT_COUNT] = [
        Self::Accent1,
        Self::Accent2,
        Self::Accent3,
        Self::Accent4,
        Self::Accent5,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            COLOR_SLOT_ACCENT_1 => Self::Accent1,
            COLOR_SLOT_ACCENT_2 => Self::Accent2,
            COLOR_SLOT_ACCENT_3 => Self::Accent3,
            COLOR_SLOT_ACCENT_4 => Self::Accent4,
            COLOR_SLOT_ACCENT_5 => Self::Accent5,
            COLOR_SLOT_BACKGROUND => Self::Background,
            _ => return None,
        })
    }
}

/// Show mode selected by the companion app
///
/// Setting the mode only records it; the play command acts on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    Off = MODE_ID_OFF,
    /// Whole strip in accent color 1
    Solid = MODE_ID_SOLID,
    Flashing = MODE_ID_FLASHING,
    /// Two running lights
    RunningPair = MODE_ID_RUNNING_PAIR,
    Fire = MODE_ID_FIRE,
    Broadway = MODE_ID_BROADWAY,
    /// Randomized sequence of shows
    Show = MODE_ID_SHOW,
    /// Whole strip in the color picked by the play frame
    SolidIndexed = MODE_ID_SOLID_INDEXED,
    Palette = MODE_ID_PALETTE,
    Rainbow = MODE_ID_RAINBOW,
}

impl Mode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_OFF => Self::Off,
            MODE_ID_SOLID => Self::Solid,
            MODE_ID_FLASHING => Self::Flashing,
            MODE_ID_RUNNING_PAIR => Self::RunningPair,
            MODE_ID_FIRE => Self::Fire,
            MODE_ID_BROADWAY => Self::Broadway,
            MODE_ID_SHOW => Self::Show,
            MODE_ID_SOLID_INDEXED => Self::SolidIndexed,
            MODE_ID_PALETTE => Self::Palette,
            MODE_ID_RAINBOW => Self::Rainbow,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Solid => "solid",
            Self::Flashing => "flashing",
            Self::RunningPair => "running_pair",
            Self::Fire => "fire",
            Self::Broadway => "broadway",
            Self::Show => "show",
            Self::SolidIndexed => "solid_indexed",
            Self::Palette => "palette",
            Self::Rainbow => "rainbow",
        }
    }
}

/// Colors, brightness and mode as set over the radio link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowConfig {
    accents: [Rgb; ACCENT_COUNT],
    background: Rgb,
    brightness: u8,
    mode: u8,
    active: ColorSlot,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            accents: DEFAULT_ACCENTS,
            background: DEFAULT_BACKGROUND,
            brightness: DEFAULT_BRIGHTNESS,
            mode: MODE_ID_SOLID,
            active: ColorSlot::Accent1,
        }
    }
}

impl ShowConfig {
    /// Color currently stored in `slot`
    pub const fn color(&self, slot: ColorSlot) -> Rgb {
        match slot {
            ColorSlot::Background => self.background,
            accent => self.accents[accent as usize],
        }
    }

    fn color_mut(&mut self, slot: ColorSlot) -> &mut Rgb {
        match slot {
            ColorSlot::Background => &mut self.background,
            accent => &mut self.accents[accent as usize],
        }
    }

    /// Update the red and green channels of a color
    pub fn set_red_green(&mut self, slot: ColorSlot, r: u8, g: u8) {
        let color = self.color_mut(slot);
        color.r = r;
        color.g = g;
    }

    /// Update the blue channel of a color
    pub fn set_blue(&mut self, slot: ColorSlot, b: u8) {
        self.color_mut(slot).b = b;
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Raw mode value as last received
    pub const fn raw_mode(&self) -> u8 {
        self.mode
    }

    /// Decoded mode, `None` when the stored value is outside the mode table
    pub fn mode(&self) -> Option<Mode> {
        Mode::from_raw(self.mode)
    }

    pub fn set_mode(&mut self, mode: u8) {
        self.mode = mode;
    }

    /// Slot the running effects draw with
    pub const fn active_slot(&self) -> ColorSlot {
        self.active
    }

    /// Color the running effects draw with
    pub const fn active_color(&self) -> Rgb {
        self.color(self.active)
    }

    pub fn select_color(&mut self, slot: ColorSlot) {
        self.active = slot;
    }
}

/// Tick periods used when the play command starts a mode
#[derive(Debug, Clone, Copy)]
pub struct ModeTimings {
    /// Refresh period of the solid color modes
    pub solid: Duration,
    pub flashing: Duration,
    pub running: Duration,
    pub fire: Duration,
    pub broadway: Duration,
    pub palette: Duration,
    pub rainbow: Duration,
}

impl Default for ModeTimings {
    fn default() -> Self {
        Self {
            solid: Duration::from_millis(100),
            flashing: Duration::from_millis(500),
            running: Duration::from_millis(200),
            fire: Duration::from_millis(100),
            broadway: Duration::from_millis(200),
            palette: Duration::from_millis(10),
            rainbow: Duration::from_millis(10),
        }
    }
}

/// Configuration for the show controller
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Reported in reply to the version query
    pub firmware_version: u16,
    /// How often the randomized show picks a new effect
    pub show_interval: Duration,
    pub timings: ModeTimings,
    /// Configuration in effect at power-on
    pub defaults: ShowConfig,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            firmware_version: FIRMWARE_VERSION,
            show_interval: Duration::from_secs(10),
            timings: ModeTimings::default(),
            defaults: ShowConfig::default(),
        }
    }
}
