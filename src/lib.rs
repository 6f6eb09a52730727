#![no_std]

pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod effect;
mod filter;
pub mod link;
pub mod math8;
pub mod random;
pub mod scheduler;

pub use command::{Command, CommandDecoder, Frame, PlayAction};
pub use config::{ColorSlot, ControllerConfig, Mode, ModeTimings, ShowConfig};
pub use controller::ShowController;
pub use effect::{EffectId, EffectSlot};
pub use link::{LinkBuffer, LinkTransport, RadioPort};
pub use random::{FastRandom, Random};
pub use scheduler::{ScheduledJob, ShowScheduler};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver
///
/// Implement this trait to support different strip hardware.
/// The controller is generic over this trait.
pub trait PixelSink {
    /// Initialize the strip; called once before the first frame
    fn begin(&mut self) {}

    /// Number of pixels on the strip
    fn pixel_count(&self) -> usize;

    /// Stage one pixel; out-of-range indexes are ignored
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Stage every pixel in one color
    fn fill(&mut self, color: Rgb) {
        for index in 0..self.pixel_count() {
            self.set_pixel(index, color);
        }
    }

    /// Push the staged pixels to the strip
    fn show(&mut self);
}

/// Abstract byte link to the companion app
///
/// All methods must return immediately.
pub trait Transport {
    /// Whether at least one received byte is waiting
    fn byte_available(&mut self) -> bool;

    /// Take the next received byte
    ///
    /// Only called after `byte_available` returned `true`.
    fn read_byte(&mut self) -> u8;

    /// Whether a central device is connected
    fn is_connected(&self) -> bool;

    /// Queue one byte for sending
    fn write_byte(&mut self, byte: u8);
}
