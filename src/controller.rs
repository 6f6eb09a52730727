use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::command::{Command, CommandDecoder, Frame, PlayAction, version_reply};
use crate::config::{ColorSlot, ControllerConfig, Mode, ModeTimings, ShowConfig};
use crate::effect::EffectId;
use crate::random::Random;
use crate::scheduler::ShowScheduler;
use crate::{PixelSink, Transport};

/// Number of runners the running-lights mode starts with
const RUNNING_MODE_RUNNERS: u8 = 2;

/// Show controller - the main orchestrator
///
/// Owns the strip, the link, the live configuration and the scheduler.
/// Call [`ShowController::run_once`] from the firmware loop.
pub struct ShowController<S, T, R, const N: usize>
where
    S: PixelSink,
    T: Transport,
    R: Random,
{
    // External dependencies and configuration
    sink: S,
    transport: T,
    rng: R,
    firmware_version: u16,
    show_interval: Duration,
    timings: ModeTimings,

    // Internal state
    config: ShowConfig,
    decoder: CommandDecoder,
    scheduler: ShowScheduler<N>,
    connected: bool,
}

impl<S, T, R, const N: usize> ShowController<S, T, R, N>
where
    S: PixelSink,
    T: Transport,
    R: Random,
{
    pub fn new(sink: S, transport: T, rng: R, config: &ControllerConfig) -> Self {
        let scheduler = ShowScheduler::new(sink.pixel_count(), config.defaults.brightness());
        Self {
            sink,
            transport,
            rng,
            firmware_version: config.firmware_version,
            show_interval: config.show_interval,
            timings: config.timings,
            config: config.defaults.clone(),
            decoder: CommandDecoder::new(),
            scheduler,
            connected: false,
        }
    }

    /// Bring up the strip and start the randomized show
    pub fn begin(&mut self) {
        self.sink.begin();
        self.scheduler
            .set_brightness(self.config.brightness(), &mut self.sink);
        self.scheduler.blank(&mut self.sink);
        self.scheduler.start_sequence(self.show_interval);
    }

    /// Run one loop step
    ///
    /// Applies every complete frame received so far, then fires whatever
    /// is due. Returns whether a frame was pushed to the strip.
    pub fn run_once(&mut self, now: Instant) -> bool {
        self.process_frames();
        self.update_connection();

        self.scheduler
            .poll(now, &self.config, &mut self.rng, &mut self.sink)
    }

    /// Decode and apply a single frame
    pub fn apply(&mut self, frame: Frame) {
        match Command::decode(frame) {
            Some(command) => self.apply_command(command),
            None => {
                #[cfg(feature = "esp32-log")]
                println!("[ShowController.apply] ignoring frame {:02x?}", frame);
            }
        }
    }

    pub const fn config(&self) -> &ShowConfig {
        &self.config
    }

    pub const fn scheduler(&self) -> &ShowScheduler<N> {
        &self.scheduler
    }

    /// Link state as of the last loop step
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Apply pending frames from the link (non-blocking)
    fn process_frames(&mut self) {
        while let Some(frame) = self.decoder.next_frame(&mut self.transport) {
            self.apply(frame);
        }
    }

    fn update_connection(&mut self) {
        let connected = self.transport.is_connected();
        if connected == self.connected {
            return;
        }

        #[cfg(feature = "esp32-log")]
        if connected {
            println!("[ShowController] link connected");
        } else {
            println!("[ShowController] link disconnected");
        }

        self.connected = connected;
    }

    fn apply_command(&mut self, command: Command) {
        match command {
            Command::QueryVersion => {
                for byte in version_reply(self.firmware_version) {
                    self.transport.write_byte(byte);
                }
            }
            Command::Play { action, arg } => self.play(action, arg),
            Command::SetMode(mode) => {
                self.config.set_mode(mode);
            }
            Command::SetRedGreen { slot, r, g } => {
                self.config.set_red_green(slot, r, g);
            }
            Command::SetBlue { slot, b } => {
                self.config.set_blue(slot, b);
            }
            Command::SetBrightness(brightness) => {
                self.config.set_brightness(brightness);
                self.scheduler.set_brightness(brightness, &mut self.sink);
            }
            Command::SelectColor(index) => match ColorSlot::from_raw(index) {
                Some(slot) => {
                    self.config.select_color(slot);
                    self.scheduler.clear_color_override();
                }
                None => self.scheduler.stop(&mut self.sink),
            },
        }
    }

    /// Act on the recorded mode
    fn play(&mut self, action: PlayAction, arg: u8) {
        let timings = self.timings;
        match (action, self.config.mode()) {
            (PlayAction::Reset, _) => {}
            (PlayAction::Stop, _) | (PlayAction::Play, Some(Mode::Off) | None) => {
                #[cfg(feature = "esp32-log")]
                if action == PlayAction::Play && self.config.mode().is_none() {
                    println!(
                        "[ShowController.play] unknown mode {}, stopping",
                        self.config.raw_mode()
                    );
                }

                self.scheduler.stop_sequence();
                self.scheduler.stop(&mut self.sink);
            }
            (PlayAction::Play, Some(Mode::Show)) => {
                self.scheduler.start_sequence(self.show_interval);
            }
            (PlayAction::Play, Some(Mode::Solid)) => {
                self.start_effect(EffectId::Solid(ColorSlot::Accent1), timings.solid);
            }
            (PlayAction::Play, Some(Mode::SolidIndexed)) => {
                if let Some(slot) = ColorSlot::from_raw(arg) {
                    self.start_effect(EffectId::Solid(slot), timings.solid);
                }
            }
            (PlayAction::Play, Some(Mode::Flashing)) => {
                self.start_effect(EffectId::Flashing, timings.flashing);
            }
            (PlayAction::Play, Some(Mode::RunningPair)) => {
                self.start_effect(
                    EffectId::RunningLights(RUNNING_MODE_RUNNERS),
                    timings.running,
                );
            }
            (PlayAction::Play, Some(Mode::Fire)) => {
                self.start_effect(EffectId::Fire, timings.fire);
            }
            (PlayAction::Play, Some(Mode::Broadway)) => {
                self.start_effect(EffectId::Broadway, timings.broadway);
            }
            (PlayAction::Play, Some(Mode::Palette)) => {
                self.start_effect(EffectId::PaletteShow, timings.palette);
            }
            (PlayAction::Play, Some(Mode::Rainbow)) => {
                self.start_effect(EffectId::RainbowShow, timings.rainbow);
            }
        }
    }

    /// Start one effect directly, ending the randomized show
    fn start_effect(&mut self, id: EffectId, period: Duration) {
        self.scheduler.stop_sequence();
        self.scheduler.start(id, period, &mut self.rng);
    }
}
