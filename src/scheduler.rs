//! Show scheduling: one effect slot plus an optional sequence slot.
//!
//! Timing is portable: the caller passes the current time into [`ShowScheduler::poll`]
//! on every loop iteration and the scheduler fires whatever is due. Nothing
//! here blocks or sleeps.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PixelSink;
use crate::color::{BLACK, Rgb};
use crate::config::{ColorSlot, ShowConfig};
use crate::effect::{EffectId, EffectSlot, TickContext};
use crate::filter::BrightnessFilter;
use crate::random::Random;

/// Maximum drift, in periods, before a job's timing resets.
///
/// If the loop falls behind by more than this, the backlog is skipped
/// instead of fired in a burst.
const MAX_DRIFT_PERIODS: u32 = 2;

/// Shows the randomized sequence picks from, with their tick periods
const SEQUENCE_SHOWS: [(EffectId, Duration); 7] = [
    (EffectId::Flashing, Duration::from_millis(200)),
    (EffectId::RunningLights(4), Duration::from_millis(200)),
    (EffectId::Broadway, Duration::from_millis(200)),
    (EffectId::PaletteShow, Duration::from_millis(10)),
    (EffectId::RunningLights(6), Duration::from_millis(200)),
    (EffectId::Fire, Duration::from_millis(100)),
    (EffectId::RainbowShow, Duration::from_millis(10)),
];

/// A task that runs at a fixed period
///
/// A fresh job is due immediately.
#[derive(Debug, Clone)]
pub struct ScheduledJob<T> {
    period: Duration,
    next_fire: Option<Instant>,
    task: T,
}

impl<T> ScheduledJob<T> {
    pub const fn new(task: T, period: Duration) -> Self {
        Self {
            period,
            next_fire: None,
            task,
        }
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    pub const fn task(&self) -> &T {
        &self.task
    }

    /// Deadline of the next run, `None` before the first run
    pub const fn next_fire(&self) -> Option<Instant> {
        self.next_fire
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.next_fire.is_none_or(|deadline| now >= deadline)
    }

    /// Record a run at `now` and compute the next deadline
    pub fn mark_fired(&mut self, now: Instant) {
        let mut deadline = self.next_fire.unwrap_or(now);
        if now > deadline + self.period * MAX_DRIFT_PERIODS {
            deadline = now;
        }
        self.next_fire = Some(deadline + self.period);
    }

    fn into_task(self) -> T {
        self.task
    }
}

/// Single-slot effect scheduler
///
/// Holds at most one effect job and at most one sequence job. Starting an
/// effect cancels the previous one in the same call, so a replaced effect
/// never ticks again.
pub struct ShowScheduler<const N: usize> {
    leds: [Rgb; N],
    pixel_count: usize,
    effect: Option<ScheduledJob<EffectSlot<N>>>,
    sequence: Option<ScheduledJob<()>>,
    color_override: Option<ColorSlot>,
    brightness: BrightnessFilter,
}

impl<const N: usize> ShowScheduler<N> {
    /// Create an idle scheduler for `pixel_count` pixels (capped at `N`)
    pub fn new(pixel_count: usize, brightness: u8) -> Self {
        Self {
            leds: [BLACK; N],
            pixel_count: pixel_count.min(N),
            effect: None,
            sequence: None,
            color_override: None,
            brightness: BrightnessFilter::new(brightness),
        }
    }

    pub const fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Current frame buffer, before brightness scaling
    pub fn leds(&self) -> &[Rgb] {
        &self.leds[..self.pixel_count]
    }

    /// Running effect and its tick period
    pub fn active(&self) -> Option<(EffectId, Duration)> {
        self.effect
            .as_ref()
            .map(|job| (job.task().id(), job.period()))
    }

    /// State of the running effect
    pub fn active_effect(&self) -> Option<&EffectSlot<N>> {
        self.effect.as_ref().map(ScheduledJob::task)
    }

    pub const fn has_sequence(&self) -> bool {
        self.sequence.is_some()
    }

    /// Accent color picked by the sequence, overriding the selected color
    pub const fn color_override(&self) -> Option<ColorSlot> {
        self.color_override
    }

    /// Brightness applied on flush
    pub const fn output_brightness(&self) -> u8 {
        self.brightness.current()
    }

    /// Replace the running effect
    ///
    /// Restarting the effect that is already running keeps its state and
    /// only updates the period. A different effect gets fresh state and a
    /// blank buffer. Either way the new job ticks on the next poll.
    pub fn start<R: Random>(&mut self, id: EffectId, period: Duration, rng: &mut R) {
        let slot = match self.effect.take() {
            Some(job) if job.task().id() == id => job.into_task(),
            _ => {
                let mut slot = id.to_slot(self.pixel_count, rng);
                slot.reset();
                self.leds.fill(BLACK);
                slot
            }
        };

        self.brightness.set_effect_level(slot.brightness());

        #[cfg(feature = "esp32-log")]
        println!(
            "[ShowScheduler.start] effect {} every {} ms",
            id.as_str(),
            period.as_millis()
        );

        self.effect = Some(ScheduledJob::new(slot, period));
    }

    /// Cancel the running effect and blank the strip
    pub fn stop<S: PixelSink>(&mut self, sink: &mut S) {
        #[cfg(feature = "esp32-log")]
        if let Some((id, _)) = self.active() {
            println!("[ShowScheduler.stop] stopping {}", id.as_str());
        }

        self.effect = None;
        self.blank(sink);
    }

    /// Start the randomized sequence; its first pick happens on the next poll
    pub fn start_sequence(&mut self, period: Duration) {
        self.sequence = Some(ScheduledJob::new((), period));
    }

    /// Cancel the randomized sequence and drop its color pick
    pub fn stop_sequence(&mut self) {
        self.sequence = None;
        self.color_override = None;
    }

    /// Drop the sequence's color pick so effects draw the selected color
    ///
    /// The next sequence tick picks a fresh color.
    pub fn clear_color_override(&mut self) {
        self.color_override = None;
    }

    /// Set the output brightness and push it to the strip immediately
    pub fn set_brightness<S: PixelSink>(&mut self, brightness: u8, sink: &mut S) {
        self.brightness.set(brightness);
        self.flush(sink);
    }

    /// Fill the buffer with one color and flush, outside of any effect
    pub fn fill<S: PixelSink>(&mut self, color: Rgb, sink: &mut S) {
        self.leds[..self.pixel_count].fill(color);
        sink.fill(self.brightness.apply(color));
        sink.show();
    }

    /// Write black to every pixel and flush
    pub fn blank<S: PixelSink>(&mut self, sink: &mut S) {
        self.fill(BLACK, sink);
    }

    /// Fire the jobs that are due at `now`
    ///
    /// The sequence job runs first so that an effect it starts ticks in the
    /// same poll. Returns whether a frame was flushed.
    pub fn poll<R: Random, S: PixelSink>(
        &mut self,
        now: Instant,
        config: &ShowConfig,
        rng: &mut R,
        sink: &mut S,
    ) -> bool {
        if let Some(sequence) = self.sequence.as_mut() {
            if sequence.is_due(now) {
                sequence.mark_fired(now);
                self.next_in_sequence(rng);
            }
        }

        let color_override = self.color_override;
        let Some(job) = self.effect.as_mut() else {
            return false;
        };
        if !job.is_due(now) {
            return false;
        }
        job.mark_fired(now);

        let color = match &job.task {
            EffectSlot::Solid(effect) => config.color(effect.slot()),
            _ => config.color(color_override.unwrap_or(config.active_slot())),
        };
        let mut ctx = TickContext { now, color, rng };
        job.task.tick(&mut ctx, &mut self.leds[..self.pixel_count]);

        self.flush(sink);
        true
    }

    /// Pick a random show and accent color, then start it
    fn next_in_sequence<R: Random>(&mut self, rng: &mut R) {
        let (id, period) = SEQUENCE_SHOWS[rng.pick(SEQUENCE_SHOWS.len())];
        let accent = ColorSlot::ACCENTS[rng.pick(ColorSlot::ACCENTS.len())];

        #[cfg(feature = "esp32-log")]
        println!(
            "[ShowScheduler.sequence] next show {} in accent {:?}",
            id.as_str(),
            accent
        );

        self.color_override = Some(accent);
        self.start(id, period, rng);
    }

    fn flush<S: PixelSink>(&self, sink: &mut S) {
        for (index, &color) in self.leds[..self.pixel_count].iter().enumerate() {
            sink.set_pixel(index, self.brightness.apply(color));
        }
        sink.show();
    }
}
