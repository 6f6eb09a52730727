//! 8- and 16-bit fixed-point helpers in the style of `FastLED`'s `lib8tion`.

use core::f32::consts::TAU;

use embassy_time::Instant;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale an 8-bit value, never letting a non-zero input fall to zero
///
/// Used by the heat ramp so that faint embers stay visible.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8_video(value: u8, scale: u8) -> u8 {
    let scaled = ((value as u16 * scale as u16) >> 8) as u8;
    if value != 0 && scale != 0 {
        scaled + 1
    } else {
        scaled
    }
}

/// Saturating add, clamps at 255
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Saturating subtract, clamps at 0
#[inline]
pub const fn qsub8(a: u8, b: u8) -> u8 {
    a.saturating_sub(b)
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Scale a 16-bit value by a 16-bit factor (0-65535 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale16(value: u16, scale: u16) -> u16 {
    ((value as u32 * (1 + scale as u32)) >> 16) as u16
}

/// Sine over a full 16-bit turn, output in `-32767..=32767`
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn sin16(theta: u16) -> i16 {
    let angle = f32::from(theta) * TAU / 65536.0;
    (libm::sinf(angle) * 32767.0) as i16
}

/// Sine over a full 8-bit turn, output in `0..=255` centered on 128
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sin8(theta: u8) -> u8 {
    let angle = f32::from(theta) * TAU / 256.0;
    libm::roundf((libm::sinf(angle) + 1.0) * 127.5) as u8
}

/// Sawtooth that wraps `bpm` times per minute of uptime
#[allow(clippy::cast_possible_truncation)]
pub fn beat16(bpm: u16, now: Instant) -> u16 {
    // bpm in Q8.8, one turn per beat
    let bpm88 = u64::from(bpm) << 8;
    ((now.as_millis().wrapping_mul(bpm88).wrapping_mul(280)) >> 16) as u16
}

/// 8-bit variant of [`beat16`]
#[allow(clippy::cast_possible_truncation)]
pub fn beat8(bpm: u16, now: Instant) -> u8 {
    (beat16(bpm, now) >> 8) as u8
}

/// Sine wave oscillating between `low` and `high` at `bpm`
#[allow(clippy::cast_sign_loss)]
pub fn beatsin16(bpm: u16, now: Instant, low: u16, high: u16) -> u16 {
    let wave = (i32::from(sin16(beat16(bpm, now))) + 32768) as u16;
    let range = high.saturating_sub(low);
    low.saturating_add(scale16(wave, range))
}

/// 8-bit variant of [`beatsin16`]
pub fn beatsin8(bpm: u16, now: Instant, low: u8, high: u8) -> u8 {
    let wave = sin8(beat8(bpm, now));
    let range = high.saturating_sub(low);
    low.saturating_add(scale8(wave, range))
}
