#![allow(dead_code)]

use std::collections::VecDeque;

use dartled_show::{Instant, PixelSink, Rgb, Transport};

/// Transport fed from a byte script; records everything written back
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    pub incoming: VecDeque<u8>,
    pub outgoing: Vec<u8>,
    pub connected: bool,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.incoming.extend(bytes.iter().copied());
    }

    pub fn push_frame(&mut self, frame: [u8; 3]) {
        self.push_bytes(&frame);
    }
}

impl Transport for ScriptedTransport {
    fn byte_available(&mut self) -> bool {
        !self.incoming.is_empty()
    }

    fn read_byte(&mut self) -> u8 {
        self.incoming.pop_front().unwrap_or_default()
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn write_byte(&mut self, byte: u8) {
        self.outgoing.push(byte);
    }
}

/// Sink that keeps every frame pushed with `show`
#[derive(Debug)]
pub struct RecordingSink {
    pub staged: Vec<Rgb>,
    pub frames: Vec<Vec<Rgb>>,
    pub fills: usize,
    pub began: bool,
}

impl RecordingSink {
    pub fn new(pixel_count: usize) -> Self {
        Self {
            staged: vec![Rgb::default(); pixel_count],
            frames: Vec::new(),
            fills: 0,
            began: false,
        }
    }

    pub fn last_frame(&self) -> Option<&[Rgb]> {
        self.frames.last().map(Vec::as_slice)
    }

    pub fn show_count(&self) -> usize {
        self.frames.len()
    }
}

impl PixelSink for RecordingSink {
    fn begin(&mut self) {
        self.began = true;
    }

    fn pixel_count(&self) -> usize {
        self.staged.len()
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.staged.get_mut(index) {
            *pixel = color;
        }
    }

    fn fill(&mut self, color: Rgb) {
        self.fills += 1;
        self.staged.fill(color);
    }

    fn show(&mut self) {
        self.frames.push(self.staged.clone());
    }
}

pub fn ms(millis: u64) -> Instant {
    Instant::from_millis(millis)
}
