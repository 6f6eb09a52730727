//! Wire protocol: fixed 3-byte frames `[opcode, data0, data1]`.
//!
//! Decoding is pure. The controller applies the resulting [`Command`].

use heapless::Vec;

use crate::Transport;
use crate::config::ColorSlot;

/// Size of every frame on the wire
pub const FRAME_LEN: usize = 3;

/// One request from the companion app
pub type Frame = [u8; FRAME_LEN];

const OPCODE_VERSION: u8 = 0x00;
const OPCODE_PLAY: u8 = 0x01;
const OPCODE_MODE: u8 = 0x02;
const OPCODE_ACCENT_1_RG: u8 = 0x03;
const OPCODE_ACCENT_1_B: u8 = 0x04;
const OPCODE_ACCENT_2_RG: u8 = 0x05;
const OPCODE_ACCENT_2_B: u8 = 0x06;
const OPCODE_ACCENT_3_RG: u8 = 0x07;
const OPCODE_ACCENT_3_B: u8 = 0x08;
const OPCODE_ACCENT_4_RG: u8 = 0x09;
const OPCODE_ACCENT_4_B: u8 = 0x0a;
const OPCODE_ACCENT_5_RG: u8 = 0x0b;
const OPCODE_ACCENT_5_B: u8 = 0x0c;
const OPCODE_BACKGROUND_RG: u8 = 0x0d;
const OPCODE_BACKGROUND_B: u8 = 0x0e;
const OPCODE_BRIGHTNESS: u8 = 0x0f;
const OPCODE_SELECT_COLOR: u8 = 0x10;

const PLAY_STOP: u8 = 0;
const PLAY_START: u8 = 1;
const PLAY_RESET: u8 = 3;

/// Sub-action of the play-control opcode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayAction {
    Stop,
    /// Act on the last mode set
    Play,
    /// Reserved by the app; does nothing
    Reset,
}

impl PlayAction {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PLAY_STOP => Self::Stop,
            PLAY_START => Self::Play,
            PLAY_RESET => Self::Reset,
            _ => return None,
        })
    }
}

/// Decoded request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Reply with the firmware version
    QueryVersion,
    /// Start, stop or reset; `arg` is the color index used by the
    /// indexed solid mode
    Play { action: PlayAction, arg: u8 },
    /// Record the mode value (acted on by the next play)
    SetMode(u8),
    SetRedGreen { slot: ColorSlot, r: u8, g: u8 },
    SetBlue { slot: ColorSlot, b: u8 },
    SetBrightness(u8),
    /// Select the active color by raw index; out-of-range indexes blank the strip
    SelectColor(u8),
}

impl Command {
    /// Decode a frame, `None` for unknown opcodes or play sub-actions
    pub fn decode(frame: Frame) -> Option<Self> {
        let [opcode, data0, data1] = frame;
        let command = match opcode {
            OPCODE_VERSION => Self::QueryVersion,
            OPCODE_PLAY => Self::Play {
                action: PlayAction::from_raw(data1)?,
                arg: data0,
            },
            OPCODE_MODE => Self::SetMode(data1),
            OPCODE_ACCENT_1_RG => Self::red_green(ColorSlot::Accent1, data0, data1),
            OPCODE_ACCENT_1_B => Self::blue(ColorSlot::Accent1, data1),
            OPCODE_ACCENT_2_RG => Self::red_green(ColorSlot::Accent2, data0, data1),
            OPCODE_ACCENT_2_B => Self::blue(ColorSlot::Accent2, data1),
            OPCODE_ACCENT_3_RG => Self::red_green(ColorSlot::Accent3, data0, data1),
            OPCODE_ACCENT_3_B => Self::blue(ColorSlot::Accent3, data1),
            OPCODE_ACCENT_4_RG => Self::red_green(ColorSlot::Accent4, data0, data1),
            OPCODE_ACCENT_4_B => Self::blue(ColorSlot::Accent4, data1),
            OPCODE_ACCENT_5_RG => Self::red_green(ColorSlot::Accent5, data0, data1),
            OPCODE_ACCENT_5_B => Self::blue(ColorSlot::Accent5, data1),
            OPCODE_BACKGROUND_RG => Self::red_green(ColorSlot::Background, data0, data1),
            OPCODE_BACKGROUND_B => Self::blue(ColorSlot::Background, data1),
            OPCODE_BRIGHTNESS => Self::SetBrightness(data1),
            OPCODE_SELECT_COLOR => Self::SelectColor(data1),
            _ => return None,
        };
        Some(command)
    }

    const fn red_green(slot: ColorSlot, r: u8, g: u8) -> Self {
        Self::SetRedGreen { slot, r, g }
    }

    const fn blue(slot: ColorSlot, b: u8) -> Self {
        Self::SetBlue { slot, b }
    }
}

/// Build the reply to a version query
pub const fn version_reply(version: u16) -> Frame {
    let [hi, lo] = version.to_be_bytes();
    [OPCODE_VERSION, hi, lo]
}

/// Assembles whole frames from the transport byte stream
///
/// Bytes are pulled only while the transport reports them available. A
/// partial frame stays buffered here until its remaining bytes arrive.
#[derive(Debug, Default)]
pub struct CommandDecoder {
    pending: Vec<u8, FRAME_LEN>,
}

impl CommandDecoder {
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Number of bytes of an incomplete frame held back
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Pull the next complete frame, if one is available
    pub fn next_frame<T: Transport>(&mut self, transport: &mut T) -> Option<Frame> {
        while !self.pending.is_full() && transport.byte_available() {
            // Cannot fail: capacity checked above
            let _ = self.pending.push(transport.read_byte());
        }

        if !self.pending.is_full() {
            return None;
        }

        let frame = [self.pending[0], self.pending[1], self.pending[2]];
        self.pending.clear();
        Some(frame)
    }
}
