//! Radio link buffer for `no_std` environments.
//!
//! The radio stack runs in its own task or interrupt handler and exchanges
//! bytes with the control loop through this buffer. It is built on
//! `critical-section` and `heapless::Deque`, so it is interrupt safe.
//!
//! The radio side holds a [`RadioPort`]; the control loop holds a
//! [`LinkTransport`], which implements [`Transport`].

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::Transport;

/// Error returned when a byte does not fit into a full queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub u8);

struct LinkState<const RX: usize, const TX: usize> {
    incoming: Deque<u8, RX>,
    outgoing: Deque<u8, TX>,
    connected: bool,
}

/// Bounded byte queues in both directions plus the connection flag.
pub struct LinkBuffer<const RX: usize, const TX: usize> {
    inner: Mutex<RefCell<LinkState<RX, TX>>>,
}

impl<const RX: usize, const TX: usize> LinkBuffer<RX, TX> {
    /// Create an empty, disconnected link.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(LinkState {
                incoming: Deque::new(),
                outgoing: Deque::new(),
                connected: false,
            })),
        }
    }

    /// Get the handle used by the radio stack.
    pub const fn radio(&self) -> RadioPort<'_, RX, TX> {
        RadioPort { link: self }
    }

    /// Get the handle used by the control loop.
    pub const fn transport(&self) -> LinkTransport<'_, RX, TX> {
        LinkTransport { link: self }
    }

    fn with<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut LinkState<RX, TX>) -> T,
    {
        critical_section::with(|cs| f(&mut *self.inner.borrow(cs).borrow_mut()))
    }
}

impl<const RX: usize, const TX: usize> Default for LinkBuffer<RX, TX> {
    fn default() -> Self {
        Self::new()
    }
}

/// Radio-side handle of a [`LinkBuffer`].
///
/// This is a lightweight reference that can be copied and passed around.
#[derive(Clone, Copy)]
pub struct RadioPort<'a, const RX: usize, const TX: usize> {
    link: &'a LinkBuffer<RX, TX>,
}

impl<const RX: usize, const TX: usize> RadioPort<'_, RX, TX> {
    /// Queue a byte received over the air.
    ///
    /// Returns `Err(TrySendError(byte))` if the incoming queue is full.
    pub fn push_received(&self, byte: u8) -> Result<(), TrySendError> {
        self.link
            .with(|state| state.incoming.push_back(byte).map_err(TrySendError))
    }

    /// Take the next byte the control loop wants sent.
    pub fn pop_outgoing(&self) -> Option<u8> {
        self.link.with(|state| state.outgoing.pop_front())
    }

    /// Report a connection state change.
    pub fn set_connected(&self, connected: bool) {
        self.link.with(|state| state.connected = connected);
    }
}

/// Control-loop handle of a [`LinkBuffer`].
#[derive(Clone, Copy)]
pub struct LinkTransport<'a, const RX: usize, const TX: usize> {
    link: &'a LinkBuffer<RX, TX>,
}

impl<const RX: usize, const TX: usize> Transport for LinkTransport<'_, RX, TX> {
    fn byte_available(&mut self) -> bool {
        self.link.with(|state| !state.incoming.is_empty())
    }

    fn read_byte(&mut self) -> u8 {
        self.link
            .with(|state| state.incoming.pop_front())
            .unwrap_or_default()
    }

    fn is_connected(&self) -> bool {
        self.link.with(|state| state.connected)
    }

    fn write_byte(&mut self, byte: u8) {
        // Replies are best effort; a full queue drops the byte
        let _ = self.link.with(|state| state.outgoing.push_back(byte));
    }
}
