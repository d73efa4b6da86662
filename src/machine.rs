use alloc::vec::Vec;

use crate::{Frame, Markers};

/// The framing state machine.
///
/// A parser is created once and then fed one byte at a time through
/// [`FrameParser::deliver`], possibly from many unrelated sessions over its
/// lifetime. Everything it has learned so far (whether it is inside a frame,
/// halfway through an escape sequence, and the bytes captured so far) is kept
/// between calls, so a frame may straddle any number of sessions.
///
/// After each delivery the caller may collect a completed frame with
/// [`FrameParser::take_frame`]. Malformed sequences never produce an error:
/// the parser drops what it had and goes back to scanning for an open
/// sequence.
#[derive(Debug)]
pub struct FrameParser {
    markers: Markers,
    state: ParserState,
    buf: Vec<u8>,
    signal: Option<u8>,
    ready: Option<Frame>,
}

/// Where a [`FrameParser`] is suspended, waiting for its next byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParserState {
    /// Outside any frame, looking for an escape byte.
    Idle,
    /// Saw an escape byte outside a frame, expecting start-of-frame.
    AwaitingStart,
    /// Inside a frame, collecting payload bytes.
    Capturing,
    /// Saw an escape byte inside a frame; the next byte decides between an
    /// escaped literal and the close sequence.
    AwaitingEscapeOrClose,
}

impl FrameParser {
    pub const fn new() -> Self {
        Self::with_markers(Markers::DEFAULT)
    }

    pub const fn with_markers(markers: Markers) -> Self {
        Self {
            markers,
            state: ParserState::Idle,
            buf: Vec::new(),
            signal: None,
            ready: None,
        }
    }

    #[inline(always)]
    pub const fn markers(&self) -> Markers {
        self.markers
    }

    #[inline(always)]
    pub const fn state(&self) -> ParserState {
        self.state
    }

    /// The payload captured so far for the frame currently being read.
    #[inline(always)]
    pub fn buffered(&self) -> &[u8] {
        &self.buf
    }

    /// Reports whether [`FrameParser::take_frame`] would return a frame.
    #[inline(always)]
    pub fn has_frame(&self) -> bool {
        self.ready.is_some()
    }

    /// Returns the frame completed since the previous call, if any.
    ///
    /// Each completed frame is returned at most once.
    pub fn take_frame(&mut self) -> Option<Frame> {
        self.ready.take()
    }

    /// Abandons any partially-read frame and any frame not yet taken.
    pub fn reset(&mut self) {
        self.state = ParserState::Idle;
        self.buf.clear();
        self.signal = None;
        self.ready = None;
    }

    /// Hands the next byte of the stream to the parser, which consumes it
    /// before returning.
    pub fn deliver(&mut self, b: u8) {
        debug_assert!(self.signal.is_none(), "undelivered byte in signal slot");
        self.signal = Some(b);
        self.resume();
    }

    /// Runs the machine until it needs another byte.
    fn resume(&mut self) {
        while let Some(b) = self.signal.take() {
            self.step(b);
        }
    }

    fn step(&mut self, b: u8) {
        let (esc, sof) = (self.markers.esc(), self.markers.sof());
        match self.state {
            ParserState::Idle => {
                if b == esc {
                    self.change_state(ParserState::AwaitingStart, Action::Ignore, b);
                }
                // Anything else is noise between frames.
            }
            ParserState::AwaitingStart => {
                if b == sof {
                    self.change_state(ParserState::Capturing, Action::Open, b);
                } else {
                    self.change_state(ParserState::Idle, Action::BadOpen, b);
                }
            }
            ParserState::Capturing => {
                if b == esc {
                    self.change_state(ParserState::AwaitingEscapeOrClose, Action::Ignore, b);
                } else {
                    self.action(Action::Collect, b);
                }
            }
            ParserState::AwaitingEscapeOrClose => {
                if b == sof {
                    self.change_state(ParserState::Idle, Action::Emit, b);
                } else if b == esc {
                    self.change_state(ParserState::Capturing, Action::Collect, b);
                } else {
                    self.change_state(ParserState::Idle, Action::OutOfSync, b);
                }
            }
        }
    }

    fn action(&mut self, action: Action, b: u8) {
        match action {
            Action::Ignore => {}
            Action::Open => {
                log::trace!("frame opened");
                self.buf.clear();
            }
            Action::Collect => self.buf.push(b),
            Action::Emit => {
                let frame = Frame::from(core::mem::take(&mut self.buf));
                log::trace!("frame completed ({} bytes)", frame.len());
                if let Some(old) = self.ready.replace(frame) {
                    log::warn!(
                        "completed frame ({} bytes) replaced before it was taken",
                        old.len()
                    );
                }
            }
            Action::BadOpen => {
                log::debug!("escape not followed by start-of-frame (got {b:#04x}), resyncing");
            }
            Action::OutOfSync => {
                log::debug!(
                    "unexpected {b:#04x} after escape inside frame, dropping {} buffered bytes",
                    self.buf.len()
                );
                self.buf.clear();
            }
        }
    }

    fn change_state(&mut self, state: ParserState, transition: Action, b: u8) {
        self.state = state;
        self.action(transition, b);
    }
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Action {
    Ignore,
    Open,
    Collect,
    Emit,
    BadOpen,
    OutOfSync,
}
