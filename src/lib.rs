//! Incremental parser for ESC/SOF delimited byte frames.
//!
//! Frames travel inside an arbitrary byte stream. Each frame opens with the
//! two-byte sequence `ESC, SOF`, closes with the same two bytes, and any
//! `ESC` byte that belongs to the payload is written twice. Bytes outside a
//! frame are ignored, and a frame interrupted by a malformed escape sequence
//! is dropped without complaint while the parser goes back to looking for
//! the next open sequence.
//!
//! The stream may arrive in pieces from several unrelated sessions, for
//! example across reconnects. [`FrameParser`] is a state machine that
//! consumes one byte at a time and keeps everything it knows between calls,
//! so a frame may begin in one session and end in another.
//! [`StreamProcessor`] drives a parser from successive sessions and passes
//! each completed frame to a [`FrameHandler`].
//!
//! ```rust
//! # use escframe::{frame_handler_fn, Frame, StreamProcessor, ByteSource, ESC, SOF};
//! # let mut frames: Vec<Frame> = Vec::new();
//! let mut processor = StreamProcessor::new(frame_handler_fn(|frame| {
//!     println!("{frame}");
//! #   frames.push(frame);
//! }));
//! processor.process(ByteSource::new(vec![0x70, ESC, SOF, b'o', b'k', ESC, SOF, ESC, SOF, b'W']));
//! processor.process(ByteSource::new(vec![b'o', b'r', b'l', b'd', ESC, SOF]));
//! # drop(processor);
//! # assert_eq!(frames, [Frame::from(&b"ok"[..]), Frame::from(&b"World"[..])]);
//! ```
//!
//! ```plaintext
//! ok
//! World
//! ```
//!
//! The default markers are `ESC = 0x48` (ASCII `H`) and `SOF = 0x10`; other
//! values can be chosen with [`Markers::new`].
#![no_std]

extern crate alloc;

mod error;
mod frame;
mod handler;
mod machine;
mod markers;
mod processor;
mod source;

pub use error::{Error, Result};
pub use frame::Frame;
pub use handler::{frame_handler_fn, FrameHandler};
pub use machine::{FrameParser, ParserState};
pub use markers::{Markers, ESC, SOF};
pub use processor::StreamProcessor;
pub use source::ByteSource;
