use alloc::vec::Vec;

use crate::Frame;

/// Trait for implementations that consume frames reassembled by a
/// [`crate::StreamProcessor`].
///
/// Only complete, well-formed frames are ever delivered, in the order they
/// were closed on the wire and each exactly once.
pub trait FrameHandler {
    fn frame(&mut self, frame: Frame);
}

/// Returns a [`FrameHandler`] that calls the given function for each frame.
pub fn frame_handler_fn(f: impl FnMut(Frame)) -> impl FrameHandler {
    FrameHandlerFn { f }
}

struct FrameHandlerFn<F> {
    f: F,
}

impl<F: FnMut(Frame)> FrameHandler for FrameHandlerFn<F> {
    #[inline(always)]
    fn frame(&mut self, frame: Frame) {
        (self.f)(frame);
    }
}

impl FrameHandler for Vec<Frame> {
    #[inline(always)]
    fn frame(&mut self, frame: Frame) {
        self.push(frame);
    }
}

impl<H: FrameHandler + ?Sized> FrameHandler for &mut H {
    #[inline(always)]
    fn frame(&mut self, frame: Frame) {
        (**self).frame(frame);
    }
}
