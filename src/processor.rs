use crate::{FrameHandler, FrameParser};

/// Drives a long-lived [`FrameParser`] from successive byte sessions and
/// hands each completed frame to a [`FrameHandler`].
///
/// The parser's state carries over from one call to
/// [`StreamProcessor::process`] to the next, so a session boundary has no
/// meaning to the protocol.
pub struct StreamProcessor<H> {
    parser: FrameParser,
    handler: H,
}

impl<H> StreamProcessor<H> {
    pub const fn new(handler: H) -> Self {
        Self::with_parser(FrameParser::new(), handler)
    }

    pub const fn with_parser(parser: FrameParser, handler: H) -> Self {
        Self { parser, handler }
    }

    #[inline(always)]
    pub const fn parser(&self) -> &FrameParser {
        &self.parser
    }

    #[inline(always)]
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    #[inline(always)]
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    #[inline(always)]
    pub fn take_handler(self) -> H {
        self.handler
    }

    #[inline(always)]
    pub fn into_parts(self) -> (FrameParser, H) {
        (self.parser, self.handler)
    }
}

impl<H: FrameHandler> StreamProcessor<H> {
    /// Consumes one session of bytes, returning how many frames were
    /// delivered to the handler during it.
    ///
    /// Empty frames are dropped here rather than passed to the handler.
    pub fn process(&mut self, session: impl IntoIterator<Item = u8>) -> usize {
        let mut consumed = 0_usize;
        let mut delivered = 0_usize;
        for b in session {
            consumed += 1;
            self.parser.deliver(b);
            if let Some(frame) = self.parser.take_frame().filter(|f| !f.is_empty()) {
                delivered += 1;
                self.handler.frame(frame);
            }
        }
        log::trace!(
            "session ended after {consumed} bytes, {delivered} frames, parser {:?}",
            self.parser.state()
        );
        delivered
    }
}
