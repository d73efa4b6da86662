use alloc::vec::Vec;
use core::iter::FusedIterator;

/// A finite, non-restartable run of bytes standing in for one inbound
/// session.
///
/// Once exhausted a source stays exhausted; a new session needs a new
/// source. A source cannot be duplicated to replay its bytes:
///
/// ```compile_fail
/// let src = escframe::ByteSource::new(vec![1, 2, 3]);
/// let replay = src.clone();
/// ```
#[derive(Debug)]
pub struct ByteSource {
    buf: Vec<u8>,
    pos: usize,
}

impl ByteSource {
    pub const fn new(buf: Vec<u8>) -> Self {
        Self { buf, pos: 0 }
    }

    /// Advances the source, returning `None` once every byte has been
    /// produced.
    pub fn next_byte(&mut self) -> Option<u8> {
        let b = *self.buf.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline(always)]
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.buf.len()
    }
}

impl From<Vec<u8>> for ByteSource {
    fn from(buf: Vec<u8>) -> Self {
        Self::new(buf)
    }
}

impl From<&[u8]> for ByteSource {
    fn from(buf: &[u8]) -> Self {
        Self::new(buf.to_vec())
    }
}

impl Iterator for ByteSource {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<u8> {
        self.next_byte()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for ByteSource {}

impl FusedIterator for ByteSource {}
