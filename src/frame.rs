use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

/// A completed frame, with escaped bytes already un-escaped.
///
/// The protocol assigns no encoding to frame contents. [`Frame::chars`] and
/// the [`fmt::Display`] implementation interpret each byte as one character
/// (Latin-1), which is convenient for the mostly-ASCII payloads in tests and
/// logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Frame {
    bytes: Vec<u8>,
}

impl Frame {
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline(always)]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.bytes.iter().map(|&b| char::from(b))
    }
}

impl Deref for Frame {
    type Target = [u8];

    #[inline(always)]
    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for Frame {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<&[u8]> for Frame {
    fn from(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }
}

impl PartialEq<[u8]> for Frame {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl PartialEq<&str> for Frame {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for c in self.chars() {
            f.write_char(c)?;
        }
        Ok(())
    }
}
