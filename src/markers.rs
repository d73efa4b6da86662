use alloc::vec::Vec;

use crate::{Error, Result};

/// Default escape marker, ASCII `H`.
pub const ESC: u8 = 0x48;

/// Default start-of-frame marker.
pub const SOF: u8 = 0x10;

/// The pair of reserved byte values that delimit frames on the wire.
///
/// A frame opens and closes with `esc, sof`. Inside a frame a literal
/// `esc` byte is written twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Markers {
    esc: u8,
    sof: u8,
}

impl Markers {
    pub const DEFAULT: Self = Self { esc: ESC, sof: SOF };

    pub const fn new(esc: u8, sof: u8) -> Result<Self> {
        if esc == sof {
            return Err(Error::MarkerCollision { value: esc });
        }
        Ok(Self { esc, sof })
    }

    #[inline(always)]
    pub const fn esc(&self) -> u8 {
        self.esc
    }

    #[inline(always)]
    pub const fn sof(&self) -> u8 {
        self.sof
    }

    /// Returns `payload` wrapped in open and close sequences, with every
    /// escape byte in the payload doubled.
    pub fn encode(&self, payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(payload.len() + 4);
        self.encode_into(payload, &mut out);
        out
    }

    /// Like [`Markers::encode`], but appends to an existing buffer so that
    /// several frames can be laid out back to back.
    pub fn encode_into(&self, payload: &[u8], out: &mut Vec<u8>) {
        out.extend_from_slice(&[self.esc, self.sof]);
        for &b in payload {
            if b == self.esc {
                out.push(self.esc);
            }
            out.push(b);
        }
        out.extend_from_slice(&[self.esc, self.sof]);
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::DEFAULT
    }
}
