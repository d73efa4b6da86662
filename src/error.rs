use thiserror::Error;

/// Result type alias for fallible operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported while configuring a framing machine.
///
/// Malformed input is never reported through this type: the parser
/// resynchronizes silently and only well-formed frames reach a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The escape marker and the start-of-frame marker share a value, so an
    /// escaped literal could not be told apart from a close sequence.
    #[error("escape and start-of-frame markers must differ (both are {value:#04x})")]
    MarkerCollision { value: u8 },
}
