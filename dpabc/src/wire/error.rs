use alloc::string::{String, ToString};
use ark_serialize::SerializationError;

/// An error originated from encoding or decoding the fixed-width byte layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    /// The buffer ended before the next field could be read.
    UnexpectedEnd { needed: usize, remaining: usize },
    /// Bytes are left over after the whole object was read.
    TrailingBytes(usize),
    /// Bytes don't encode a canonical scalar, i.e. the value isn't below the field modulus.
    InvalidScalar,
    /// Bytes don't encode a point of the prime order subgroup.
    InvalidGroupElement,
    /// Identity must be encoded with the sentinel pattern only.
    InvalidIdentityEncoding,
    /// A sequence is longer than a one byte count can describe.
    TooManyElements(usize),
    Serialization(String),
}

impl From<SerializationError> for WireError {
    fn from(err: SerializationError) -> Self {
        Self::Serialization(err.to_string())
    }
}
