use crate::{setup::KeyError, wire::WireError};

/// An error originated from `Signature`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    InvalidAttributeCount { received: usize, expected: usize },
    ZeroSignature,
    PairingCheckFailed,
    NoSignatures,
    KeyAndSignatureCountMismatch { keys: usize, signatures: usize },
    /// Signature at this index has another `sigma_1` or `m'` than the first one, i.e. it signs other attributes.
    InconsistentSignature(usize),
    KeyError(KeyError),
    Wire(WireError),
}

impl From<KeyError> for SignatureError {
    fn from(err: KeyError) -> Self {
        Self::KeyError(err)
    }
}

impl From<WireError> for SignatureError {
    fn from(err: WireError) -> Self {
        Self::Wire(err)
    }
}
