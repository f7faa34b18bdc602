use dpabc_utils::try_iter::{IndexIsOutOfBounds, InvalidPair};

use crate::{signature::SignatureError, wire::WireError};

/// An error originated from `PresentationToken`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationError {
    InvalidAttributeCount {
        received: usize,
        expected: usize,
    },
    RevealIndexIsOutOfBounds(IndexIsOutOfBounds),
    RevealIndicesMustBeUniqueAndSorted(InvalidPair<usize>),
    RevealedAttributeCountMismatch {
        attributes: usize,
        indices: usize,
    },
    /// Hidden and revealed attributes of the token don't add up to the amount supported by the key.
    HiddenCountMismatch {
        hidden: usize,
        revealed: usize,
        expected: usize,
    },
    InvalidSignature(SignatureError),
    ZeroSignature,
    ChallengeMismatch,
    Wire(WireError),
}

impl From<IndexIsOutOfBounds> for PresentationError {
    fn from(err: IndexIsOutOfBounds) -> Self {
        Self::RevealIndexIsOutOfBounds(err)
    }
}

impl From<InvalidPair<usize>> for PresentationError {
    fn from(err: InvalidPair<usize>) -> Self {
        Self::RevealIndicesMustBeUniqueAndSorted(err)
    }
}

impl From<WireError> for PresentationError {
    fn from(err: WireError) -> Self {
        Self::Wire(err)
    }
}

impl From<SignatureError> for PresentationError {
    fn from(err: SignatureError) -> Self {
        Self::InvalidSignature(err)
    }
}
