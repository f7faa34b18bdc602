use crate::wire::WireError;

/// An error originated from issuer keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    TooManyAttributes {
        received: usize,
        max: usize,
    },
    NoKeys,
    /// Key at `index` supports another amount of attributes than the first key.
    AttributeCountMismatch {
        index: usize,
        received: usize,
        expected: usize,
    },
    Wire(WireError),
}

impl From<WireError> for KeyError {
    fn from(err: WireError) -> Self {
        Self::Wire(err)
    }
}
