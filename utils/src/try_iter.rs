use serde::{Deserialize, Serialize};

/// Provided index is out of bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexIsOutOfBounds {
    pub index: usize,
    pub length: usize,
}

impl IndexIsOutOfBounds {
    /// Returns `Err` if `index` is not less than `length`.
    pub fn check(index: usize, length: usize) -> Result<(), Self> {
        if index < length {
            Ok(())
        } else {
            Err(Self { index, length })
        }
    }
}

/// This pair was invalid according to the supplied predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidPair<I>(pub I, pub I);
