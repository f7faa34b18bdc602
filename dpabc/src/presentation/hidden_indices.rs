use alloc::vec::Vec;
use core::ops::Deref;

use dpabc_utils::{
    misc::{is_lt, seq_pairs_satisfy},
    try_iter::IndexIsOutOfBounds,
};

use super::{PresentationError, Result};

/// Ascending indices of the attributes not disclosed by a presentation, i.e. the complement of
/// the revealed indices within `0..attribute_count`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HiddenIndices(Vec<usize>);

impl HiddenIndices {
    /// Validates that `revealed` is strictly ascending and within `0..attribute_count`, then computes its complement.
    pub fn new(revealed: &[usize], attribute_count: usize) -> Result<Self> {
        let mut ascending = seq_pairs_satisfy(is_lt);
        for &idx in revealed {
            IndexIsOutOfBounds::check(idx, attribute_count)?;
            if let Some(invalid) = ascending(&idx) {
                Err(PresentationError::from(invalid))?
            }
        }

        let mut revealed = revealed.iter().copied().peekable();
        let hidden = (0..attribute_count)
            .filter(|idx| revealed.next_if_eq(idx).is_none())
            .collect();

        Ok(Self(hidden))
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl Deref for HiddenIndices {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
