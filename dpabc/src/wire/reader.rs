use alloc::vec::Vec;
use ark_ec::AffineRepr;
use ark_ff::PrimeField;

use super::{point_len, scalar_len, Result, WireError, IDENTITY_MARKER};

/// Reads fixed-width fields from a borrowed buffer, advancing past each one.
/// Any attempt to read beyond the end of the buffer fails without consuming anything.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// Amount of bytes not read yet.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// Takes next `len` bytes.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(WireError::UnexpectedEnd {
                needed: len,
                remaining,
            });
        }

        let bytes = &self.bytes[self.position..self.position + len];
        self.position += len;

        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.take(1).map(|bytes| bytes[0])
    }

    /// Reads a one byte sequence length.
    pub fn read_count(&mut self) -> Result<usize> {
        self.read_u8().map(usize::from)
    }

    /// Reads a big-endian scalar, rejecting values not below the field modulus.
    pub fn read_scalar<F: PrimeField>(&mut self) -> Result<F> {
        let be = self.take(scalar_len::<F>())?;
        let mut le: Vec<u8> = be.iter().rev().copied().collect();
        le.resize(F::zero().compressed_size(), 0);

        F::deserialize_compressed(&le[..]).map_err(|_| WireError::InvalidScalar)
    }

    pub fn read_scalars<F: PrimeField>(&mut self, count: usize) -> Result<Vec<F>> {
        (0..count).map(|_| self.read_scalar()).collect()
    }

    /// Reads a point of the prime order subgroup. The identity is accepted only in the sentinel form.
    pub fn read_point<G: AffineRepr>(&mut self) -> Result<G> {
        let bytes = self.take(point_len::<G>())?;
        if bytes.iter().all(|b| *b == IDENTITY_MARKER) {
            return Ok(G::zero());
        }

        let point =
            G::deserialize_compressed(bytes).map_err(|_| WireError::InvalidGroupElement)?;
        if point.is_zero() {
            Err(WireError::InvalidIdentityEncoding)
        } else {
            Ok(point)
        }
    }

    pub fn read_points<G: AffineRepr>(&mut self, count: usize) -> Result<Vec<G>> {
        (0..count).map(|_| self.read_point()).collect()
    }

    /// Consumes the reader ensuring that the whole buffer was read.
    pub fn finish(self) -> Result<()> {
        match self.remaining() {
            0 => Ok(()),
            left => Err(WireError::TrailingBytes(left)),
        }
    }
}
