use alloc::vec::Vec;
use ark_ec::AffineRepr;
use ark_ff::{BigInteger, PrimeField};

use super::{point_len, scalar_len, Result, WireError, IDENTITY_MARKER};

/// Appends fixed-width fields to an owned buffer.
#[derive(Debug, Default, Clone)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Writes the length of a sequence as a single byte.
    pub fn write_count(&mut self, count: usize) -> Result<()> {
        let count = u8::try_from(count).map_err(|_| WireError::TooManyElements(count))?;
        self.write_u8(count);

        Ok(())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes the scalar as a big-endian integer of `scalar_len::<F>()` bytes.
    pub fn write_scalar<F: PrimeField>(&mut self, scalar: &F) {
        let bytes = scalar.into_bigint().to_bytes_be();
        let len = scalar_len::<F>();

        self.buf.extend_from_slice(&bytes[bytes.len() - len..]);
    }

    pub fn write_scalars<'a, F: PrimeField>(&mut self, scalars: impl IntoIterator<Item = &'a F>) {
        for scalar in scalars {
            self.write_scalar(scalar);
        }
    }

    /// Writes the compressed encoding of the point, or the sentinel pattern for the identity.
    pub fn write_point<G: AffineRepr>(&mut self, point: &G) -> Result<()> {
        if point.is_zero() {
            let len = point_len::<G>();
            self.buf.resize(self.buf.len() + len, IDENTITY_MARKER);
        } else {
            point.serialize_compressed(&mut self.buf)?;
        }

        Ok(())
    }

    pub fn write_points<'a, G: AffineRepr>(
        &mut self,
        points: impl IntoIterator<Item = &'a G>,
    ) -> Result<()> {
        points
            .into_iter()
            .try_for_each(|point| self.write_point(point))
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
