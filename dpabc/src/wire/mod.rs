//! Positional fixed-width byte layout used to store and transport keys, signatures and presentation tokens.
//!
//! - Scalar: big-endian integer of `(MODULUS_BIT_SIZE + 7) / 8` bytes, values not below the modulus are rejected.
//! - G1/G2 element: compressed point, the identity is written as the same amount of `0x6c` bytes.
//! - Secret key: `[n: 1 byte][x][y_m][y_epoch][y_0..y_{n-1}]`.
//! - Public key: `[n: 1 byte][Vx][Vy_m][Vy_epoch][Vy_0..Vy_{n-1}]`.
//! - Signature: `[sigma_1][sigma_2][m']`.
//! - Presentation token: `[h: 1 byte][sigma_1'][sigma_2'][c][v_t][v_m'][v_0..v_{h-1}]`.
//!
//! There are no delimiters, so a truncated buffer or one with leftover bytes fails to decode.

use alloc::vec::Vec;
use ark_ec::AffineRepr;
use ark_ff::PrimeField;

mod error;
mod reader;
mod writer;

pub use error::*;
pub use reader::*;
pub use writer::*;

pub type Result<T, E = WireError> = core::result::Result<T, E>;

/// Byte used to fill the encoding of a group identity.
pub const IDENTITY_MARKER: u8 = 0x6c;

/// Width of the scalar encoding.
pub fn scalar_len<F: PrimeField>() -> usize {
    (F::MODULUS_BIT_SIZE as usize + 7) / 8
}

/// Width of the point encoding.
pub fn point_len<G: AffineRepr>() -> usize {
    G::generator().compressed_size()
}

/// An object with a fixed-width byte layout.
pub trait ToWire {
    /// Exact amount of bytes produced by `write_wire`.
    fn wire_len(&self) -> usize;

    fn write_wire(&self, writer: &mut WireWriter) -> Result<()>;

    fn to_wire_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = WireWriter::with_capacity(self.wire_len());
        self.write_wire(&mut writer)?;

        Ok(writer.into_bytes())
    }
}

/// An object that can be read back from its fixed-width byte layout.
pub trait FromWire: Sized {
    fn read_wire(reader: &mut WireReader<'_>) -> Result<Self>;

    /// Decodes an object occupying the whole `bytes`.
    fn from_wire_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = WireReader::new(bytes);
        let value = Self::read_wire(&mut reader)?;
        reader.finish()?;

        Ok(value)
    }
}

/// Encodes a scalar on its own.
pub fn scalar_to_bytes<F: PrimeField>(scalar: &F) -> Vec<u8> {
    let mut writer = WireWriter::with_capacity(scalar_len::<F>());
    writer.write_scalar(scalar);

    writer.into_bytes()
}

/// Decodes a scalar occupying the whole `bytes`.
pub fn scalar_from_bytes<F: PrimeField>(bytes: &[u8]) -> Result<F> {
    let mut reader = WireReader::new(bytes);
    let scalar = reader.read_scalar()?;
    reader.finish()?;

    Ok(scalar)
}

/// Encodes a group element on its own.
pub fn point_to_bytes<G: AffineRepr>(point: &G) -> Result<Vec<u8>> {
    let mut writer = WireWriter::with_capacity(point_len::<G>());
    writer.write_point(point)?;

    Ok(writer.into_bytes())
}

/// Decodes a group element occupying the whole `bytes`.
pub fn point_from_bytes<G: AffineRepr>(bytes: &[u8]) -> Result<G> {
    let mut reader = WireReader::new(bytes);
    let point = reader.read_point()?;
    reader.finish()?;

    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Fr, G1Affine, G2Affine};

    #[test]
    fn widths() {
        assert_eq!(scalar_len::<Fr>(), 32);
        assert_eq!(point_len::<G1Affine>(), 48);
        assert_eq!(point_len::<G2Affine>(), 96);
    }

    #[test]
    fn standalone_values() {
        let scalar = Fr::from(42u64);
        let bytes = scalar_to_bytes(&scalar);
        assert_eq!(bytes.len(), 32);
        assert_eq!(bytes[31], 42);
        assert_eq!(scalar_from_bytes::<Fr>(&bytes), Ok(scalar));
        assert_eq!(
            scalar_from_bytes::<Fr>(&[bytes.clone(), vec![0]].concat()),
            Err(WireError::TrailingBytes(1))
        );
        assert!(matches!(
            scalar_from_bytes::<Fr>(&bytes[1..]),
            Err(WireError::UnexpectedEnd { .. })
        ));

        let point = G2Affine::generator();
        let bytes = point_to_bytes(&point).unwrap();
        assert_eq!(bytes.len(), 96);
        assert_eq!(point_from_bytes::<G2Affine>(&bytes), Ok(point));
        assert!(point_from_bytes::<G1Affine>(&bytes).is_err());

        let identity = point_to_bytes(&G1Affine::zero()).unwrap();
        assert_eq!(identity, vec![IDENTITY_MARKER; 48]);
        assert_eq!(point_from_bytes::<G1Affine>(&identity), Ok(G1Affine::zero()));
    }
}
