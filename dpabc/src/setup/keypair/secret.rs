use alloc::vec::Vec;

use ark_ff::PrimeField;
use ark_serialize::*;
use ark_std::rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::{Zeroize, ZeroizeOnDrop};

use dpabc_utils::{
    aliases::{FullDigest, SyncIfParallel},
    concat_slices,
    hashing_utils::field_elem_from_dst,
    join,
    misc::{n_rand, rand},
    serde_utils::ArkObjectBytes,
};

use crate::{
    setup::{check_attribute_count, KeyError},
    wire::{self, scalar_len, FromWire, ToWire, WireReader, WireWriter},
};

/// `SecretKey` of an issuer: `x`, `y_m`, `y_epoch` and one `y_i` per attribute.
#[serde_as]
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    CanonicalSerialize,
    CanonicalDeserialize,
    Serialize,
    Deserialize,
    Zeroize,
    ZeroizeOnDrop,
)]
pub struct SecretKey<F: PrimeField> {
    #[serde_as(as = "ArkObjectBytes")]
    pub(crate) x: F,
    #[serde_as(as = "ArkObjectBytes")]
    pub(crate) y_m: F,
    #[serde_as(as = "ArkObjectBytes")]
    pub(crate) y_epoch: F,
    #[serde_as(as = "Vec<ArkObjectBytes>")]
    pub(crate) y: Vec<F>,
}

impl<F: PrimeField> SecretKey<F> {
    const X_SALT: &'static [u8] = b"DPABC-X-KEYGEN-SALT";
    const Y_M_SALT: &'static [u8] = b"DPABC-Y-M-KEYGEN-SALT";
    const Y_EPOCH_SALT: &'static [u8] = b"DPABC-Y-EPOCH-KEYGEN-SALT";
    const Y_SALT: &'static [u8] = b"DPABC-Y-KEYGEN-SALT";

    /// Generates random secret key compatible with `attribute_count` attributes.
    pub fn rand<R: RngCore>(rng: &mut R, attribute_count: usize) -> Result<Self, KeyError> {
        check_attribute_count(attribute_count)?;

        let (x, y_m, y_epoch) = (rand(rng), rand(rng), rand(rng));
        let y = n_rand(rng, attribute_count).collect();

        Ok(Self { x, y_m, y_epoch, y })
    }

    /// Generates secret key compatible with `attribute_count` attributes from supplied seed.
    pub fn from_seed<D>(seed: &[u8], attribute_count: usize) -> Result<Self, KeyError>
    where
        D: FullDigest + SyncIfParallel,
    {
        check_attribute_count(attribute_count)?;

        let (x, y_m, y_epoch, y) = join!(
            field_elem_from_dst::<F, D>(Self::X_SALT, seed),
            field_elem_from_dst::<F, D>(Self::Y_M_SALT, seed),
            field_elem_from_dst::<F, D>(Self::Y_EPOCH_SALT, seed),
            (0..attribute_count as u32)
                .map(|idx| {
                    field_elem_from_dst::<F, D>(
                        Self::Y_SALT,
                        &concat_slices!(idx.to_le_bytes(), seed),
                    )
                })
                .collect::<Vec<_>>()
        );

        Ok(Self { x, y_m, y_epoch, y })
    }

    /// Returns max amount of attributes supported by this secret key.
    pub fn supported_attribute_count(&self) -> usize {
        self.y.len()
    }

    /// `x + m' * y_m + epoch * y_epoch + \sum_{i}(attributes_{i} * y_{i})`.
    /// `attributes` must have `supported_attribute_count` elements.
    pub(crate) fn signing_exponent(&self, m_prime: &F, epoch: &F, attributes: &[F]) -> F {
        attributes
            .iter()
            .zip(&self.y)
            .fold(self.x + *m_prime * self.y_m + *epoch * self.y_epoch, |acc, (attr, y)| {
                acc + *attr * y
            })
    }
}

impl<F: PrimeField> ToWire for SecretKey<F> {
    fn wire_len(&self) -> usize {
        1 + (3 + self.y.len()) * scalar_len::<F>()
    }

    fn write_wire(&self, writer: &mut WireWriter) -> wire::Result<()> {
        writer.write_count(self.y.len())?;
        writer.write_scalars([&self.x, &self.y_m, &self.y_epoch]);
        writer.write_scalars(&self.y);

        Ok(())
    }
}

impl<F: PrimeField> FromWire for SecretKey<F> {
    fn read_wire(reader: &mut WireReader<'_>) -> wire::Result<Self> {
        let attribute_count = reader.read_count()?;
        let x = reader.read_scalar()?;
        let y_m = reader.read_scalar()?;
        let y_epoch = reader.read_scalar()?;
        let y = reader.read_scalars(attribute_count)?;

        Ok(Self { x, y_m, y_epoch, y })
    }
}
