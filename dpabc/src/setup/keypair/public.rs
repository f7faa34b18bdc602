use alloc::vec::Vec;
use core::iter::once;

use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_serialize::*;
use ark_std::{cfg_into_iter, end_timer, start_timer};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use dpabc_utils::{join, misc::points, msm::msm_trunc, serde_utils::ArkObjectBytes};

use super::SecretKey;
use crate::{
    hashing::{hash1, HashDigest},
    setup::{KeyError, MAX_ATTRIBUTES},
    wire::{self, point_len, FromWire, ToWire, WireReader, WireWriter},
};

/// `PublicKey` of an issuer or an aggregation of several issuers' keys.
/// Each element is the corresponding secret key scalar multiplied by the G1 generator.
#[serde_as]
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct PublicKey<E: Pairing> {
    #[serde_as(as = "ArkObjectBytes")]
    pub(crate) vx: E::G1Affine,
    #[serde_as(as = "ArkObjectBytes")]
    pub(crate) vy_m: E::G1Affine,
    #[serde_as(as = "ArkObjectBytes")]
    pub(crate) vy_epoch: E::G1Affine,
    #[serde_as(as = "Vec<ArkObjectBytes>")]
    pub(crate) vy: Vec<E::G1Affine>,
}

impl<E: Pairing> PublicKey<E> {
    /// Derives `PublicKey` from supplied secret key.
    pub fn new(
        SecretKey { x, y_m, y_epoch, y }: &SecretKey<E::ScalarField>,
    ) -> Self {
        let g = E::G1Affine::generator();

        let (vx, vy_m, vy_epoch, vy) = join!(
            g.mul_bigint(x.into_bigint()).into_affine(),
            g.mul_bigint(y_m.into_bigint()).into_affine(),
            g.mul_bigint(y_epoch.into_bigint()).into_affine(),
            points(&g, y)
        );

        Self {
            vx,
            vy_m,
            vy_epoch,
            vy,
        }
    }

    /// Aggregates public keys of several issuers into a key verifying their combined signatures.
    /// The result is `\sum_{i}(t_{i} * pk_{i})` for each element where `t = hash1(public_keys)`, so the
    /// order of `public_keys` matters and must be the same one used to combine the signatures.
    pub fn aggregate<D: HashDigest>(public_keys: &[Self]) -> Result<Self, KeyError> {
        let first = public_keys.first().ok_or(KeyError::NoKeys)?;
        let attribute_count = first.supported_attribute_count();
        if let Some((index, pk)) = public_keys
            .iter()
            .enumerate()
            .find(|(_, pk)| pk.supported_attribute_count() != attribute_count)
        {
            return Err(KeyError::AttributeCountMismatch {
                index,
                received: pk.supported_attribute_count(),
                expected: attribute_count,
            });
        }

        let agg_time = start_timer!(|| "Aggregating public keys");
        let coefficients = hash1::<E, D>(public_keys)?;

        let (vx, vy_m, vy_epoch, vy) = join!(
            weighted_sum::<E>(public_keys.iter().map(|pk| pk.vx), &coefficients),
            weighted_sum::<E>(public_keys.iter().map(|pk| pk.vy_m), &coefficients),
            weighted_sum::<E>(public_keys.iter().map(|pk| pk.vy_epoch), &coefficients),
            cfg_into_iter!(0..attribute_count)
                .map(|idx| {
                    weighted_sum::<E>(public_keys.iter().map(|pk| pk.vy[idx]), &coefficients)
                })
                .collect::<Vec<_>>()
        );
        end_timer!(agg_time);

        Ok(Self {
            vx: vx.into_affine(),
            vy_m: vy_m.into_affine(),
            vy_epoch: vy_epoch.into_affine(),
            vy: E::G1::normalize_batch(&vy),
        })
    }

    /// Returns max amount of attributes supported by this public key.
    pub fn supported_attribute_count(&self) -> usize {
        self.vy.len()
    }

    /// Returns `true` if the public key doesn't have zero elements and supports no more than `MAX_ATTRIBUTES`.
    pub fn valid(&self) -> bool {
        self.vy.len() <= MAX_ATTRIBUTES
            && !once(&self.vx)
                .chain([&self.vy_m, &self.vy_epoch])
                .chain(&self.vy)
                .any(AffineRepr::is_zero)
    }

    pub fn vx(&self) -> &E::G1Affine {
        &self.vx
    }

    pub fn vy_m(&self) -> &E::G1Affine {
        &self.vy_m
    }

    pub fn vy_epoch(&self) -> &E::G1Affine {
        &self.vy_epoch
    }

    pub fn vy(&self) -> &[E::G1Affine] {
        &self.vy
    }
}

impl<E: Pairing> ToWire for PublicKey<E> {
    fn wire_len(&self) -> usize {
        1 + (3 + self.vy.len()) * point_len::<E::G1Affine>()
    }

    fn write_wire(&self, writer: &mut WireWriter) -> wire::Result<()> {
        writer.write_count(self.vy.len())?;
        writer.write_points([&self.vx, &self.vy_m, &self.vy_epoch])?;
        writer.write_points(&self.vy)
    }
}

impl<E: Pairing> FromWire for PublicKey<E> {
    fn read_wire(reader: &mut WireReader<'_>) -> wire::Result<Self> {
        let attribute_count = reader.read_count()?;
        let vx = reader.read_point()?;
        let vy_m = reader.read_point()?;
        let vy_epoch = reader.read_point()?;
        let vy = reader.read_points(attribute_count)?;

        Ok(Self {
            vx,
            vy_m,
            vy_epoch,
            vy,
        })
    }
}

/// `\sum_{i}(bases_{i} * coefficients_{i})`
fn weighted_sum<E: Pairing>(
    bases: impl Iterator<Item = E::G1Affine>,
    coefficients: &[E::ScalarField],
) -> E::G1 {
    let bases: Vec<_> = bases.collect();

    msm_trunc(&bases, coefficients)
}
