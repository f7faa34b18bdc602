use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::PrimeField;
use ark_serialize::*;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use dpabc_utils::{join, serde_utils::ArkObjectBytes};

use crate::{
    signature::Signature,
    wire::{self, point_len, FromWire, ToWire, WireReader, WireWriter},
};

/// Signature rerandomized for a single presentation, unlinkable to the original signature and to other presentations.
#[serde_as]
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct RandomizedSignature<E: Pairing> {
    #[serde_as(as = "ArkObjectBytes")]
    pub(crate) sigma_1: E::G2Affine,
    #[serde_as(as = "ArkObjectBytes")]
    pub(crate) sigma_2: E::G2Affine,
}

impl<E: Pairing> RandomizedSignature<E> {
    /// Randomizes provided signature using supplied scalars:
    /// `sigma_1' = sigma_1 * r` and `sigma_2' = (sigma_2 + sigma_1 * t) * r`.
    pub fn new(signature: &Signature<E>, r: &E::ScalarField, t: &E::ScalarField) -> Self {
        let (sigma_1, sigma_2) = join!(
            signature.sigma_1.mul_bigint(r.into_bigint()),
            <E::G2 as VariableBaseMSM>::msm_unchecked(
                &[signature.sigma_2, signature.sigma_1],
                &[*r, *r * t]
            )
        );

        Self {
            sigma_1: sigma_1.into_affine(),
            sigma_2: sigma_2.into_affine(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.sigma_1.is_zero() || self.sigma_2.is_zero()
    }

    pub fn sigma_1(&self) -> &E::G2Affine {
        &self.sigma_1
    }

    pub fn sigma_2(&self) -> &E::G2Affine {
        &self.sigma_2
    }
}

impl<E: Pairing> ToWire for RandomizedSignature<E> {
    fn wire_len(&self) -> usize {
        2 * point_len::<E::G2Affine>()
    }

    fn write_wire(&self, writer: &mut WireWriter) -> wire::Result<()> {
        writer.write_points([&self.sigma_1, &self.sigma_2])
    }
}

impl<E: Pairing> FromWire for RandomizedSignature<E> {
    fn read_wire(reader: &mut WireReader<'_>) -> wire::Result<Self> {
        let sigma_1 = reader.read_point()?;
        let sigma_2 = reader.read_point()?;

        Ok(Self { sigma_1, sigma_2 })
    }
}
