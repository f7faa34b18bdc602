use alloc::vec::Vec;

use ark_ec::{pairing::Pairing, AffineRepr, VariableBaseMSM};
use ark_serialize::*;
use ark_std::{end_timer, rand::RngCore, start_timer};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use dpabc_utils::{expect_equality, misc::rand, multi_pairing, serde_utils::ArkObjectBytes};

use super::{
    HiddenIndices, PresentationError, RandomizedSignature, Responses, Result, Witnesses,
};
use crate::{
    hashing::{hash2, HashDigest},
    setup::PublicKey,
    signature::Signature,
    wire::{self, scalar_len, scalar_to_bytes, FromWire, ToWire, WireReader, WireWriter},
};

/// Non-interactive proof of knowledge of a signature over an attribute vector of which only the attributes
/// at the revealed indices are disclosed. The proof is bound to an application message.
///
/// Consists of the rerandomized signature `(sigma_1', sigma_2')`, the challenge `c` and the responses
/// for `t`, `m'` and each hidden attribute in ascending index order.
#[serde_as]
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct PresentationToken<E: Pairing> {
    pub(crate) signature: RandomizedSignature<E>,
    #[serde_as(as = "ArkObjectBytes")]
    pub(crate) challenge: E::ScalarField,
    #[serde_as(as = "ArkObjectBytes")]
    pub(crate) v_t: E::ScalarField,
    #[serde_as(as = "ArkObjectBytes")]
    pub(crate) v_m_prime: E::ScalarField,
    #[serde_as(as = "Vec<ArkObjectBytes>")]
    pub(crate) v_hidden: Vec<E::ScalarField>,
}

impl<E: Pairing> PresentationToken<E> {
    /// Proves knowledge of `signature` over `epoch` and `attributes` revealing only `attributes` at
    /// `revealed_indices`, which must be strictly ascending. The token is bound to `message`.
    /// Fails if the signature doesn't verify, since such a token would be rejected anyway.
    ///
    /// The signature is rerandomized as `(sigma_1 * r, (sigma_2 + sigma_1 * t) * r)`. The prover commits to
    /// `A = g1 * r_t + Vy_m * r_m' + \sum_{j in hidden}(Vy_{j} * r_{j})` and `P = e(A, sigma_1')`, gets the
    /// challenge `c = hash2(message, pk, sigma_1', sigma_2', P)` and responds with `r_w - c * w` for each witness `w`.
    #[allow(clippy::too_many_arguments)]
    pub fn new<R: RngCore, D: HashDigest>(
        rng: &mut R,
        public_key: &PublicKey<E>,
        signature: &Signature<E>,
        epoch: &E::ScalarField,
        attributes: &[E::ScalarField],
        revealed_indices: &[usize],
        message: &[u8],
    ) -> Result<Self> {
        let attribute_count = public_key.supported_attribute_count();
        if attributes.len() != attribute_count {
            Err(PresentationError::InvalidAttributeCount {
                received: attributes.len(),
                expected: attribute_count,
            })?
        }
        let hidden = HiddenIndices::new(revealed_indices, attribute_count)?;
        signature.verify(public_key, epoch, attributes)?;

        let present_time = start_timer!(|| "Creating presentation token");
        let mut r: E::ScalarField = rand(rng);
        let witnesses = Witnesses::new(
            rand(rng),
            signature.m_prime,
            hidden.iter().map(|&idx| attributes[idx]).collect(),
        );
        let blindings = Witnesses::rand_blindings(rng, hidden.len());

        let randomized = RandomizedSignature::new(signature, &r, &witnesses.t);
        r.zeroize();

        let bases: Vec<_> = [E::G1Affine::generator(), public_key.vy_m]
            .into_iter()
            .chain(hidden.iter().map(|&idx| public_key.vy[idx]))
            .collect();
        let scalars: Vec<_> = [blindings.t, blindings.m_prime]
            .into_iter()
            .chain(blindings.hidden.iter().copied())
            .collect();
        let commitment = E::pairing(
            <E::G1 as VariableBaseMSM>::msm_unchecked(&bases, &scalars),
            randomized.sigma_1,
        );

        let challenge = hash2::<E, D>(
            message,
            public_key,
            &randomized.sigma_1,
            &randomized.sigma_2,
            &commitment,
        )?;
        let Responses {
            t: v_t,
            m_prime: v_m_prime,
            hidden: v_hidden,
        } = witnesses.respond(&blindings, &challenge);
        end_timer!(present_time);

        Ok(Self {
            signature: randomized,
            challenge,
            v_t,
            v_m_prime,
            v_hidden,
        })
    }

    /// Verifies the token against `public_key`, `epoch` and the disclosed `revealed_attributes`, where the `i`-th
    /// attribute is the one at `revealed_indices[i]`. Recomputes
    /// `A' = g1 * v_t + Vy_m * v_m' - Vx * c - Vy_epoch * c * epoch + \sum_{j in hidden}(Vy_{j} * v_{j}) - \sum_{j in revealed}(Vy_{j} * c * a_{j})`
    /// and `P' = e(A', sigma_1') * e(g1 * c, sigma_2')` and accepts iff `hash2(message, pk, sigma_1', sigma_2', P')` equals `c`.
    pub fn verify<D: HashDigest>(
        &self,
        public_key: &PublicKey<E>,
        epoch: &E::ScalarField,
        revealed_attributes: &[E::ScalarField],
        revealed_indices: &[usize],
        message: &[u8],
    ) -> Result<()> {
        let attribute_count = public_key.supported_attribute_count();
        expect_equality!(
            revealed_attributes.len(),
            revealed_indices.len(),
            |attributes, indices| PresentationError::RevealedAttributeCountMismatch {
                attributes,
                indices
            }
        );
        if self.v_hidden.len() + revealed_indices.len() != attribute_count {
            Err(PresentationError::HiddenCountMismatch {
                hidden: self.v_hidden.len(),
                revealed: revealed_indices.len(),
                expected: attribute_count,
            })?
        }
        if self.signature.is_zero() {
            Err(PresentationError::ZeroSignature)?
        }
        let hidden = HiddenIndices::new(revealed_indices, attribute_count)?;

        let verify_time = start_timer!(|| "Verifying presentation token");
        let g1 = E::G1Affine::generator();
        let minus_c = -self.challenge;

        let bases: Vec<_> = [g1, public_key.vy_m, public_key.vx, public_key.vy_epoch]
            .into_iter()
            .chain(hidden.iter().map(|&idx| public_key.vy[idx]))
            .chain(revealed_indices.iter().map(|&idx| public_key.vy[idx]))
            .collect();
        let scalars: Vec<_> = [self.v_t, self.v_m_prime, minus_c, minus_c * epoch]
            .into_iter()
            .chain(self.v_hidden.iter().copied())
            .chain(revealed_attributes.iter().map(|attr| minus_c * attr))
            .collect();
        let commitment = multi_pairing! {
            <E::G1 as VariableBaseMSM>::msm_unchecked(&bases, &scalars), self.signature.sigma_1;
            g1 * self.challenge, self.signature.sigma_2
        };

        let challenge = hash2::<E, D>(
            message,
            public_key,
            &self.signature.sigma_1,
            &self.signature.sigma_2,
            &commitment,
        )?;
        let accepted: bool = scalar_to_bytes(&challenge)
            .ct_eq(&scalar_to_bytes(&self.challenge))
            .into();
        end_timer!(verify_time);

        if accepted {
            Ok(())
        } else {
            Err(PresentationError::ChallengeMismatch)
        }
    }

    /// Amount of attributes not disclosed by this token.
    pub fn hidden_count(&self) -> usize {
        self.v_hidden.len()
    }

    pub fn randomized_signature(&self) -> &RandomizedSignature<E> {
        &self.signature
    }

    pub fn challenge(&self) -> &E::ScalarField {
        &self.challenge
    }
}

impl<E: Pairing> ToWire for PresentationToken<E> {
    fn wire_len(&self) -> usize {
        1 + self.signature.wire_len() + (3 + self.v_hidden.len()) * scalar_len::<E::ScalarField>()
    }

    fn write_wire(&self, writer: &mut WireWriter) -> wire::Result<()> {
        writer.write_count(self.v_hidden.len())?;
        self.signature.write_wire(writer)?;
        writer.write_scalars([&self.challenge, &self.v_t, &self.v_m_prime]);
        writer.write_scalars(&self.v_hidden);

        Ok(())
    }
}

impl<E: Pairing> FromWire for PresentationToken<E> {
    fn read_wire(reader: &mut WireReader<'_>) -> wire::Result<Self> {
        let hidden_count = reader.read_count()?;
        let signature = RandomizedSignature::read_wire(reader)?;
        let challenge = reader.read_scalar()?;
        let v_t = reader.read_scalar()?;
        let v_m_prime = reader.read_scalar()?;
        let v_hidden = reader.read_scalars(hidden_count)?;

        Ok(Self {
            signature,
            challenge,
            v_t,
            v_m_prime,
            v_hidden,
        })
    }
}
