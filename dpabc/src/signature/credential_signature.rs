use alloc::vec::Vec;

use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::PrimeField;
use ark_serialize::*;
use ark_std::Zero;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use dpabc_utils::{multi_pairing, serde_utils::ArkObjectBytes};

use super::{Result, SignatureError};
use crate::{
    hashing::{hash0, HashDigest},
    setup::{PublicKey, SecretKey},
    wire::{self, point_len, scalar_len, FromWire, ToWire, WireReader, WireWriter},
};

/// Signature `(sigma_1, sigma_2, m')` over an epoch and an attribute vector where
/// `(m', sigma_1) = hash0(attributes)` and `sigma_2 = sigma_1 * (x + m' * y_m + epoch * y_epoch + \sum_{i}(a_{i} * y_{i}))`.
/// Signatures of different issuers over the same attributes share `sigma_1` and `m'`.
#[serde_as]
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct Signature<E: Pairing> {
    #[serde_as(as = "ArkObjectBytes")]
    pub(crate) sigma_1: E::G2Affine,
    #[serde_as(as = "ArkObjectBytes")]
    pub(crate) sigma_2: E::G2Affine,
    #[serde_as(as = "ArkObjectBytes")]
    pub(crate) m_prime: E::ScalarField,
}

impl<E: Pairing> Signature<E> {
    /// Signs `attributes` under `epoch`. The signature is deterministic, signing the same input twice
    /// gives the same value.
    pub fn new<D: HashDigest>(
        secret_key: &SecretKey<E::ScalarField>,
        epoch: &E::ScalarField,
        attributes: &[E::ScalarField],
    ) -> Result<Self> {
        ensure_attribute_count(attributes, secret_key.supported_attribute_count())?;

        let (m_prime, sigma_1) = hash0::<E, D>(attributes);
        let exponent = secret_key.signing_exponent(&m_prime, epoch, attributes);
        let sigma_2 = sigma_1.mul_bigint(exponent.into_bigint()).into_affine();

        Ok(Self::from_parts(sigma_1, sigma_2, m_prime))
    }

    /// Verifies the signature over `attributes` and `epoch`, checking that
    /// `e(Vx + m' * Vy_m + epoch * Vy_epoch + \sum_{i}(a_{i} * Vy_{i}), sigma_1) == e(g1, sigma_2)`.
    /// Works for combined signatures and aggregated keys as well.
    pub fn verify(
        &self,
        public_key: &PublicKey<E>,
        epoch: &E::ScalarField,
        attributes: &[E::ScalarField],
    ) -> Result<()> {
        ensure_attribute_count(attributes, public_key.supported_attribute_count())?;
        if self.is_zero() {
            Err(SignatureError::ZeroSignature)?
        }

        let bases: Vec<_> = [public_key.vy_m, public_key.vy_epoch]
            .into_iter()
            .chain(public_key.vy.iter().copied())
            .collect();
        let scalars: Vec<_> = [self.m_prime, *epoch]
            .into_iter()
            .chain(attributes.iter().copied())
            .collect();
        let committed =
            <E::G1 as VariableBaseMSM>::msm_unchecked(&bases, &scalars) + public_key.vx;

        self.verify_pairing(committed)
    }

    /// Checks if a signature has zero elements. A valid signature should not have zero elements.
    pub fn is_zero(&self) -> bool {
        self.sigma_1.is_zero() || self.sigma_2.is_zero()
    }

    pub fn sigma_1(&self) -> &E::G2Affine {
        &self.sigma_1
    }

    pub fn sigma_2(&self) -> &E::G2Affine {
        &self.sigma_2
    }

    pub fn m_prime(&self) -> &E::ScalarField {
        &self.m_prime
    }

    /// Ensures that `e(committed, sigma_1) == e(g1, sigma_2)`.
    fn verify_pairing(&self, committed: E::G1) -> Result<()> {
        let prod = multi_pairing! {
            committed, self.sigma_1;
            -E::G1Affine::generator().into_group(), self.sigma_2
        };

        if prod.is_zero() {
            Ok(())
        } else {
            Err(SignatureError::PairingCheckFailed)
        }
    }

    pub(crate) fn from_parts(
        sigma_1: E::G2Affine,
        sigma_2: E::G2Affine,
        m_prime: E::ScalarField,
    ) -> Self {
        Self {
            sigma_1,
            sigma_2,
            m_prime,
        }
    }
}

fn ensure_attribute_count<F>(attributes: &[F], expected: usize) -> Result<()> {
    if attributes.len() == expected {
        Ok(())
    } else {
        Err(SignatureError::InvalidAttributeCount {
            received: attributes.len(),
            expected,
        })
    }
}

impl<E: Pairing> ToWire for Signature<E> {
    fn wire_len(&self) -> usize {
        2 * point_len::<E::G2Affine>() + scalar_len::<E::ScalarField>()
    }

    fn write_wire(&self, writer: &mut WireWriter) -> wire::Result<()> {
        writer.write_points([&self.sigma_1, &self.sigma_2])?;
        writer.write_scalar(&self.m_prime);

        Ok(())
    }
}

impl<E: Pairing> FromWire for Signature<E> {
    fn read_wire(reader: &mut WireReader<'_>) -> wire::Result<Self> {
        let sigma_1 = reader.read_point()?;
        let sigma_2 = reader.read_point()?;
        let m_prime = reader.read_scalar()?;

        Ok(Self::from_parts(sigma_1, sigma_2, m_prime))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{setup::test_setup, wire::WireError};
    use ark_bls12_381::Bls12_381;
    use ark_std::{
        rand::{rngs::StdRng, SeedableRng},
        UniformRand,
    };
    use blake2::Blake2b512;
    use sha3::Sha3_256;

    use test_utils::{Fr, G1, G2};

    #[test]
    fn sign_and_verify() {
        let mut rng = StdRng::seed_from_u64(0u64);
        for attribute_count in [0, 1, 2, 5, 10] {
            let (keypair, attrs) = test_setup::<Bls12_381, _>(&mut rng, attribute_count);
            let epoch = Fr::rand(&mut rng);

            let sig =
                Signature::<Bls12_381>::new::<Blake2b512>(&keypair.secret_key, &epoch, &attrs)
                    .unwrap();
            sig.verify(&keypair.public_key, &epoch, &attrs).unwrap();
            assert_eq!(
                sig,
                Signature::new::<Blake2b512>(&keypair.secret_key, &epoch, &attrs).unwrap()
            );
            assert!(!sig.is_zero());
        }
    }

    #[test]
    fn pairing_check_matches_equation() {
        let mut rng = StdRng::seed_from_u64(1u64);
        let (keypair, attrs) = test_setup::<Bls12_381, _>(&mut rng, 3);
        let epoch = Fr::from(42u64);
        let sig =
            Signature::<Bls12_381>::new::<Blake2b512>(&keypair.secret_key, &epoch, &attrs).unwrap();

        let pk = &keypair.public_key;
        let committed = pk.vx.into_group()
            + pk.vy_m * sig.m_prime
            + pk.vy_epoch * epoch
            + pk.vy
                .iter()
                .zip(&attrs)
                .map(|(vy, a)| *vy * a)
                .sum::<<Bls12_381 as Pairing>::G1>();
        let g1 = G1::generator();
        assert_eq!(
            Bls12_381::pairing(committed, sig.sigma_1),
            Bls12_381::pairing(g1, sig.sigma_2)
        );
        sig.verify_pairing(committed).unwrap();

        let shifted = committed + g1;
        assert_eq!(
            sig.verify_pairing(shifted),
            Err(SignatureError::PairingCheckFailed)
        );
    }

    #[test]
    fn other_digest() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let (keypair, attrs) = test_setup::<Bls12_381, _>(&mut rng, 4);
        let epoch = Fr::from(7u64);

        let sig =
            Signature::<Bls12_381>::new::<Sha3_256>(&keypair.secret_key, &epoch, &attrs).unwrap();
        sig.verify(&keypair.public_key, &epoch, &attrs).unwrap();
        assert_ne!(
            sig,
            Signature::new::<Blake2b512>(&keypair.secret_key, &epoch, &attrs).unwrap()
        );
    }

    #[test]
    fn tampering() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let (keypair, attrs) = test_setup::<Bls12_381, _>(&mut rng, 5);
        let (other_keypair, _) = test_setup::<Bls12_381, _>(&mut rng, 5);
        let epoch = Fr::rand(&mut rng);
        let sig =
            Signature::<Bls12_381>::new::<Blake2b512>(&keypair.secret_key, &epoch, &attrs).unwrap();

        for idx in 0..attrs.len() {
            let mut changed = attrs.clone();
            changed[idx] = Fr::rand(&mut rng);
            assert_eq!(
                sig.verify(&keypair.public_key, &epoch, &changed),
                Err(SignatureError::PairingCheckFailed)
            );
        }

        let mut swapped = attrs.clone();
        swapped.swap(0, 1);
        assert_eq!(
            sig.verify(&keypair.public_key, &epoch, &swapped),
            Err(SignatureError::PairingCheckFailed)
        );
        assert_eq!(
            sig.verify(&keypair.public_key, &(epoch + Fr::from(1u64)), &attrs),
            Err(SignatureError::PairingCheckFailed)
        );
        assert_eq!(
            sig.verify(&other_keypair.public_key, &epoch, &attrs),
            Err(SignatureError::PairingCheckFailed)
        );

        let mut forged = sig.clone();
        forged.m_prime = Fr::rand(&mut rng);
        assert_eq!(
            forged.verify(&keypair.public_key, &epoch, &attrs),
            Err(SignatureError::PairingCheckFailed)
        );
    }

    #[test]
    fn invalid_inputs() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let (keypair, attrs) = test_setup::<Bls12_381, _>(&mut rng, 3);
        let epoch = Fr::rand(&mut rng);

        assert_eq!(
            Signature::<Bls12_381>::new::<Blake2b512>(&keypair.secret_key, &epoch, &attrs[..2]),
            Err(SignatureError::InvalidAttributeCount {
                received: 2,
                expected: 3
            })
        );

        let sig =
            Signature::<Bls12_381>::new::<Blake2b512>(&keypair.secret_key, &epoch, &attrs).unwrap();
        assert_eq!(
            sig.verify(&keypair.public_key, &epoch, &[attrs.clone(), attrs.clone()].concat()),
            Err(SignatureError::InvalidAttributeCount {
                received: 6,
                expected: 3
            })
        );

        let mut zero = sig.clone();
        zero.sigma_1 = G2::zero();
        assert_eq!(
            zero.verify(&keypair.public_key, &epoch, &attrs),
            Err(SignatureError::ZeroSignature)
        );
        let mut zero = sig;
        zero.sigma_2 = G2::zero();
        assert_eq!(
            zero.verify(&keypair.public_key, &epoch, &attrs),
            Err(SignatureError::ZeroSignature)
        );
    }

    #[test]
    fn wire_encoding() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let (keypair, attrs) = test_setup::<Bls12_381, _>(&mut rng, 3);
        let epoch = Fr::rand(&mut rng);
        let sig =
            Signature::<Bls12_381>::new::<Blake2b512>(&keypair.secret_key, &epoch, &attrs).unwrap();

        let bytes = sig.to_wire_bytes().unwrap();
        assert_eq!(bytes.len(), 2 * 96 + 32);
        assert_eq!(bytes.len(), sig.wire_len());
        assert_eq!(Signature::<Bls12_381>::from_wire_bytes(&bytes).unwrap(), sig);

        assert!(matches!(
            Signature::<Bls12_381>::from_wire_bytes(&bytes[..bytes.len() - 1]),
            Err(WireError::UnexpectedEnd { .. })
        ));
        assert_eq!(
            Signature::<Bls12_381>::from_wire_bytes(&[bytes.clone(), vec![0; 3]].concat()),
            Err(WireError::TrailingBytes(3))
        );

        let mut bad_scalar = bytes;
        bad_scalar[2 * 96..].fill(0xff);
        assert_eq!(
            Signature::<Bls12_381>::from_wire_bytes(&bad_scalar),
            Err(WireError::InvalidScalar)
        );
    }
}
