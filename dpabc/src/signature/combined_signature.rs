use alloc::vec::Vec;

use ark_ec::{pairing::Pairing, CurveGroup};
use ark_std::{end_timer, start_timer};

use dpabc_utils::{expect_equality, msm::msm_trunc};

use super::{Result, Signature, SignatureError};
use crate::{
    hashing::{hash1, HashDigest},
    setup::PublicKey,
};

impl<E: Pairing> Signature<E> {
    /// Combines signatures of several issuers over the same epoch and attributes into one signature
    /// verifiable under `PublicKey::aggregate(public_keys)`. `signatures[i]` must be issued with the key
    /// `public_keys[i]`, and both the order and the keys must be the ones used for the aggregation.
    ///
    /// `sigma_2 = \sum_{i}(t_{i} * sigma_2_{i})` where `t = hash1(public_keys)`.
    pub fn combine<D: HashDigest>(public_keys: &[PublicKey<E>], signatures: &[Self]) -> Result<Self> {
        let first = signatures.first().ok_or(SignatureError::NoSignatures)?;
        expect_equality!(
            public_keys.len(),
            signatures.len(),
            |keys, signatures| SignatureError::KeyAndSignatureCountMismatch { keys, signatures }
        );
        if let Some(index) = signatures
            .iter()
            .position(|sig| sig.sigma_1 != first.sigma_1 || sig.m_prime != first.m_prime)
        {
            Err(SignatureError::InconsistentSignature(index))?
        }

        let combine_time = start_timer!(|| "Combining signatures");
        let coefficients = hash1::<E, D>(public_keys)?;
        let sigma_2s: Vec<_> = signatures.iter().map(|sig| sig.sigma_2).collect();
        let sigma_2 = msm_trunc::<E::G2>(&sigma_2s, &coefficients).into_affine();
        end_timer!(combine_time);

        Ok(Self::from_parts(first.sigma_1, sigma_2, first.m_prime))
    }

    /// Aggregates `public_keys` and verifies the signature under the result.
    pub fn verify_aggregated<D: HashDigest>(
        &self,
        public_keys: &[PublicKey<E>],
        epoch: &E::ScalarField,
        attributes: &[E::ScalarField],
    ) -> Result<()> {
        let public_key = PublicKey::aggregate::<D>(public_keys)?;

        self.verify(&public_key, epoch, attributes)
    }
}
