use ark_ec::pairing::Pairing;
use ark_serialize::*;
use ark_std::rand::RngCore;
use serde::{Deserialize, Serialize};

use dpabc_utils::aliases::{FullDigest, SyncIfParallel};

mod public;
mod secret;

pub use public::*;
pub use secret::*;

use super::KeyError;

/// Secret key of an issuer together with the public key derived from it.
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct Keypair<E: Pairing> {
    pub secret_key: SecretKey<E::ScalarField>,
    pub public_key: PublicKey<E>,
}

impl<E: Pairing> Keypair<E> {
    /// Generates a random keypair compatible with `attribute_count` attributes.
    pub fn generate<R: RngCore>(rng: &mut R, attribute_count: usize) -> Result<Self, KeyError> {
        SecretKey::rand(rng, attribute_count).map(Self::from_secret_key)
    }

    /// Derives a keypair compatible with `attribute_count` attributes from supplied seed.
    pub fn from_seed<D>(seed: &[u8], attribute_count: usize) -> Result<Self, KeyError>
    where
        D: FullDigest + SyncIfParallel,
    {
        SecretKey::from_seed::<D>(seed, attribute_count).map(Self::from_secret_key)
    }

    pub fn from_secret_key(secret_key: SecretKey<E::ScalarField>) -> Self {
        let public_key = PublicKey::new(&secret_key);

        Self {
            secret_key,
            public_key,
        }
    }
}
