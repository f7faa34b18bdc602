//! Issuer keys: generation, derivation of public keys and aggregation of public keys of several issuers.

use alloc::vec::Vec;

mod error;
pub mod keypair;

pub use error::*;
pub use keypair::*;

/// Max amount of attributes a key can sign. The count is stored in a single byte.
pub const MAX_ATTRIBUTES: usize = u8::MAX as usize;

/// Returns `Err` if keys for `attribute_count` attributes can't be created.
pub fn check_attribute_count(attribute_count: usize) -> Result<(), KeyError> {
    if attribute_count > MAX_ATTRIBUTES {
        Err(KeyError::TooManyAttributes {
            received: attribute_count,
            max: MAX_ATTRIBUTES,
        })
    } else {
        Ok(())
    }
}

/// **Not intended to be used anywhere except for tests and benchmarks.**
/// Generates an issuer keypair along with random attributes it can sign.
pub fn test_setup<E, R>(
    rng: &mut R,
    attribute_count: usize,
) -> (Keypair<E>, Vec<E::ScalarField>)
where
    E: ark_ec::pairing::Pairing,
    R: ark_std::rand::RngCore,
{
    use dpabc_utils::misc::n_rand;

    let keypair = Keypair::generate(rng, attribute_count).expect("Too many attributes");
    let attributes = n_rand(rng, attribute_count).collect();

    (keypair, attributes)
}
