//! Domain separated hash functions of the scheme.
//!
//! - `hash0` maps an attribute vector to the auxiliary scalar `m'` and the G2 base `sigma_1` of a signature.
//! - `hash1` maps an ordered list of public keys to one aggregation coefficient per key.
//! - `hash2` is the Fiat-Shamir challenge of a presentation token.

use alloc::vec::Vec;
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ff::PrimeField;
use ark_serialize::CanonicalSerialize;
use digest::Digest;
use dpabc_utils::{
    aliases::FullDigest,
    concat_slices,
    hashing_utils::{affine_group_elem_from_try_and_incr, field_elem_from_dst},
};

pub use dpabc_utils::aliases::HashDigest;

use crate::{
    setup::PublicKey,
    wire::{scalar_len, Result, ToWire, WireWriter},
};

pub const HASH0_SCALAR_TAG: &[u8] = b"ENCZP0";
pub const HASH0_POINT_TAG: &[u8] = b"ENCEC0";
pub const HASH1_TAG: &[u8] = b"ENCZP1";
pub const HASH2_TAG: &[u8] = b"ENCZP2";
pub const EPOCH_TAG: &[u8] = b"ENCZPE";

/// Derives `(m', sigma_1)` from the wire encoding of the attributes. Both depend on the position of each attribute.
pub fn hash0<E: Pairing, D: HashDigest>(
    attributes: &[E::ScalarField],
) -> (E::ScalarField, E::G2Affine) {
    let mut writer = WireWriter::with_capacity(attributes.len() * scalar_len::<E::ScalarField>());
    writer.write_scalars(attributes);
    let bytes = writer.into_bytes();

    (
        field_elem_from_dst::<_, D>(HASH0_SCALAR_TAG, &bytes),
        affine_group_elem_from_try_and_incr::<E::G2Affine, D>(HASH0_POINT_TAG, &bytes),
    )
}

/// Derives aggregation coefficients `t_0..t_{k-1}` for the ordered public keys.
/// Every coefficient depends on all keys and on their order, so reordering the keys changes all of them.
pub fn hash1<E: Pairing, D: HashDigest>(
    public_keys: &[PublicKey<E>],
) -> Result<Vec<E::ScalarField>> {
    let mut writer = WireWriter::with_capacity(public_keys.iter().map(ToWire::wire_len).sum());
    for pk in public_keys {
        pk.write_wire(&mut writer)?;
    }
    let keys_digest = <D as Digest>::digest(writer.as_bytes());

    Ok((0..public_keys.len() as u32)
        .map(|idx| {
            field_elem_from_dst::<_, D>(HASH1_TAG, &concat_slices!(keys_digest, idx.to_le_bytes()))
        })
        .collect())
}

/// Derives the challenge binding `message`, the key, the randomized signature and the pairing commitment.
pub fn hash2<E: Pairing, D: HashDigest>(
    message: &[u8],
    public_key: &PublicKey<E>,
    sigma_1: &E::G2Affine,
    sigma_2: &E::G2Affine,
    commitment: &PairingOutput<E>,
) -> Result<E::ScalarField> {
    let mut writer = WireWriter::with_capacity(8 + message.len() + public_key.wire_len());
    writer.write_bytes(&(message.len() as u64).to_le_bytes());
    writer.write_bytes(message);
    public_key.write_wire(&mut writer)?;
    writer.write_point(sigma_1)?;
    writer.write_point(sigma_2)?;

    let mut bytes = writer.into_bytes();
    commitment.serialize_compressed(&mut bytes)?;

    Ok(field_elem_from_dst::<_, D>(HASH2_TAG, &bytes))
}

/// Derives an epoch scalar from an external epoch value such as a timestamp or a version string.
pub fn epoch_from_bytes<F: PrimeField, D: FullDigest>(epoch: &[u8]) -> F {
    field_elem_from_dst::<F, D>(EPOCH_TAG, epoch)
}
