use alloc::vec::Vec;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{
    field_hashers::{DefaultFieldHasher, HashToField},
    PrimeField,
};
use ark_serialize::CanonicalSerialize;
use ark_std::Zero;
use digest::Digest;

use crate::aliases::FullDigest;

/// Hashes `msg` to `count` field elements with `expand_message_xmd` as described in
/// <https://datatracker.ietf.org/doc/html/rfc9380#section-5>, using `dst` as the domain separation tag.
/// Each output depends on its position so the result is sensitive to `count`.
pub fn hash_to_field<F, D>(dst: &[u8], msg: &[u8], count: usize) -> Vec<F>
where
    F: PrimeField,
    D: FullDigest,
{
    <DefaultFieldHasher<D> as HashToField<F>>::new(dst).hash_to_field(msg, count)
}

/// Hashes `msg` to a single field element under the domain separation tag `dst`.
pub fn field_elem_from_dst<F, D>(dst: &[u8], msg: &[u8]) -> F
where
    F: PrimeField,
    D: FullDigest,
{
    hash_to_field::<F, D>(dst, msg, 1)
        .pop()
        .unwrap_or_else(F::zero)
}

/// Hash bytes to a point of the prime order subgroup using try-and-increment. Returns as Projective coordinates.
/// The digest output is stretched to the width of a compressed point before being interpreted as an `x` coordinate.
/// This is vulnerable to timing attack and is only used when input is considered public anyway.
pub fn projective_group_elem_from_try_and_incr<G: AffineRepr, D: Digest>(
    dst: &[u8],
    bytes: &[u8],
) -> G::Group {
    let width = G::generator().compressed_size();
    let dst_len = [dst.len() as u8];
    let mut attempt = 0u64;

    loop {
        let input = concat_slices!(dst_len, dst, bytes, attempt.to_le_bytes());
        let candidate = expand_digest::<D>(&input, width);

        if let Some(point) = G::from_random_bytes(&candidate) {
            let point = point.mul_by_cofactor_to_group();
            if !point.is_zero() {
                return point;
            }
        }
        attempt += 1;
    }
}

/// Hash bytes to a point of the prime order subgroup using try-and-increment. Returns as Affine coordinates.
/// This is vulnerable to timing attack and is only used when input is considered public anyway.
pub fn affine_group_elem_from_try_and_incr<G: AffineRepr, D: Digest>(
    dst: &[u8],
    bytes: &[u8],
) -> G {
    projective_group_elem_from_try_and_incr::<G, D>(dst, bytes).into_affine()
}

/// Produces `len` bytes as `D(input || 0) || D(input || 1) || ...` truncated to `len`.
fn expand_digest<D: Digest>(input: &[u8], len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    let mut counter = 0u32;

    while out.len() < len {
        let mut hasher = D::new();
        hasher.update(input);
        hasher.update(counter.to_le_bytes());
        out.extend_from_slice(&hasher.finalize());
        counter += 1;
    }
    out.truncate(len);

    out
}
