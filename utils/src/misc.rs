use alloc::vec::Vec;
use ark_ec::{AffineRepr, CurveGroup};
use ark_std::{rand::RngCore, UniformRand};

use crate::{msm::multiply_field_elems_with_same_group_elem, try_iter::InvalidPair};

/// Ensures that each sequence pair satisfy provided predicate.
pub fn seq_pairs_satisfy<I, F>(mut validate: F) -> impl FnMut(&I) -> Option<InvalidPair<I>>
where
    I: Clone,
    F: FnMut(&I, &I) -> bool,
{
    let mut last = None;

    move |item: &I| -> Option<InvalidPair<I>> {
        if let Some((prev, _)) = last
            .replace(item.clone())
            .zip(last.as_ref())
            .filter(|(prev, cur)| !validate(prev, cur))
        {
            Some(InvalidPair(prev, item.clone()))
        } else {
            None
        }
    }
}

/// Returns `true` if `a < b`.
pub fn is_lt<I: PartialOrd>(a: &I, b: &I) -> bool {
    a < b
}

/// Generates an iterator of randoms producing `count` elements using the supplied `rng`.
pub fn n_rand<'a, T: UniformRand, R: RngCore>(
    rng: &'a mut R,
    count: usize,
) -> impl ExactSizeIterator<Item = T> + 'a {
    (0..count).map(move |_| rand(rng))
}

/// Generates a random using given `rng`.
pub fn rand<T: UniformRand, R: RngCore>(rng: &mut R) -> T {
    UniformRand::rand(rng)
}

/// Produces points by multiplying supplied base by the provided scalars.
pub fn points<G: AffineRepr>(base: &G, scalars: &[G::ScalarField]) -> Vec<G> {
    let group = base.into_group();
    let products = multiply_field_elems_with_same_group_elem(group, scalars);

    G::Group::normalize_batch(&products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Fr, G1Affine};
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn sorted_sequences() {
        let mut check = seq_pairs_satisfy(is_lt);
        assert!([1, 3, 7].iter().all(|i| check(i).is_none()));

        let mut check = seq_pairs_satisfy(is_lt);
        let failures: Vec<_> = [1, 3, 3, 2].iter().filter_map(|i| check(i)).collect();
        assert_eq!(failures, vec![InvalidPair(3, 3), InvalidPair(3, 2)]);
    }

    #[test]
    fn points_are_scalar_multiples() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let g = G1Affine::generator();
        let scalars: Vec<Fr> = n_rand(&mut rng, 5).collect();

        let res = points(&g, &scalars);
        assert_eq!(res.len(), 5);
        for (p, s) in res.iter().zip(&scalars) {
            assert_eq!(*p, (g * s).into_affine());
        }
    }
}
