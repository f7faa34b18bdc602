use alloc::vec::Vec;

use ark_ff::PrimeField;
use ark_std::rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use dpabc_utils::misc::{n_rand, rand};

/// Values the prover shows knowledge of in a presentation: the randomizer `t` of `sigma_2`, `m'`
/// and the hidden attributes. The same shape holds the random blindings committing to them.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Witnesses<F: PrimeField> {
    pub t: F,
    pub m_prime: F,
    pub hidden: Vec<F>,
}

/// Schnorr responses `blinding - challenge * witness` for each of the `Witnesses`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Responses<F: PrimeField> {
    pub t: F,
    pub m_prime: F,
    pub hidden: Vec<F>,
}

impl<F: PrimeField> Witnesses<F> {
    pub fn new(t: F, m_prime: F, hidden: Vec<F>) -> Self {
        Self { t, m_prime, hidden }
    }

    /// Random blindings for witnesses with `hidden_count` hidden attributes.
    pub fn rand_blindings<R: RngCore>(rng: &mut R, hidden_count: usize) -> Self {
        let (t, m_prime) = (rand(rng), rand(rng));

        Self::new(t, m_prime, n_rand(rng, hidden_count).collect())
    }

    pub fn respond(&self, blindings: &Self, challenge: &F) -> Responses<F> {
        let respond = |blinding: &F, witness: &F| *blinding - *challenge * witness;

        Responses {
            t: respond(&blindings.t, &self.t),
            m_prime: respond(&blindings.m_prime, &self.m_prime),
            hidden: blindings
                .hidden
                .iter()
                .zip(&self.hidden)
                .map(|(blinding, witness)| respond(blinding, witness))
                .collect(),
        }
    }
}
