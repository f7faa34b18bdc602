//! Presentation tokens: selective disclosure of signed attributes.
//!
//! A holder of a (possibly combined) signature creates a `PresentationToken` proving that the signature is valid
//! under a public key and an epoch while disclosing only the attributes at chosen indices. Every token uses fresh
//! randomness so tokens created from the same signature can't be linked to each other or to the signature.
//! The proof is made non-interactive by the Fiat-Shamir transform with `hash2` over the application message,
//! the key, the rerandomized signature and the pairing commitment.

mod error;
mod hidden_indices;
mod randomized_signature;
mod token;
mod witnesses;

pub use error::*;
pub use hidden_indices::*;
pub use randomized_signature::*;
pub use token::*;
pub(crate) use witnesses::*;

type Result<T, E = PresentationError> = core::result::Result<T, E>;
