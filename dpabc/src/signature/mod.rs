//! Signatures over an epoch and an attribute vector.
//!
//! An issuer signs with `Signature::new`. Signatures of several issuers over the same epoch and attributes are
//! combined with `Signature::combine` and the result verifies under `PublicKey::aggregate` of their keys taken
//! in the same order.

mod combined_signature;
mod credential_signature;
mod error;

pub use credential_signature::*;
pub use error::*;

type Result<T, E = SignatureError> = core::result::Result<T, E>;
