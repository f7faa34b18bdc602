//! # Multi-issuer anonymous credentials with selective disclosure
//!
//! A Pointcheval-Sanders style signature over an attribute vector bound to an epoch, where the signature lives
//! in G2 and the issuer keys in G1. Several issuers can sign the same attribute vector and their signatures
//! are combined into one signature verifiable under the aggregation of their public keys. The aggregation
//! weights every key by a coefficient derived from the whole ordered key list, which defeats rogue-key attacks.
//!
//! A credential holder presents a rerandomized signature together with a non-interactive Schnorr proof
//! (Fiat-Shamir over a pairing commitment) that reveals only a chosen subset of the attributes and is bound
//! to an application message.
//!
//! ## Modules
//!
//! 1. Issuer keys, key generation and key aggregation - [`setup`].
//! 2. Signing, combination of issuer signatures and verification - [`signature`].
//! 3. Presentation tokens for selective disclosure - [`presentation`].
//! 4. Domain separated hash functions used by the above - [`hashing`].
//! 5. Fixed-width byte encoding of all the objects - [`wire`].
//!
//! Keys and signatures of different issuers are combined in the order they are supplied in, so signers and
//! verifiers must agree on a canonical ordering of the issuers.
//!
//! [`setup`]: crate::setup
//! [`signature`]: crate::signature
//! [`presentation`]: crate::presentation
//! [`hashing`]: crate::hashing
//! [`wire`]: crate::wire

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod hashing;
pub mod presentation;
pub mod setup;
pub mod signature;
pub mod wire;


pub use presentation::{HiddenIndices, PresentationError, PresentationToken, RandomizedSignature};
pub use setup::{KeyError, Keypair, PublicKey, SecretKey, MAX_ATTRIBUTES};
pub use signature::{Signature, SignatureError};
pub use wire::{FromWire, ToWire, WireError, WireReader, WireWriter};

pub mod prelude {
    pub use crate::{
        hashing::{epoch_from_bytes, HashDigest},
        presentation::{PresentationError, PresentationToken},
        setup::{KeyError, Keypair, PublicKey, SecretKey},
        signature::{Signature, SignatureError},
        wire::{FromWire, ToWire, WireError},
    };
}
