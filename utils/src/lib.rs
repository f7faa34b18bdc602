#![cfg_attr(not(feature = "std"), no_std)]

//! Helpers shared by the DPABC crates: parallelism macros, serde adapters for arkworks objects,
//! domain-separated hashing to fields and curves, and small iteration/validation utilities.

extern crate alloc;

#[macro_use]
pub mod macros;
pub mod aliases;
pub mod hashing_utils;
pub mod misc;
pub mod msm;
pub mod serde_utils;
pub mod try_iter;
