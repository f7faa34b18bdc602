use digest::{Digest, DynDigest};

/// Marks a type that implements `DynDigest + Default + Clone`.
pub trait FullDigest: DynDigest + Default + Clone {}
impl<T: DynDigest + Default + Clone> FullDigest for T {}

/// A digest usable both for hashing to a field (`FullDigest`) and for try-and-increment hashing to a curve (`Digest`).
pub trait HashDigest: FullDigest + Digest {}
impl<T: FullDigest + Digest> HashDigest for T {}

/// `Sync` if the `parallel` feature enabled
#[cfg(feature = "parallel")]
pub trait SyncIfParallel: Sync {}
#[cfg(feature = "parallel")]
impl<T: Sync> SyncIfParallel for T {}

/// `Sync` if the `parallel` feature enabled
#[cfg(not(feature = "parallel"))]
pub trait SyncIfParallel {}
#[cfg(not(feature = "parallel"))]
impl<T> SyncIfParallel for T {}
