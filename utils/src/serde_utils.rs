//! Serde adapters for arkworks objects, to be used with `serde_with::serde_as`.

use alloc::vec::Vec;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{fmt, marker::PhantomData};
use serde::{
    de::{SeqAccess, Visitor},
    Deserializer, Serializer,
};
use serde_with::{DeserializeAs, SerializeAs};

/// (De)serializes any `CanonicalSerialize + CanonicalDeserialize` object as its compressed bytes.
pub struct ArkObjectBytes;

impl<T: CanonicalSerialize> SerializeAs<T> for ArkObjectBytes {
    fn serialize_as<S>(elem: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut bytes = Vec::with_capacity(elem.compressed_size());
        elem.serialize_compressed(&mut bytes)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_bytes(&bytes)
    }
}

impl<'de, T: CanonicalDeserialize> DeserializeAs<'de, T> for ArkObjectBytes {
    fn deserialize_as<D>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ArkObjectVisitor<T>(PhantomData<T>);

        impl<'a, T: CanonicalDeserialize> Visitor<'a> for ArkObjectVisitor<T> {
            type Value = T;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("expected bytes of a compressed arkworks object")
            }

            fn visit_bytes<E>(self, bytes: &[u8]) -> Result<T, E>
            where
                E: serde::de::Error,
            {
                T::deserialize_compressed(bytes).map_err(serde::de::Error::custom)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'a>,
            {
                let mut bytes: Vec<u8> = Vec::with_capacity(seq.size_hint().unwrap_or(48));
                while let Some(b) = seq.next_element()? {
                    bytes.push(b);
                }
                T::deserialize_compressed(bytes.as_slice()).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_bytes(ArkObjectVisitor::<T>(PhantomData))
    }
}
