//! Arrays are (de)serialized as tuples of exactly `N` items.

use crate::{utils::partial::Partial, Array};
use core::{fmt, marker::PhantomData};
use serde::{
    de::{self, SeqAccess, Visitor},
    ser::SerializeTuple,
};

impl<T: serde::Serialize, const N: usize> serde::Serialize for Array<T, N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut tuple = serializer.serialize_tuple(N)?;
        for item in self {
            tuple.serialize_element(item)?;
        }
        tuple.end()
    }
}

struct ArrayVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: serde::Deserialize<'de>, const N: usize> Visitor<'de> for ArrayVisitor<T, N> {
    type Value = Array<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {} items", N)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        // Items already deserialized are dropped by `Partial` on error.
        let mut partial = Partial::<T, N>::new();
        while !partial.is_full() {
            match seq.next_element()? {
                Some(item) => {
                    let _ = partial.push(item);
                }
                None => return Err(de::Error::invalid_length(partial.len(), &self)),
            }
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        partial
            .finish()
            .map_err(|partial| de::Error::invalid_length(partial.len(), &self))
    }
}

impl<'de, T: serde::Deserialize<'de>, const N: usize> serde::Deserialize<'de> for Array<T, N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_tuple(N, ArrayVisitor(PhantomData))
    }
}
