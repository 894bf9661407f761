//! Serde support.
//!
//! An [`OrderedMap`] serializes to its reduced form: a sequence of
//! `(key, value)` pairs in order. Deserializing replays the pairs through
//! `insert`, so the links are rebuilt rather than trusted. A serialized map
//! (object) is rejected because its entry order is not guaranteed by every
//! format.
//!
//! A [`Slot`] serializes as the positional triple `(prev_key, value,
//! next_key)`.

use core::fmt;
use core::marker::PhantomData;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de;
use serde::de::IgnoredAny;
use serde::de::MapAccess;
use serde::de::SeqAccess;
use serde::de::Visitor;
use serde::ser::SerializeSeq;

use crate::Link;
use crate::error::Error;
use crate::ordered_map::OrderedMap;
use crate::slot::Slot;
use crate::store::SlotStore;

impl<K, V, S> Serialize for OrderedMap<K, V, S>
where
    K: Serialize + Eq + Clone,
    V: Serialize,
    S: SlotStore<K, V>,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_seq(self.iter())
    }
}

struct OrderedMapVisitor<K, V, S> {
    marker: PhantomData<fn() -> OrderedMap<K, V, S>>,
}

impl<'de, K, V, S> Visitor<'de> for OrderedMapVisitor<K, V, S>
where
    K: Deserialize<'de> + Eq + Clone,
    V: Deserialize<'de>,
    S: SlotStore<K, V> + Default,
{
    type Value = OrderedMap<K, V, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of key-value pairs")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::default();
        while let Some((key, value)) = seq.next_element::<(K, V)>()? {
            map.insert(key, value);
        }
        Ok(map)
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<Self::Value, A::Error> {
        log::debug!("rejecting map-shaped input for an ordered map");
        Err(de::Error::custom(Error::InvalidConfiguration(
            "ordered map must be built from a sequence of pairs, not a map",
        )))
    }
}

impl<'de, K, V, S> Deserialize<'de> for OrderedMap<K, V, S>
where
    K: Deserialize<'de> + Eq + Clone,
    V: Deserialize<'de>,
    S: SlotStore<K, V> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let visitor = OrderedMapVisitor {
            marker: PhantomData,
        };
        // Self-describing formats route objects to `visit_map` so they can be
        // reported clearly.
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(visitor)
        } else {
            deserializer.deserialize_seq(visitor)
        }
    }
}

impl<K: Serialize, V: Serialize> Serialize for Slot<K, V> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut seq = serializer.serialize_seq(Some(3))?;
        seq.serialize_element(&self.prev)?;
        seq.serialize_element(&self.value)?;
        seq.serialize_element(&self.next)?;
        seq.end()
    }
}

struct SlotVisitor<K, V> {
    marker: PhantomData<fn() -> Slot<K, V>>,
}

impl<'de, K, V> Visitor<'de> for SlotVisitor<K, V>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    type Value = Slot<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a slot triple [prev_key, value, next_key]")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let arity = |found: usize| -> A::Error { de::Error::custom(Error::InvalidArity { found }) };

        let prev: Link<K> = seq.next_element()?.ok_or_else(|| arity(0))?;
        let value: V = seq.next_element()?.ok_or_else(|| arity(1))?;
        let next: Link<K> = seq.next_element()?.ok_or_else(|| arity(2))?;

        let mut found = 3;
        while seq.next_element::<IgnoredAny>()?.is_some() {
            found += 1;
        }
        if found != 3 {
            return Err(arity(found));
        }

        Ok(Slot::new(prev, value, next))
    }
}

impl<'de, K, V> Deserialize<'de> for Slot<K, V>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SlotVisitor {
            marker: PhantomData,
        })
    }
}
