//! Backing stores: the key → slot containers the ordered map runs on.
//!
//! The map never stores order anywhere but in the slots, so any container
//! with O(1) (or at least fast) keyed lookup can back it. Adapters are
//! provided for [`hashbrown::HashMap`], [`std::collections::HashMap`] (with
//! the `std` feature) and [`BTreeMap`].

use alloc::collections::BTreeMap;
use core::hash::BuildHasher;
use core::hash::Hash;

use crate::slot::SlotLike;

/// A keyed container of slots.
///
/// This is the extension seam of the crate: implement it for a
/// persistence-aware map to run the ordered map on top of it. The associated
/// [`SlotStore::Slot`] type selects the record kept per key.
///
/// `len` must be a direct size query; the map's own `len` forwards to it
/// without walking the list.
pub trait SlotStore<K, V> {
    /// The record stored per key.
    type Slot: SlotLike<K, V>;

    /// Number of slots in the store.
    fn len(&self) -> usize;

    /// Returns `true` if the store holds no slots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up the slot for `key`.
    fn get(&self, key: &K) -> Option<&Self::Slot>;

    /// Looks up the slot for `key` mutably.
    fn get_mut(&mut self, key: &K) -> Option<&mut Self::Slot>;

    /// Returns `true` if a slot exists for `key`.
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Stores `slot` under `key`, returning the slot it replaced.
    fn insert(&mut self, key: K, slot: Self::Slot) -> Option<Self::Slot>;

    /// Removes the slot for `key`, returning the stored key with it.
    fn remove_entry(&mut self, key: &K) -> Option<(K, Self::Slot)>;

    /// Removes and returns the slot for `key`.
    fn remove(&mut self, key: &K) -> Option<Self::Slot> {
        self.remove_entry(key).map(|(_, slot)| slot)
    }

    /// Removes every slot.
    fn clear(&mut self);
}

impl<K, V, E, S> SlotStore<K, V> for hashbrown::HashMap<K, E, S>
where
    K: Hash + Eq,
    E: SlotLike<K, V>,
    S: BuildHasher,
{
    type Slot = E;

    fn len(&self) -> usize {
        hashbrown::HashMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&E> {
        hashbrown::HashMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut E> {
        hashbrown::HashMap::get_mut(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        hashbrown::HashMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, slot: E) -> Option<E> {
        hashbrown::HashMap::insert(self, key, slot)
    }

    fn remove_entry(&mut self, key: &K) -> Option<(K, E)> {
        hashbrown::HashMap::remove_entry(self, key)
    }

    fn clear(&mut self) {
        hashbrown::HashMap::clear(self)
    }
}

#[cfg(feature = "std")]
impl<K, V, E, S> SlotStore<K, V> for std::collections::HashMap<K, E, S>
where
    K: Hash + Eq,
    E: SlotLike<K, V>,
    S: BuildHasher,
{
    type Slot = E;

    fn len(&self) -> usize {
        std::collections::HashMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&E> {
        std::collections::HashMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut E> {
        std::collections::HashMap::get_mut(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        std::collections::HashMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, slot: E) -> Option<E> {
        std::collections::HashMap::insert(self, key, slot)
    }

    fn remove_entry(&mut self, key: &K) -> Option<(K, E)> {
        std::collections::HashMap::remove_entry(self, key)
    }

    fn clear(&mut self) {
        std::collections::HashMap::clear(self)
    }
}

/// Keys only need `Ord`; lookups are O(log n) instead of O(1).
impl<K, V, E> SlotStore<K, V> for BTreeMap<K, E>
where
    K: Ord,
    E: SlotLike<K, V>,
{
    type Slot = E;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&E> {
        BTreeMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut E> {
        BTreeMap::get_mut(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, slot: E) -> Option<E> {
        BTreeMap::insert(self, key, slot)
    }

    fn remove_entry(&mut self, key: &K) -> Option<(K, E)> {
        BTreeMap::remove_entry(self, key)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self)
    }
}
