//! Ordered map implementation.
//!
//! This module provides the core [`OrderedMap`] engine. Entries live in a
//! keyed backing store ([`SlotStore`]) and are threaded into a doubly linked
//! list through the keys held in each [`Slot`](crate::Slot). Lookups,
//! insertion, removal and every relinking operation (move, swap, rename,
//! insert next to a key) are O(1) store accesses.
//!
//! # Examples
//!
//! ```
//! use odict::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert("first", 1);
//! map.insert("second", 2);
//! map.move_to_head(&"second").unwrap();
//!
//! let keys: Vec<_> = map.keys().collect();
//! assert_eq!(keys, [&"second", &"first"]);
//! ```

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ops::Index;
use core::ops::IndexMut;

mod iter;

pub use iter::IntoIter;
pub use iter::Iter;
pub use iter::Keys;
pub use iter::Values;

use crate::DefaultStore;
use crate::Link;
use crate::RandomState;
use crate::error::Error;
use crate::error::Result;
use crate::slot::SlotLike;
use crate::store::SlotStore;

#[cold]
#[inline(never)]
fn dangling_link() -> ! {
    panic!("ordered map link points at a missing slot");
}

/// Where a relative insert or move places an entry with respect to the
/// reference key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Immediately before the reference key.
    Before,
    /// Immediately after the reference key.
    After,
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// The ascending result, reversed.
    Descending,
}

/// A map that keeps its entries in a total order, by default the order in
/// which keys were first inserted.
///
/// The generic parameters are:
/// - `K`: Key type, must implement `Eq + Clone` (plus whatever the store
///   needs, `Hash` for hash stores and `Ord` for `BTreeMap`)
/// - `V`: Value type
/// - `S`: The backing store, defaults to a `hashbrown` hash map of
///   [`Slot`](crate::Slot)s
///
/// Overwriting the value of an existing key never moves it. Only the explicit
/// reordering operations do.
///
/// # Examples
///
/// ```
/// use odict::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.insert("apple", 5);
/// map.insert("banana", 3);
/// map.insert("cherry", 8);
///
/// for (key, value) in map.iter() {
///     println!("{}: {}", key, value);
/// }
/// // Prints: apple: 5, banana: 3, cherry: 8
/// ```
pub struct OrderedMap<K, V, S = DefaultStore<K, V>> {
    head: Link<K>,
    tail: Link<K>,
    store: S,
    _values: PhantomData<V>,
}

impl<K: Clone, V, S: Clone> Clone for OrderedMap<K, V, S> {
    /// Clones the store slot by slot. The links are keys, so the copy is
    /// structurally independent and keeps the same order.
    ///
    /// Values are cloned with their own `Clone`: store `Rc`/`Arc` handles to
    /// share them between copies, or owned values for a deep copy.
    fn clone(&self) -> Self {
        OrderedMap {
            head: self.head.clone(),
            tail: self.tail.clone(),
            store: self.store.clone(),
            _values: PhantomData,
        }
    }
}

impl<K, V, S: Default> Default for OrderedMap<K, V, S> {
    fn default() -> Self {
        OrderedMap {
            head: Link::Nil,
            tail: Link::Nil,
            store: S::default(),
            _values: PhantomData,
        }
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Creates a new, empty ordered map.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let mut map: OrderedMap<&str, i32> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// map.insert("key", 42);
    /// assert!(!map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new ordered map able to hold at least `capacity` entries
    /// without reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let map: OrderedMap<&str, i32> = OrderedMap::with_capacity(10);
    /// assert_eq!(map.len(), 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedMap {
            head: Link::Nil,
            tail: Link::Nil,
            store: DefaultStore::with_capacity_and_hasher(capacity, RandomState::default()),
            _values: PhantomData,
        }
    }
}

impl<K, V, S> OrderedMap<K, V, S> {
    /// Returns a reference to the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the map and returns its backing store.
    ///
    /// The slots in the returned store still carry their links, so the order
    /// can be read back from it by walking from the slot whose predecessor is
    /// [`Link::Nil`].
    pub fn into_store(self) -> S {
        self.store
    }

    /// The key of the first entry, or [`Link::Nil`] when empty.
    pub fn head(&self) -> &Link<K> {
        &self.head
    }

    /// The key of the last entry, or [`Link::Nil`] when empty.
    pub fn tail(&self) -> &Link<K> {
        &self.tail
    }
}

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Eq + Clone,
    S: SlotStore<K, V>,
{
    /// Creates an empty ordered map on top of the given backing store.
    ///
    /// This is how the store (and through it the slot type and hasher) is
    /// selected.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if the store already holds slots, since
    /// their order is unknown to the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    ///
    /// use odict::Slot;
    /// use odict::ordered_map::OrderedMap;
    ///
    /// let store: BTreeMap<u32, Slot<u32, &str>> = BTreeMap::new();
    /// let mut map = OrderedMap::with_store(store).unwrap();
    /// map.insert(2, "two");
    /// map.insert(1, "one");
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&2, &1]);
    /// ```
    pub fn with_store(store: S) -> Result<Self> {
        if !store.is_empty() {
            return Err(Error::InvalidConfiguration(
                "backing store must be empty when handed to an ordered map",
            ));
        }

        Ok(OrderedMap {
            head: Link::Nil,
            tail: Link::Nil,
            store,
            _values: PhantomData,
        })
    }

    /// Builds a map by inserting the pairs in iteration order.
    ///
    /// This is the rebuild half of the serialization contract: feeding back
    /// the output of [`OrderedMap::to_pairs`] yields an equal map.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let map = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
    /// let rebuilt = OrderedMap::from_pairs(map.to_pairs());
    /// assert_eq!(map, rebuilt);
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        S: Default,
    {
        let mut map = Self::default();
        map.extend(pairs);
        map
    }

    /// Builds a map holding every key from `keys` with a clone of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let map: OrderedMap<_, _> = OrderedMap::from_keys([1, 2, 3], 'x');
    /// assert_eq!(map.to_pairs(), [(1, 'x'), (2, 'x'), (3, 'x')]);
    /// ```
    pub fn from_keys<I>(keys: I, value: V) -> Self
    where
        I: IntoIterator<Item = K>,
        V: Clone,
        S: Default,
    {
        let mut map = Self::default();
        for key in keys {
            map.insert(key, value.clone());
        }
        map
    }

    /// Returns the number of entries in the map.
    ///
    /// This is a single size query on the backing store.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.head.is_nil()
    }

    /// Returns `true` if the map contains `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let map = OrderedMap::from_pairs([("a", 1)]);
    /// assert!(map.contains_key(&"a"));
    /// assert!(!map.contains_key(&"foo"));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool {
        self.store.contains_key(key)
    }

    /// Returns a reference to the value for `key`, or `None` if absent.
    ///
    /// Combine with [`Option::unwrap_or`] for a lookup with a default.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let map = OrderedMap::from_pairs([("a", 1)]);
    /// assert_eq!(map.get(&"a"), Some(&1));
    /// assert_eq!(*map.get(&"baz").unwrap_or(&42), 42);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.store.get(key).map(|slot| slot.value_ref())
    }

    /// Returns a reference to the value for `key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if the key is absent.
    pub fn try_get(&self, key: &K) -> Result<&V> {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value for `key`. The entry keeps
    /// its position.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.store.get_mut(key).map(|slot| slot.value_mut_ref())
    }

    /// Returns the slot stored for `key`, links included.
    pub fn slot(&self, key: &K) -> Option<&S::Slot> {
        self.store.get(key)
    }

    /// Inserts a key-value pair.
    ///
    /// - If the key is new, the entry is appended at the tail and `None` is
    ///   returned.
    /// - If the key exists, only its value is replaced; the entry keeps its
    ///   position and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert("a", 1), None);
    /// map.insert("b", 2);
    /// assert_eq!(map.insert("a", 10), Some(1));
    ///
    /// let entries: Vec<_> = map.iter().collect();
    /// assert_eq!(entries, [(&"a", &10), (&"b", &2)]);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.store.get_mut(&key) {
            return Some(mem::replace(slot.value_mut_ref(), value));
        }

        let prev = self.tail.clone();
        self.link_new(key, value, prev, Link::Nil);
        None
    }

    /// Returns the value for `key`, inserting `default` at the tail first if
    /// the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let mut map = OrderedMap::from_pairs([(1, "x")]);
    /// assert_eq!(*map.get_or_insert(1, "y"), "x");
    /// assert_eq!(*map.get_or_insert(4, "z"), "z");
    /// assert_eq!(map.to_pairs(), [(1, "x"), (4, "z")]);
    /// ```
    pub fn get_or_insert(&mut self, key: K, default: V) -> &mut V {
        self.get_or_insert_with(key, || default)
    }

    /// Like [`OrderedMap::get_or_insert`], computing the default lazily.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        if !self.store.contains_key(&key) {
            let prev = self.tail.clone();
            self.link_new(key.clone(), default(), prev, Link::Nil);
        }

        match self.store.get_mut(&key) {
            Some(slot) => slot.value_mut_ref(),
            None => dangling_link(),
        }
    }

    /// Removes `key` from the map and returns its value.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::Error;
    /// use odict::OrderedMap;
    ///
    /// let mut map = OrderedMap::from_pairs([(1, 'a'), (2, 'b')]);
    /// assert_eq!(map.remove(&2), Ok('b'));
    /// assert_eq!(map.remove(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key` from the map, returning the stored key and value.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if the key is absent.
    pub fn remove_entry(&mut self, key: &K) -> Result<(K, V)> {
        let (key, slot) = self.store.remove_entry(key).ok_or(Error::KeyNotFound)?;
        let (prev, value, next) = slot.into_triple();
        self.set_next_of(&prev, next.clone());
        self.set_prev_of(&next, prev);
        Ok((key, value))
    }

    /// Removes `key` and returns its value, or returns `default` if the key
    /// is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let mut map = OrderedMap::from_pairs([(1, "a")]);
    /// assert_eq!(map.remove_or(&3, "foo"), "foo");
    /// assert_eq!(map.remove_or(&1, "foo"), "a");
    /// ```
    pub fn remove_or(&mut self, key: &K, default: V) -> V {
        self.remove(key).unwrap_or(default)
    }

    /// Removes and returns the last entry.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStructure`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let mut map = OrderedMap::from_pairs([(1, 'a'), (2, 'b')]);
    /// assert_eq!(map.pop_tail(), Ok((2, 'b')));
    /// assert_eq!(map.to_pairs(), [(1, 'a')]);
    /// ```
    pub fn pop_tail(&mut self) -> Result<(K, V)> {
        match self.tail.clone() {
            Link::Key(key) => self.remove_entry(&key),
            Link::Nil => Err(Error::EmptyStructure {
                operation: "pop_tail",
            }),
        }
    }

    /// Removes and returns the first entry.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStructure`] if the map is empty.
    pub fn pop_head(&mut self) -> Result<(K, V)> {
        match self.head.clone() {
            Link::Key(key) => self.remove_entry(&key),
            Link::Nil => Err(Error::EmptyStructure {
                operation: "pop_head",
            }),
        }
    }

    /// Removes every entry and resets head and tail to [`Link::Nil`].
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let mut map = OrderedMap::from_pairs([(1, "a")]);
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert!(map.head().is_nil());
    /// ```
    pub fn clear(&mut self) {
        log::trace!("clearing ordered map of {} entries", self.store.len());
        self.store.clear();
        self.head = Link::Nil;
        self.tail = Link::Nil;
    }

    /// Keeps only the entries for which `f` returns `true`, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let mut map: OrderedMap<_, _> = (0..6).map(|i| (i, i * 10)).collect();
    /// map.retain(|k, _| k % 2 == 0);
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&0, &2, &4]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut cursor = self.head.clone();
        while let Link::Key(key) = cursor {
            let slot = self.slot_mut(&key);
            cursor = slot.next_link().clone();
            if !f(&key, slot.value_mut_ref()) {
                let _ = self.remove_entry(&key);
            }
        }
    }

    /// The first key in the map.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStructure`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::Error;
    /// use odict::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert!(matches!(map.first_key(), Err(Error::EmptyStructure { .. })));
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    /// assert_eq!(map.first_key(), Ok(&"a"));
    /// assert_eq!(map.last_key(), Ok(&"b"));
    /// ```
    pub fn first_key(&self) -> Result<&K> {
        self.head.as_key().ok_or(Error::EmptyStructure {
            operation: "first_key",
        })
    }

    /// The last key in the map.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStructure`] if the map is empty.
    pub fn last_key(&self) -> Result<&K> {
        self.tail.as_key().ok_or(Error::EmptyStructure {
            operation: "last_key",
        })
    }

    /// The first entry in the map.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStructure`] if the map is empty.
    pub fn first(&self) -> Result<(&K, &V)> {
        let key = self.head.as_key().ok_or(Error::EmptyStructure { operation: "first" })?;
        Ok((key, self.slot_ref(key).value_ref()))
    }

    /// The last entry in the map.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStructure`] if the map is empty.
    pub fn last(&self) -> Result<(&K, &V)> {
        let key = self.tail.as_key().ok_or(Error::EmptyStructure { operation: "last" })?;
        Ok((key, self.slot_ref(key).value_ref()))
    }

    /// The key following `key`, or `None` if `key` is the last entry.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if `key` is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let map = OrderedMap::from_pairs([("x", 1), ("y", 2)]);
    /// assert_eq!(map.next_key(&"x"), Ok(Some(&"y")));
    /// assert_eq!(map.next_key(&"y"), Ok(None));
    /// assert_eq!(map.prev_key(&"y"), Ok(Some(&"x")));
    /// assert!(map.next_key(&"z").is_err());
    /// ```
    pub fn next_key(&self, key: &K) -> Result<Option<&K>> {
        let slot = self.store.get(key).ok_or(Error::KeyNotFound)?;
        Ok(slot.next_link().as_key())
    }

    /// The key preceding `key`, or `None` if `key` is the first entry.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if `key` is absent.
    pub fn prev_key(&self, key: &K) -> Result<Option<&K>> {
        let slot = self.store.get(key).ok_or(Error::KeyNotFound)?;
        Ok(slot.prev_link().as_key())
    }

    /// Replaces `old` with `new`, keeping the entry's position and value.
    ///
    /// # Errors
    ///
    /// - [`Error::KeyCollision`] if `old == new`
    /// - [`Error::KeyNotFound`] if `old` is absent
    /// - [`Error::KeyExists`] if `new` is already in the map
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let mut map = OrderedMap::from_pairs([("1", 'a'), ("2", 'b'), ("3", 'c')]);
    /// map.rename(&"2", "bar").unwrap();
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&"1", &"bar", &"3"]);
    /// assert_eq!(map[&"bar"], 'b');
    /// ```
    pub fn rename(&mut self, old: &K, new: K) -> Result<()> {
        if *old == new {
            return Err(Error::KeyCollision);
        }
        if !self.store.contains_key(old) {
            return Err(Error::KeyNotFound);
        }
        if self.store.contains_key(&new) {
            log::debug!("rename rejected: destination key already present");
            return Err(Error::KeyExists);
        }

        let Some((_, slot)) = self.store.remove_entry(old) else {
            dangling_link()
        };
        let prev = slot.prev_link().clone();
        let next = slot.next_link().clone();
        self.store.insert(new.clone(), slot);
        self.set_next_of(&prev, Link::Key(new.clone()));
        self.set_prev_of(&next, Link::Key(new));
        Ok(())
    }

    /// Exchanges the positions of `a` and `b`. Values stay with their keys.
    ///
    /// # Errors
    ///
    /// - [`Error::KeyCollision`] if `a == b`
    /// - [`Error::KeyNotFound`] if either key is absent
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let mut map = OrderedMap::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
    /// map.swap(&"a", &"b").unwrap();
    /// assert_eq!(map.to_pairs(), [("b", 2), ("a", 1), ("c", 3)]);
    /// ```
    pub fn swap(&mut self, a: &K, b: &K) -> Result<()> {
        if a == b {
            return Err(Error::KeyCollision);
        }
        let (a_prev, a_next) = self.links_of(a)?;
        let (b_prev, b_next) = self.links_of(b)?;

        if a_next.is_key(b) {
            // a, b -> b, a
            self.set_links(b, a_prev.clone(), Link::Key(a.clone()));
            self.set_links(a, Link::Key(b.clone()), b_next.clone());
            self.set_next_of(&a_prev, Link::Key(b.clone()));
            self.set_prev_of(&b_next, Link::Key(a.clone()));
        } else if b_next.is_key(a) {
            // b, a -> a, b
            self.set_links(a, b_prev.clone(), Link::Key(b.clone()));
            self.set_links(b, Link::Key(a.clone()), a_next.clone());
            self.set_next_of(&b_prev, Link::Key(a.clone()));
            self.set_prev_of(&a_next, Link::Key(b.clone()));
        } else {
            self.set_links(a, b_prev.clone(), b_next.clone());
            self.set_links(b, a_prev.clone(), a_next.clone());
            self.set_next_of(&a_prev, Link::Key(b.clone()));
            self.set_prev_of(&a_next, Link::Key(b.clone()));
            self.set_next_of(&b_prev, Link::Key(a.clone()));
            self.set_prev_of(&b_next, Link::Key(a.clone()));
        }

        Ok(())
    }

    /// Inserts a new entry immediately before or after `reference`.
    ///
    /// Existence of `reference` is a single store lookup.
    ///
    /// # Errors
    ///
    /// - [`Error::KeyCollision`] if `reference == key`
    /// - [`Error::KeyNotFound`] if `reference` is absent
    /// - [`Error::KeyExists`] if `key` is already in the map
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    /// use odict::Position;
    ///
    /// let mut map = OrderedMap::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
    /// map.insert_relative(&"b", "new", 99, Position::Before).unwrap();
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&"a", &"new", &"b", &"c"]);
    /// assert_eq!(map.get(&"new"), Some(&99));
    /// ```
    pub fn insert_relative(&mut self, reference: &K, key: K, value: V, position: Position) -> Result<()> {
        if *reference == key {
            return Err(Error::KeyCollision);
        }
        let (ref_prev, ref_next) = self.links_of(reference)?;
        if self.store.contains_key(&key) {
            log::debug!("relative insert rejected: key already present");
            return Err(Error::KeyExists);
        }

        let (prev, next) = match position {
            Position::Before => (ref_prev, Link::Key(reference.clone())),
            Position::After => (Link::Key(reference.clone()), ref_next),
        };
        self.link_new(key, value, prev, next);
        Ok(())
    }

    /// Inserts a new entry immediately before `reference`.
    ///
    /// See [`OrderedMap::insert_relative`] for the error cases.
    pub fn insert_before(&mut self, reference: &K, key: K, value: V) -> Result<()> {
        self.insert_relative(reference, key, value, Position::Before)
    }

    /// Inserts a new entry immediately after `reference`.
    ///
    /// See [`OrderedMap::insert_relative`] for the error cases.
    pub fn insert_after(&mut self, reference: &K, key: K, value: V) -> Result<()> {
        self.insert_relative(reference, key, value, Position::After)
    }

    /// Inserts a new entry as the first entry. On an empty map this is a
    /// plain [`OrderedMap::insert`].
    ///
    /// # Errors
    ///
    /// As [`OrderedMap::insert_relative`] against the current head.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert_head("0", 'a').unwrap();
    /// map.insert_head("1", 'b').unwrap();
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&"1", &"0"]);
    /// ```
    pub fn insert_head(&mut self, key: K, value: V) -> Result<()> {
        match self.head.clone() {
            Link::Nil => {
                self.insert(key, value);
                Ok(())
            }
            Link::Key(head) => self.insert_relative(&head, key, value, Position::Before),
        }
    }

    /// Inserts a new entry as the last entry. On an empty map this is a
    /// plain [`OrderedMap::insert`].
    ///
    /// # Errors
    ///
    /// As [`OrderedMap::insert_relative`] against the current tail.
    pub fn insert_tail(&mut self, key: K, value: V) -> Result<()> {
        match self.tail.clone() {
            Link::Nil => {
                self.insert(key, value);
                Ok(())
            }
            Link::Key(tail) => self.insert_relative(&tail, key, value, Position::After),
        }
    }

    /// Moves `key` immediately before or after `reference`, leaving its value
    /// untouched. Does nothing if `key` is already there.
    ///
    /// # Errors
    ///
    /// - [`Error::KeyCollision`] if `reference == key`
    /// - [`Error::KeyNotFound`] if either key is absent
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    /// use odict::Position;
    ///
    /// let mut map = OrderedMap::from_pairs([("0", 'a'), ("1", 'b'), ("2", 'c'), ("3", 'd')]);
    /// map.move_relative(&"1", &"3", Position::After).unwrap();
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&"0", &"1", &"3", &"2"]);
    /// ```
    pub fn move_relative(&mut self, reference: &K, key: &K, position: Position) -> Result<()> {
        if reference == key {
            return Err(Error::KeyCollision);
        }
        self.links_of(reference)?;
        let (key_prev, key_next) = self.links_of(key)?;

        let in_place = match position {
            Position::Before => key_next.is_key(reference),
            Position::After => key_prev.is_key(reference),
        };
        if in_place {
            return Ok(());
        }

        self.unlink(key);
        let (ref_prev, ref_next) = self.links_of(reference)?;
        let (prev, next) = match position {
            Position::Before => (ref_prev, Link::Key(reference.clone())),
            Position::After => (Link::Key(reference.clone()), ref_next),
        };
        self.link_existing(key, prev, next);
        Ok(())
    }

    /// Moves `key` immediately before `reference`.
    ///
    /// See [`OrderedMap::move_relative`] for the error cases.
    pub fn move_before(&mut self, reference: &K, key: &K) -> Result<()> {
        self.move_relative(reference, key, Position::Before)
    }

    /// Moves `key` immediately after `reference`.
    ///
    /// See [`OrderedMap::move_relative`] for the error cases.
    pub fn move_after(&mut self, reference: &K, key: &K) -> Result<()> {
        self.move_relative(reference, key, Position::After)
    }

    /// Moves `key` to the front. Does nothing if it is already there.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if `key` is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let mut map = OrderedMap::from_pairs([("0", 'a'), ("1", 'b'), ("2", 'c')]);
    /// map.move_to_head(&"2").unwrap();
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&"2", &"0", &"1"]);
    /// map.move_to_tail(&"2").unwrap();
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&"0", &"1", &"2"]);
    /// ```
    pub fn move_to_head(&mut self, key: &K) -> Result<()> {
        if !self.store.contains_key(key) {
            return Err(Error::KeyNotFound);
        }
        match self.head.clone() {
            Link::Key(head) if head != *key => self.move_relative(&head, key, Position::Before),
            _ => Ok(()),
        }
    }

    /// Moves `key` to the back. Does nothing if it is already there.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if `key` is absent.
    pub fn move_to_tail(&mut self, key: &K) -> Result<()> {
        if !self.store.contains_key(key) {
            return Err(Error::KeyNotFound);
        }
        match self.tail.clone() {
            Link::Key(tail) if tail != *key => self.move_relative(&tail, key, Position::After),
            _ => Ok(()),
        }
    }

    /// Reverses the order of all entries by flipping every slot's links.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let mut map = OrderedMap::from_pairs([(1, ()), (2, ()), (3, ())]);
    /// map.reverse();
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&3, &2, &1]);
    /// ```
    pub fn reverse(&mut self) {
        log::trace!("reversing ordered map of {} entries", self.store.len());
        let mut cursor = self.head.clone();
        while let Link::Key(key) = cursor {
            let slot = self.slot_mut(&key);
            let prev = mem::take(slot.prev_link_mut());
            let next = mem::replace(slot.next_link_mut(), prev);
            *slot.prev_link_mut() = next.clone();
            cursor = next;
        }
        mem::swap(&mut self.head, &mut self.tail);
    }

    /// Sorts the entries by value.
    ///
    /// Like every sort method, this drains the map, sorts the pairs and
    /// rebuilds the whole structure: O(n log n), unlike the O(1) relinking
    /// operations. The sort is stable.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let mut map = OrderedMap::from_pairs([("a", 1), ("c", 3), ("b", 2)]);
    /// map.sort();
    /// assert_eq!(map.to_pairs(), [("a", 1), ("b", 2), ("c", 3)]);
    /// ```
    pub fn sort(&mut self)
    where
        V: Ord,
    {
        self.sort_with(|(_, a), (_, b)| a.cmp(b), SortOrder::Ascending);
    }

    /// Sorts the entries with a comparator over `(key, value)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let mut map = OrderedMap::from_pairs([("a", 1), ("c", 3), ("b", 2)]);
    /// map.sort_by(|(ka, _), (kb, _)| kb.cmp(ka));
    /// assert_eq!(map.to_pairs(), [("c", 3), ("b", 2), ("a", 1)]);
    /// ```
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut((&K, &V), (&K, &V)) -> Ordering,
    {
        self.sort_with(compare, SortOrder::Ascending);
    }

    /// Sorts the entries by a key extracted from each `(key, value)` pair.
    pub fn sort_by_key<T, F>(&mut self, mut f: F)
    where
        T: Ord,
        F: FnMut(&K, &V) -> T,
    {
        self.sort_with(|(ka, va), (kb, vb)| f(ka, va).cmp(&f(kb, vb)), SortOrder::Ascending);
    }

    /// Sorts the entries with `compare`, then reverses the result when
    /// `order` is [`SortOrder::Descending`].
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    /// use odict::SortOrder;
    ///
    /// let mut map = OrderedMap::from_pairs([("a", 1), ("c", 3), ("b", 2)]);
    /// map.sort_with(|(ka, _), (kb, _)| ka.cmp(kb), SortOrder::Descending);
    /// assert_eq!(map.to_pairs(), [("c", 3), ("b", 2), ("a", 1)]);
    /// ```
    pub fn sort_with<F>(&mut self, mut compare: F, order: SortOrder)
    where
        F: FnMut((&K, &V), (&K, &V)) -> Ordering,
    {
        let mut pairs = Vec::with_capacity(self.len());
        while let Ok(pair) = self.pop_head() {
            pairs.push(pair);
        }

        pairs.sort_by(|(ka, va), (kb, vb)| compare((ka, va), (kb, vb)));
        if order == SortOrder::Descending {
            pairs.reverse();
        }

        log::trace!("rebuilding ordered map of {} entries after sort", pairs.len());
        self.clear();
        self.extend(pairs);
    }

    /// Returns an iterator over the entries, from head to tail.
    ///
    /// Each call starts a fresh traversal. Use `.rev()` to walk from the tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let map = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
    /// assert_eq!(map.iter().collect::<Vec<_>>(), [(&"a", &1), (&"b", &2)]);
    /// assert_eq!(map.iter().rev().collect::<Vec<_>>(), [(&"b", &2), (&"a", &1)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, S> {
        Iter {
            store: &self.store,
            front: self.head.as_key(),
            back: self.tail.as_key(),
            remaining: self.store.len(),
            _values: PhantomData,
        }
    }

    /// Returns an iterator over the keys, in order.
    pub fn keys(&self) -> Keys<'_, K, V, S> {
        Keys { iter: self.iter() }
    }

    /// Returns an iterator over the values, in key order.
    pub fn values(&self) -> Values<'_, K, V, S> {
        Values { iter: self.iter() }
    }

    /// Returns the entries as an ordered list of pairs: the reduced form the
    /// map can be rebuilt from with [`OrderedMap::from_pairs`].
    pub fn to_pairs(&self) -> Vec<(K, V)>
    where
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Consumes the map into an ordered list of pairs.
    pub fn into_pairs(self) -> Vec<(K, V)> {
        self.into_iter().collect()
    }

    /// Collects the entries into an order-agnostic map type.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use odict::OrderedMap;
    ///
    /// let map = OrderedMap::from_pairs([(1, 1)]);
    /// let plain: HashMap<_, _> = map.to_plain_map();
    /// assert_eq!(plain, HashMap::from([(1, 1)]));
    /// ```
    pub fn to_plain_map<M>(&self) -> M
    where
        V: Clone,
        M: FromIterator<(K, V)>,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Consumes the map into an order-agnostic map type.
    pub fn into_plain_map<M>(self) -> M
    where
        M: FromIterator<(K, V)>,
    {
        self.into_iter().collect()
    }

    /// Returns a view that formats the raw linked structure: head, tail and
    /// every slot with its links.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::OrderedMap;
    ///
    /// let map = OrderedMap::from_pairs([("a", 1)]);
    /// let raw = format!("{:?}", map.debug_links());
    /// assert!(raw.contains("head: \"a\""));
    /// assert!(raw.contains("prev: nil"));
    /// ```
    pub fn debug_links(&self) -> DebugLinks<'_, K, V, S> {
        DebugLinks { map: self }
    }

    fn slot_ref(&self, key: &K) -> &S::Slot {
        match self.store.get(key) {
            Some(slot) => slot,
            None => dangling_link(),
        }
    }

    fn slot_mut(&mut self, key: &K) -> &mut S::Slot {
        match self.store.get_mut(key) {
            Some(slot) => slot,
            None => dangling_link(),
        }
    }

    fn links_of(&self, key: &K) -> Result<(Link<K>, Link<K>)> {
        let slot = self.store.get(key).ok_or(Error::KeyNotFound)?;
        Ok((slot.prev_link().clone(), slot.next_link().clone()))
    }

    fn set_links(&mut self, key: &K, prev: Link<K>, next: Link<K>) {
        let slot = self.slot_mut(key);
        *slot.prev_link_mut() = prev;
        *slot.next_link_mut() = next;
    }

    /// Points the successor link of `at` (the head when `at` is nil) at
    /// `next`.
    fn set_next_of(&mut self, at: &Link<K>, next: Link<K>) {
        match at {
            Link::Nil => self.head = next,
            Link::Key(key) => *self.slot_mut(key).next_link_mut() = next,
        }
    }

    /// Points the predecessor link of `at` (the tail when `at` is nil) at
    /// `prev`.
    fn set_prev_of(&mut self, at: &Link<K>, prev: Link<K>) {
        match at {
            Link::Nil => self.tail = prev,
            Link::Key(key) => *self.slot_mut(key).prev_link_mut() = prev,
        }
    }

    fn link_new(&mut self, key: K, value: V, prev: Link<K>, next: Link<K>) {
        self.set_next_of(&prev, Link::Key(key.clone()));
        self.set_prev_of(&next, Link::Key(key.clone()));
        self.store.insert(key, S::Slot::from_parts(prev, value, next));
    }

    /// Splices an already stored, unlinked slot between `prev` and `next`.
    fn link_existing(&mut self, key: &K, prev: Link<K>, next: Link<K>) {
        self.set_next_of(&prev, Link::Key(key.clone()));
        self.set_prev_of(&next, Link::Key(key.clone()));
        self.set_links(key, prev, next);
    }

    /// Detaches `key` from its neighbours. The slot stays in the store with
    /// nil links.
    fn unlink(&mut self, key: &K) {
        let slot = self.slot_mut(key);
        let prev = mem::take(slot.prev_link_mut());
        let next = mem::take(slot.next_link_mut());
        self.set_next_of(&prev, next.clone());
        self.set_prev_of(&next, prev);
    }
}

/// Formats the raw linked structure of an [`OrderedMap`].
///
/// Created by [`OrderedMap::debug_links`].
pub struct DebugLinks<'a, K, V, S> {
    map: &'a OrderedMap<K, V, S>,
}

impl<K, V, S> fmt::Debug for DebugLinks<'_, K, V, S>
where
    K: Eq + Clone + fmt::Debug,
    V: fmt::Debug,
    S: SlotStore<K, V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct RawSlot<'a, K, V> {
            key: &'a K,
            prev: &'a Link<K>,
            value: &'a V,
            next: &'a Link<K>,
        }

        impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RawSlot<'_, K, V> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "{:?}: [prev: {}, value: {:?}, next: {}]",
                    self.key, self.prev, self.value, self.next
                )
            }
        }

        let slots = self.map.keys().map(|key| {
            let slot = self.map.slot_ref(key);
            RawSlot {
                key,
                prev: slot.prev_link(),
                value: slot.value_ref(),
                next: slot.next_link(),
            }
        });

        write!(f, "OrderedMap {{ head: {}, tail: {}, slots: ", self.map.head, self.map.tail)?;
        f.debug_list().entries(slots).finish()?;
        f.write_str(" }")
    }
}

impl<K, V, S> fmt::Debug for OrderedMap<K, V, S>
where
    K: Eq + Clone + fmt::Debug,
    V: fmt::Debug,
    S: SlotStore<K, V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S, S2> PartialEq<OrderedMap<K, V, S2>> for OrderedMap<K, V, S>
where
    K: Eq + Clone,
    V: PartialEq,
    S: SlotStore<K, V>,
    S2: SlotStore<K, V>,
{
    /// Order-sensitive: equal lengths and the same `(key, value)` sequence.
    fn eq(&self, other: &OrderedMap<K, V, S2>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, S> Eq for OrderedMap<K, V, S>
where
    K: Eq + Clone,
    V: Eq,
    S: SlotStore<K, V>,
{
}

impl<K, V, S> FromIterator<(K, V)> for OrderedMap<K, V, S>
where
    K: Eq + Clone,
    S: SlotStore<K, V> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S, const N: usize> From<[(K, V); N]> for OrderedMap<K, V, S>
where
    K: Eq + Clone,
    S: SlotStore<K, V> + Default,
{
    fn from(pairs: [(K, V); N]) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<K, V, S> Extend<(K, V)> for OrderedMap<K, V, S>
where
    K: Eq + Clone,
    S: SlotStore<K, V>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, S> Extend<(&'a K, &'a V)> for OrderedMap<K, V, S>
where
    K: Eq + Clone,
    V: Clone,
    S: SlotStore<K, V>,
{
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.clone(), value.clone());
        }
    }
}

impl<K, V, S> IntoIterator for OrderedMap<K, V, S>
where
    K: Eq + Clone,
    S: SlotStore<K, V>,
{
    type IntoIter = IntoIter<K, V, S>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { map: self }
    }
}

impl<'a, K, V, S> IntoIterator for &'a OrderedMap<K, V, S>
where
    K: Eq + Clone,
    S: SlotStore<K, V>,
{
    type IntoIter = Iter<'a, K, V, S>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> Index<&K> for OrderedMap<K, V, S>
where
    K: Eq + Clone,
    S: SlotStore<K, V>,
{
    type Output = V;

    fn index(&self, key: &K) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not found in ordered map"),
        }
    }
}

impl<K, V, S> IndexMut<&K> for OrderedMap<K, V, S>
where
    K: Eq + Clone,
    S: SlotStore<K, V>,
{
    fn index_mut(&mut self, key: &K) -> &mut V {
        match self.get_mut(key) {
            Some(value) => value,
            None => panic!("key not found in ordered map"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::string::ToString;
    use alloc::vec;
    use core::cell::Cell;

    use super::*;
    use crate::OrderedMap;
    use crate::slot::Slot;

    type Store = DefaultStore<&'static str, char>;
    type Map<K, V, S> = super::OrderedMap<K, V, S>;

    fn five() -> OrderedMap<&'static str, char> {
        OrderedMap::from_pairs([("0", 'a'), ("1", 'b'), ("2", 'c'), ("3", 'd'), ("4", 'e')])
    }

    fn keys<K: Eq + Clone, V, S: SlotStore<K, V>>(map: &Map<K, V, S>) -> Vec<K> {
        map.keys().cloned().collect()
    }

    fn rev_keys<K: Eq + Clone, V, S: SlotStore<K, V>>(map: &Map<K, V, S>) -> Vec<K> {
        map.keys().rev().cloned().collect()
    }

    fn values<K: Eq + Clone, V: Clone, S: SlotStore<K, V>>(map: &Map<K, V, S>) -> Vec<V> {
        map.values().cloned().collect()
    }

    /// Walks the list both ways and checks every link against its neighbour.
    fn assert_linked<K, V, S>(map: &Map<K, V, S>)
    where
        K: Eq + Clone + core::fmt::Debug,
        S: SlotStore<K, V>,
    {
        let len = map.store.len();
        assert_eq!(len == 0, map.head.is_nil(), "head must be nil iff empty");
        assert_eq!(len == 0, map.tail.is_nil(), "tail must be nil iff empty");

        let mut seen = 0;
        let mut prev = Link::Nil;
        let mut cursor = map.head.clone();
        while let Link::Key(key) = cursor {
            let slot = map.store.get(&key).expect("linked key missing from store");
            assert_eq!(slot.prev_link(), &prev, "prev link of {key:?}");
            seen += 1;
            assert!(seen <= len, "forward walk does not terminate");
            prev = Link::Key(key);
            cursor = slot.next_link().clone();
        }
        assert_eq!(seen, len);
        assert_eq!(prev, map.tail);

        let forward: Vec<K> = keys(map);
        let mut backward: Vec<K> = rev_keys(map);
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_new_and_default() {
        let map: OrderedMap<i32, Vec<i32>> = OrderedMap::default();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert!(map.head().is_nil());
        assert!(map.tail().is_nil());
        assert_linked(&map);
    }

    #[test]
    fn test_with_capacity() {
        let map: OrderedMap<i32, Vec<i32>> = OrderedMap::with_capacity(10);
        assert!(map.is_empty());
        assert!(map.store().capacity() >= 10);
    }

    #[test]
    fn test_with_store_rejects_populated_store() {
        let mut store = Store::default();
        store.insert("a", Slot::new(Link::Nil, 'a', Link::Nil));

        let result = Map::<_, char, _>::with_store(store);
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_insert_appends_and_update_keeps_position() {
        let mut map = OrderedMap::new();
        assert_eq!(map.insert("a", 1), None);
        assert_eq!(map.insert("b", 2), None);
        assert_eq!(map.insert("c", 3), None);
        assert_eq!(map.head(), &Link::Key("a"));
        assert_eq!(map.tail(), &Link::Key("c"));

        assert_eq!(map.insert("a", 10), Some(1));
        assert_eq!(map.insert("c", 30), Some(3));

        assert_eq!(keys(&map), ["a", "b", "c"]);
        assert_eq!(values(&map), [10, 2, 30]);
        assert_linked(&map);
    }

    #[test]
    fn test_get_operations() {
        let mut map = OrderedMap::from_pairs([(1, vec![1]), (2, vec![2])]);

        assert_eq!(map.get(&1), Some(&vec![1]));
        assert_eq!(map.get(&3), None);
        assert_eq!(map.try_get(&2), Ok(&vec![2]));
        assert_eq!(map.try_get(&3), Err(Error::KeyNotFound));

        map.get_mut(&2).unwrap().push(20);
        assert_eq!(map[&2], vec![2, 20]);
        map[&1].clear();
        assert!(map[&1].is_empty());

        assert!(map.contains_key(&1));
        assert!(!map.contains_key(&0));
    }

    #[test]
    #[should_panic(expected = "key not found")]
    fn test_index_missing_key_panics() {
        let map = OrderedMap::from_pairs([(1, 1)]);
        let _value = map[&2];
    }

    #[test]
    fn test_get_or_insert() {
        let mut map = OrderedMap::from_pairs([(1, "x")]);

        assert_eq!(*map.get_or_insert(1, "9999"), "x");
        assert_eq!(map[&1], "x");

        *map.get_or_insert(4, "9999") = "y";
        assert_eq!(map.to_pairs(), [(1, "x"), (4, "y")]);

        let calls = Cell::new(0);
        map.get_or_insert_with(1, || {
            calls.set(calls.get() + 1);
            "z"
        });
        assert_eq!(calls.get(), 0);
        assert_linked(&map);
    }

    #[test]
    fn test_remove_relinks_neighbours() {
        let mut map = OrderedMap::from_pairs([("1", 1), ("2", 2), ("3", 3)]);

        assert_eq!(map.remove(&"2"), Ok(2));
        assert_eq!(map.head(), &Link::Key("1"));
        assert_eq!(map.tail(), &Link::Key("3"));
        assert_linked(&map);

        assert_eq!(map.remove(&"1"), Ok(1));
        assert_eq!(map.head(), &Link::Key("3"));
        assert_linked(&map);

        assert_eq!(map.remove_entry(&"3"), Ok(("3", 3)));
        assert!(map.head().is_nil());
        assert!(map.tail().is_nil());
        assert_linked(&map);

        assert_eq!(map.remove(&"3"), Err(Error::KeyNotFound));
    }

    #[test]
    fn test_remove_tail_updates_tail() {
        let mut map = OrderedMap::from_pairs([("1", 1), ("2", 2), ("3", 3)]);
        map.remove(&"3").unwrap();
        assert_eq!(map.head(), &Link::Key("1"));
        assert_eq!(map.tail(), &Link::Key("2"));
        assert_eq!(map.to_pairs(), [("1", 1), ("2", 2)]);
    }

    #[test]
    fn test_remove_or() {
        let mut map = OrderedMap::from_pairs([(1, 'a'), (2, 'b')]);
        assert_eq!(map.remove_or(&3, 'z'), 'z');
        assert_eq!(map.to_pairs(), [(1, 'a'), (2, 'b')]);
        assert_eq!(map.remove_or(&2, 'z'), 'b');
        assert_eq!(map.to_pairs(), [(1, 'a')]);
    }

    #[test]
    fn test_pop_head_and_tail() {
        let mut map = OrderedMap::from_pairs([(1, 'a'), (2, 'b'), (3, 'c')]);
        assert_eq!(map.pop_tail(), Ok((3, 'c')));
        assert_eq!(map.pop_head(), Ok((1, 'a')));
        assert_eq!(map.pop_head(), Ok((2, 'b')));
        assert_eq!(
            map.pop_tail(),
            Err(Error::EmptyStructure {
                operation: "pop_tail"
            })
        );
        assert!(matches!(map.pop_head(), Err(Error::EmptyStructure { .. })));
        assert_linked(&map);
    }

    #[test]
    fn test_clear() {
        let mut map = OrderedMap::from_pairs([(1, vec![1]), (2, vec![2])]);
        map.clear();
        assert_eq!(map.len(), 0);
        assert!(map.head().is_nil());
        assert!(map.tail().is_nil());

        map.insert(3, vec![3]);
        assert_eq!(keys(&map), [3]);
        assert_linked(&map);
    }

    #[test]
    fn test_boundary_queries() {
        let mut map: OrderedMap<&str, i32> = OrderedMap::new();
        assert_eq!(
            map.first_key(),
            Err(Error::EmptyStructure {
                operation: "first_key"
            })
        );
        assert!(map.last_key().is_err());
        assert!(map.first().is_err());
        assert!(map.last().is_err());

        map.extend([("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(map.first_key(), Ok(&"a"));
        assert_eq!(map.last_key(), Ok(&"c"));
        assert_eq!(map.first(), Ok((&"a", &1)));
        assert_eq!(map.last(), Ok((&"c", &3)));
    }

    #[test]
    fn test_navigation() {
        let map = OrderedMap::from_pairs([("x", 1), ("y", 2)]);
        assert_eq!(map.next_key(&"x"), Ok(Some(&"y")));
        assert_eq!(map.next_key(&"y"), Ok(None));
        assert_eq!(map.prev_key(&"y"), Ok(Some(&"x")));
        assert_eq!(map.prev_key(&"x"), Ok(None));
        assert_eq!(map.next_key(&"z"), Err(Error::KeyNotFound));
        assert_eq!(map.prev_key(&"z"), Err(Error::KeyNotFound));

        let empty: OrderedMap<&str, i32> = OrderedMap::new();
        assert_eq!(empty.next_key(&"x"), Err(Error::KeyNotFound));
    }

    #[test]
    fn test_rename_positions() {
        let mut map = OrderedMap::from_pairs([("1", 'a'), ("2", 'b'), ("3", 'c')]);

        map.rename(&"1", "foo").unwrap();
        assert_eq!(keys(&map), ["foo", "2", "3"]);
        assert_eq!(rev_keys(&map), ["3", "2", "foo"]);
        assert_eq!(map.head(), &Link::Key("foo"));

        map.rename(&"2", "bar").unwrap();
        assert_eq!(keys(&map), ["foo", "bar", "3"]);
        assert_eq!(map[&"bar"], 'b');

        map.rename(&"3", "baz").unwrap();
        assert_eq!(keys(&map), ["foo", "bar", "baz"]);
        assert_eq!(rev_keys(&map), ["baz", "bar", "foo"]);
        assert_eq!(values(&map), ['a', 'b', 'c']);
        assert_eq!(map.tail(), &Link::Key("baz"));
        assert_linked(&map);
    }

    #[test]
    fn test_rename_single_entry() {
        let mut map = OrderedMap::from_pairs([("only", 1)]);
        map.rename(&"only", "new").unwrap();
        assert_eq!(map.head(), &Link::Key("new"));
        assert_eq!(map.tail(), &Link::Key("new"));
        assert_linked(&map);
    }

    #[test]
    fn test_rename_errors_leave_map_untouched() {
        let mut map = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
        let before = map.clone();

        assert_eq!(map.rename(&"a", "a"), Err(Error::KeyCollision));
        assert_eq!(map.rename(&"x", "y"), Err(Error::KeyNotFound));
        assert_eq!(map.rename(&"a", "b"), Err(Error::KeyExists));

        assert_eq!(map, before);
        assert_linked(&map);
    }

    #[test]
    fn test_swap_same_key() {
        let mut map = five();
        assert_eq!(map.swap(&"0", &"0"), Err(Error::KeyCollision));
        assert_eq!(map.swap(&"0", &"x"), Err(Error::KeyNotFound));
        assert_eq!(map.swap(&"x", &"0"), Err(Error::KeyNotFound));
        assert_eq!(map, five());
    }

    #[test]
    fn test_swap_scenarios() {
        let cases: [(&str, &str, [&str; 5], [char; 5]); 6] = [
            ("0", "1", ["1", "0", "2", "3", "4"], ['b', 'a', 'c', 'd', 'e']),
            ("3", "4", ["0", "1", "2", "4", "3"], ['a', 'b', 'c', 'e', 'd']),
            ("1", "2", ["0", "2", "1", "3", "4"], ['a', 'c', 'b', 'd', 'e']),
            ("0", "2", ["2", "1", "0", "3", "4"], ['c', 'b', 'a', 'd', 'e']),
            ("2", "4", ["0", "1", "4", "3", "2"], ['a', 'b', 'e', 'd', 'c']),
            ("1", "3", ["0", "3", "2", "1", "4"], ['a', 'd', 'c', 'b', 'e']),
        ];

        for (a, b, expected_keys, expected_values) in cases {
            let mut map = five();
            map.swap(&a, &b).unwrap();
            assert_eq!(keys(&map), expected_keys, "swap({a}, {b})");
            assert_eq!(values(&map), expected_values, "swap({a}, {b})");
            assert_linked(&map);

            // Same result with the arguments reversed.
            let mut map = five();
            map.swap(&b, &a).unwrap();
            assert_eq!(keys(&map), expected_keys, "swap({b}, {a})");
            assert_linked(&map);
        }
    }

    #[test]
    fn test_swap_first_with_last() {
        let mut map = OrderedMap::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
        map.swap(&"a", &"c").unwrap();
        assert_eq!(keys(&map), ["c", "b", "a"]);
        assert_eq!(values(&map), [3, 2, 1]);
        assert_eq!(map.head(), &Link::Key("c"));
        assert_eq!(map.tail(), &Link::Key("a"));
        assert_linked(&map);
    }

    #[test]
    fn test_swap_two_entries() {
        let mut map = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
        map.swap(&"a", &"b").unwrap();
        assert_eq!(keys(&map), ["b", "a"]);
        assert_eq!(map.head(), &Link::Key("b"));
        assert_eq!(map.tail(), &Link::Key("a"));
        assert_linked(&map);
    }

    #[test]
    fn test_insert_before() {
        let mut map = OrderedMap::from_pairs([("0", 'a')]);
        assert_eq!(map.insert_before(&"0", "0", 'a'), Err(Error::KeyCollision));
        assert_eq!(map.insert_before(&"x", "1", 'b'), Err(Error::KeyNotFound));

        map.insert_before(&"0", "1", 'b').unwrap();
        assert_eq!(keys(&map), ["1", "0"]);
        assert_eq!(rev_keys(&map), ["0", "1"]);
        assert_eq!(values(&map), ['b', 'a']);
        assert_eq!((map.head(), map.tail()), (&Link::Key("1"), &Link::Key("0")));

        map.insert_before(&"0", "2", 'c').unwrap();
        assert_eq!(keys(&map), ["1", "2", "0"]);
        assert_eq!(rev_keys(&map), ["0", "2", "1"]);
        assert_eq!(values(&map), ['b', 'c', 'a']);
        assert_linked(&map);
    }

    #[test]
    fn test_insert_after() {
        let mut map = OrderedMap::from_pairs([("0", 'a')]);
        assert_eq!(map.insert_after(&"0", "0", 'a'), Err(Error::KeyCollision));
        assert_eq!(map.insert_after(&"x", "1", 'b'), Err(Error::KeyNotFound));

        map.insert_after(&"0", "1", 'b').unwrap();
        assert_eq!(keys(&map), ["0", "1"]);
        assert_eq!(map.tail(), &Link::Key("1"));

        map.insert_after(&"0", "2", 'c').unwrap();
        assert_eq!(keys(&map), ["0", "2", "1"]);
        assert_eq!(rev_keys(&map), ["1", "2", "0"]);
        assert_eq!(values(&map), ['a', 'c', 'b']);
        assert_linked(&map);
    }

    #[test]
    fn test_insert_relative_existing_key_rejected() {
        let mut map = five();
        assert_eq!(map.insert_relative(&"0", "3", 'x', Position::After), Err(Error::KeyExists));
        assert_eq!(map, five());
    }

    #[test]
    fn test_insert_head_and_tail() {
        let mut map = OrderedMap::new();
        map.insert_head("0", 'a').unwrap();
        assert_eq!(keys(&map), ["0"]);
        assert_eq!(rev_keys(&map), ["0"]);

        map.insert_head("1", 'b').unwrap();
        assert_eq!(keys(&map), ["1", "0"]);
        assert_eq!(values(&map), ['b', 'a']);

        let mut map = OrderedMap::new();
        map.insert_tail("0", 'a').unwrap();
        map.insert_tail("1", 'b').unwrap();
        assert_eq!(keys(&map), ["0", "1"]);
        assert_eq!(rev_keys(&map), ["1", "0"]);
        assert_eq!(values(&map), ['a', 'b']);

        assert_eq!(map.insert_tail("1", 'c'), Err(Error::KeyCollision));
        assert_eq!(map.insert_head("1", 'c'), Err(Error::KeyExists));
        assert_linked(&map);
    }

    #[test]
    fn test_move_before_scenarios() {
        let cases: [(&str, &str, [&str; 5], [char; 5]); 4] = [
            ("1", "3", ["0", "3", "1", "2", "4"], ['a', 'd', 'b', 'c', 'e']),
            ("2", "3", ["0", "1", "3", "2", "4"], ['a', 'b', 'd', 'c', 'e']),
            ("3", "2", ["0", "1", "2", "3", "4"], ['a', 'b', 'c', 'd', 'e']),
            ("0", "2", ["2", "0", "1", "3", "4"], ['c', 'a', 'b', 'd', 'e']),
        ];

        for (reference, key, expected_keys, expected_values) in cases {
            let mut map = five();
            map.move_before(&reference, &key).unwrap();
            assert_eq!(keys(&map), expected_keys, "move_before({reference}, {key})");
            assert_eq!(values(&map), expected_values);
            assert_linked(&map);
        }
    }

    #[test]
    fn test_move_after_scenarios() {
        let cases: [(&str, &str, [&str; 5]); 4] = [
            ("1", "3", ["0", "1", "3", "2", "4"]),
            ("3", "2", ["0", "1", "3", "2", "4"]),
            ("4", "0", ["1", "2", "3", "4", "0"]),
            ("2", "1", ["0", "2", "1", "3", "4"]),
        ];

        for (reference, key, expected_keys) in cases {
            let mut map = five();
            map.move_after(&reference, &key).unwrap();
            assert_eq!(keys(&map), expected_keys, "move_after({reference}, {key})");
            assert_linked(&map);
        }
    }

    #[test]
    fn test_move_errors() {
        let mut map = five();
        assert_eq!(map.move_before(&"0", &"0"), Err(Error::KeyCollision));
        assert_eq!(map.move_after(&"0", &"0"), Err(Error::KeyCollision));
        assert_eq!(map.move_before(&"x", &"0"), Err(Error::KeyNotFound));
        assert_eq!(map.move_before(&"0", &"x"), Err(Error::KeyNotFound));
        assert_eq!(map.move_to_head(&"x"), Err(Error::KeyNotFound));
        assert_eq!(map.move_to_tail(&"x"), Err(Error::KeyNotFound));
        assert_eq!(map, five());
    }

    #[test]
    fn test_move_to_head_and_tail() {
        let mut map = OrderedMap::from_pairs([("0", 'a'), ("1", 'b'), ("2", 'c')]);

        map.move_to_head(&"2").unwrap();
        assert_eq!(keys(&map), ["2", "0", "1"]);
        assert_eq!(rev_keys(&map), ["1", "0", "2"]);
        assert_eq!(values(&map), ['c', 'a', 'b']);
        assert_eq!((map.head(), map.tail()), (&Link::Key("2"), &Link::Key("1")));

        map.move_to_head(&"2").unwrap();
        assert_eq!(keys(&map), ["2", "0", "1"]);

        let mut map = OrderedMap::from_pairs([("0", 'a'), ("1", 'b'), ("2", 'c')]);
        map.move_to_tail(&"0").unwrap();
        assert_eq!(keys(&map), ["1", "2", "0"]);
        assert_eq!(rev_keys(&map), ["0", "2", "1"]);
        assert_eq!((map.head(), map.tail()), (&Link::Key("1"), &Link::Key("0")));

        map.move_to_tail(&"0").unwrap();
        assert_eq!(keys(&map), ["1", "2", "0"]);
        assert_linked(&map);
    }

    #[test]
    fn test_reverse() {
        let mut map = five();
        map.reverse();
        assert_eq!(keys(&map), ["4", "3", "2", "1", "0"]);
        assert_eq!(map.head(), &Link::Key("4"));
        assert_linked(&map);

        let mut empty: OrderedMap<i32, i32> = OrderedMap::new();
        empty.reverse();
        assert_linked(&empty);
    }

    #[test]
    fn test_sort_by_value() {
        let mut map = OrderedMap::from_pairs([("3", 'c'), ("1", 'a'), ("2", 'b')]);
        map.sort();
        assert_eq!(map.to_pairs(), [("1", 'a'), ("2", 'b'), ("3", 'c')]);
        assert_linked(&map);
    }

    #[test]
    fn test_sort_variants() {
        let source = [("a", 1), ("c", 3), ("b", 2)];

        let mut map = OrderedMap::from_pairs(source);
        map.sort_by(|(ka, _), (kb, _)| kb.cmp(ka));
        assert_eq!(map.to_pairs(), [("c", 3), ("b", 2), ("a", 1)]);

        let mut map = OrderedMap::from_pairs(source);
        map.sort_by_key(|k, _| *k);
        assert_eq!(map.to_pairs(), [("a", 1), ("b", 2), ("c", 3)]);

        let mut map = OrderedMap::from_pairs(source);
        map.sort_with(|(ka, _), (kb, _)| ka.cmp(kb), SortOrder::Descending);
        assert_eq!(map.to_pairs(), [("c", 3), ("b", 2), ("a", 1)]);
        assert_linked(&map);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut map = OrderedMap::from_pairs([("x", 2), ("a", 1), ("y", 2), ("b", 1)]);
        map.sort();
        assert_eq!(keys(&map), ["a", "b", "x", "y"]);
    }

    #[test]
    fn test_retain() {
        let mut map: OrderedMap<i32, i32> = (0..10).map(|i| (i, i)).collect();
        map.retain(|k, v| {
            *v *= 10;
            k % 3 == 0
        });
        assert_eq!(map.to_pairs(), [(0, 0), (3, 30), (6, 60), (9, 90)]);
        assert_linked(&map);
    }

    #[test]
    fn test_iterators() {
        let map = OrderedMap::from_pairs([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);

        assert_eq!(map.iter().len(), 4);
        assert_eq!(
            map.iter().rev().collect::<Vec<_>>(),
            [(&"d", &4), (&"c", &3), (&"b", &2), (&"a", &1)]
        );
        assert_eq!(values(&map), [1, 2, 3, 4]);
        assert_eq!(map.values().rev().copied().collect::<Vec<_>>(), [4, 3, 2, 1]);

        let mut iter = map.keys();
        assert_eq!(iter.next(), Some(&"a"));
        assert_eq!(iter.next_back(), Some(&"d"));
        assert_eq!(iter.next(), Some(&"b"));
        assert_eq!(iter.next_back(), Some(&"c"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        let mut n = 0;
        for (_, value) in &map {
            n += value;
        }
        assert_eq!(n, 10);
    }

    #[test]
    fn test_into_iter_both_ends() {
        let map = OrderedMap::from_pairs([(1, "a"), (2, "b"), (3, "c")]);
        let mut iter = map.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back(), Some((3, "c")));
        assert_eq!(iter.next(), Some((1, "a")));
        assert_eq!(iter.next(), Some((2, "b")));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = OrderedMap::from_pairs([(1, 'a'), (2, 'b')]);
        let b = OrderedMap::from_pairs([(2, 'b'), (1, 'a')]);
        let c = OrderedMap::from_pairs([(1, 'a'), (2, 'b')]);
        assert_ne!(a, b);
        assert_eq!(a, c);
        assert!(!(a != c));

        let mut d = c.clone();
        d.insert(3, 'c');
        assert_ne!(a, d);
    }

    #[test]
    fn test_clone_is_structurally_independent() {
        let mut original = OrderedMap::from_pairs([("a", String::from("x")), ("b", String::from("y"))]);
        let copy = original.clone();

        original.get_mut(&"a").unwrap().push('!');
        original.move_to_tail(&"a").unwrap();
        original.insert("c", String::new());

        assert_eq!(copy.to_pairs(), [("a", "x".to_string()), ("b", "y".to_string())]);
        assert_linked(&copy);
        assert_linked(&original);
    }

    #[test]
    fn test_clone_shares_rc_values() {
        let shared = Rc::new(Cell::new(1));
        let original = OrderedMap::from_pairs([("1", Rc::new(Cell::new(0))), ("3", shared.clone())]);
        let copy = original.clone();

        assert!(Rc::ptr_eq(&copy[&"3"], &original[&"3"]));
        shared.set(5);
        assert_eq!(copy[&"3"].get(), 5);
    }

    #[test]
    fn test_to_plain_map() {
        let map = OrderedMap::from_pairs([(1, 1), (2, 4)]);
        let plain: alloc::collections::BTreeMap<_, _> = map.to_plain_map();
        assert_eq!(plain.get(&2), Some(&4));

        let plain: alloc::collections::BTreeMap<_, _> = map.into_plain_map();
        assert_eq!(plain.len(), 2);
    }

    #[test]
    fn test_into_store_keeps_links() {
        let map = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
        let store = map.into_store();
        assert_eq!(store.get(&"a"), Some(&Slot::new(Link::Nil, 1, Link::Key("b"))));
        assert_eq!(store.get(&"b"), Some(&Slot::new(Link::Key("a"), 2, Link::Nil)));
    }

    #[test]
    fn test_pairs_round_trip() {
        let map = five();
        let rebuilt: OrderedMap<_, _> = OrderedMap::from_pairs(map.to_pairs());
        assert_eq!(rebuilt, map);
        assert_eq!(map.clone().into_pairs(), map.to_pairs());

        let empty: OrderedMap<i32, i32> = OrderedMap::new();
        assert_eq!(OrderedMap::from_pairs(empty.to_pairs()), empty);
    }

    #[test]
    fn test_from_keys() {
        let map: OrderedMap<i32, Option<i32>> = OrderedMap::from_keys([1, 2, 3], None);
        assert_eq!(map.to_pairs(), [(1, None), (2, None), (3, None)]);

        let empty: OrderedMap<i32, char> = OrderedMap::from_keys([], 'x');
        assert!(empty.is_empty());
    }

    #[test]
    fn test_debug_formats() {
        let map = OrderedMap::from_pairs([("foo", 'a'), ("bar", 'b')]);
        assert_eq!(format!("{map:?}"), "{\"foo\": 'a', \"bar\": 'b'}");

        let raw = format!("{:?}", map.debug_links());
        assert!(raw.starts_with("OrderedMap { head: \"foo\", tail: \"bar\""));
        assert!(raw.contains("\"foo\": [prev: nil, value: 'a', next: \"bar\"]"));

        let empty: OrderedMap<&str, char> = OrderedMap::new();
        assert_eq!(format!("{empty:?}"), "{}");
        assert!(format!("{:?}", empty.debug_links()).contains("head: nil"));
    }

    #[test]
    fn test_btree_store_backend() {
        let store: alloc::collections::BTreeMap<&str, Slot<&str, i32>> = Default::default();
        let mut map: Map<&str, i32, _> = Map::with_store(store).unwrap();
        map.insert("z", 1);
        map.insert("a", 2);
        map.insert_before(&"z", "m", 3).unwrap();
        map.swap(&"z", &"a").unwrap();
        assert_eq!(keys(&map), ["m", "a", "z"]);
        assert_linked(&map);

        let hashed = OrderedMap::from_pairs([("m", 3), ("a", 2), ("z", 1)]);
        assert_eq!(map, hashed);
    }

    /// Counts size queries so `len` can be checked for O(1) behaviour.
    #[derive(Default)]
    struct CountingStore {
        inner: DefaultStore<u32, u32>,
        len_calls: Cell<usize>,
    }

    impl SlotStore<u32, u32> for CountingStore {
        type Slot = Slot<u32, u32>;

        fn len(&self) -> usize {
            self.len_calls.set(self.len_calls.get() + 1);
            self.inner.len()
        }

        fn get(&self, key: &u32) -> Option<&Self::Slot> {
            self.inner.get(key)
        }

        fn get_mut(&mut self, key: &u32) -> Option<&mut Self::Slot> {
            self.inner.get_mut(key)
        }

        fn insert(&mut self, key: u32, slot: Self::Slot) -> Option<Self::Slot> {
            self.inner.insert(key, slot)
        }

        fn remove_entry(&mut self, key: &u32) -> Option<(u32, Self::Slot)> {
            self.inner.remove_entry(key)
        }

        fn clear(&mut self) {
            self.inner.clear()
        }
    }

    #[test]
    fn test_len_is_a_single_store_query() {
        for size in [0u32, 1, 10, 1000] {
            let mut map: Map<u32, u32, _> = Map::with_store(CountingStore::default()).unwrap();
            map.extend((0..size).map(|i| (i, i)));

            let before = map.store().len_calls.get();
            assert_eq!(map.len(), size as usize);
            assert_eq!(map.store().len_calls.get() - before, 1, "size {size}");
        }
    }

    #[test]
    fn test_scenario_insert_move_swap() {
        let mut map = OrderedMap::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(keys(&map), ["a", "b", "c"]);

        map.insert_relative(&"b", "new", 99, Position::Before).unwrap();
        assert_eq!(keys(&map), ["a", "new", "b", "c"]);
        assert_eq!(map.get(&"new"), Some(&99));

        map.move_to_head(&"c").unwrap();
        assert_eq!(keys(&map), ["c", "a", "new", "b"]);

        let mut map = OrderedMap::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
        map.swap(&"a", &"b").unwrap();
        assert_eq!(keys(&map), ["b", "a", "c"]);
        assert_eq!((map[&"a"], map[&"b"], map[&"c"]), (1, 2, 3));
    }
}
