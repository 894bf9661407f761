#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

mod error;
pub mod ordered_map;
#[cfg(feature = "serde")]
mod serde_impls;
pub mod slot;
pub mod store;

extern crate alloc;

#[cfg(feature = "std")]
type RandomState = std::hash::RandomState;
#[cfg(not(feature = "std"))]
type RandomState = hashbrown::DefaultHashBuilder;

pub use error::Error;
pub use error::Result;
pub use ordered_map::IntoIter;
pub use ordered_map::Iter;
pub use ordered_map::Keys;
pub use ordered_map::Position;
pub use ordered_map::SortOrder;
pub use ordered_map::Values;
pub use slot::Slot;
pub use slot::SlotField;
pub use slot::SlotLike;
pub use store::SlotStore;

/// The backing store used by [`OrderedMap`]: a hash map from each key to its
/// [`Slot`].
pub type DefaultStore<K, V> = hashbrown::HashMap<K, Slot<K, V>, RandomState>;

/// An ordered map with O(1) lookup, insertion, removal and structural
/// reordering, backed by the [`DefaultStore`].
///
/// This is the main type alias. To run the engine on another store (or
/// another slot type), use [`ordered_map::OrderedMap`] directly together with
/// [`ordered_map::OrderedMap::with_store`].
///
/// # Examples
///
/// ```
/// use odict::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.insert("a", 1);
/// map.insert("b", 2);
///
/// // Overwriting keeps the original position
/// map.insert("a", 10);
/// let entries: Vec<_> = map.iter().collect();
/// assert_eq!(entries, [(&"a", &10), (&"b", &2)]);
/// ```
pub type OrderedMap<K, V> = crate::ordered_map::OrderedMap<K, V, DefaultStore<K, V>>;

/// A link to a neighbouring entry: either the key of that entry, or
/// [`Link::Nil`] at either end of the list.
///
/// The sentinel is an ordinary enum variant, so it compares and hashes by
/// value. A `Nil` rebuilt from serialized data is equal to every other `Nil`.
///
/// # Examples
///
/// ```
/// use odict::Link;
///
/// let nil: Link<&str> = Link::Nil;
/// assert!(nil.is_nil());
/// assert_eq!(nil.to_string(), "nil");
///
/// let key = Link::Key("a");
/// assert_eq!(key.as_key(), Some(&"a"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Link<K> {
    /// No neighbour: the boundary of the list, or the head/tail of an empty
    /// map.
    Nil,
    /// The key of the neighbouring entry.
    Key(K),
}

impl<K> Link<K> {
    /// Returns `true` if this is the [`Link::Nil`] sentinel.
    pub fn is_nil(&self) -> bool {
        matches!(self, Link::Nil)
    }

    /// Returns the linked key, or `None` for [`Link::Nil`].
    pub fn as_key(&self) -> Option<&K> {
        match self {
            Link::Nil => None,
            Link::Key(key) => Some(key),
        }
    }

    /// Converts the link into the linked key, or `None` for [`Link::Nil`].
    pub fn into_key(self) -> Option<K> {
        match self {
            Link::Nil => None,
            Link::Key(key) => Some(key),
        }
    }

    /// Returns `true` if this link points at `key`.
    pub fn is_key(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        self.as_key() == Some(key)
    }
}

// Written by hand so that `K` needs no `Default` bound.
impl<K> Default for Link<K> {
    fn default() -> Self {
        Link::Nil
    }
}

impl<K> From<Option<K>> for Link<K> {
    fn from(key: Option<K>) -> Self {
        match key {
            Some(key) => Link::Key(key),
            None => Link::Nil,
        }
    }
}

impl<K: core::fmt::Debug> core::fmt::Display for Link<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Link::Nil => f.write_str("nil"),
            Link::Key(key) => write!(f, "{key:?}"),
        }
    }
}
