//! Slots: the per-key records the ordered map is threaded through.
//!
//! A slot holds the key of its predecessor, the stored value, and the key of
//! its successor. The links are keys, not addresses, so a slot stays valid
//! when the store holding it moves, is cloned, or is rebuilt from serialized
//! data.

use core::mem;

use crate::Link;
use crate::error::Error;
use crate::error::Result;

/// The record kept in the backing store for every live key.
///
/// # Examples
///
/// ```
/// use odict::Link;
/// use odict::Slot;
///
/// let slot = Slot::new(Link::Key("a"), 2, Link::Nil);
/// assert_eq!(slot.prev_key(), &Link::Key("a"));
/// assert_eq!(slot.value(), &2);
/// assert!(slot.next_key().is_nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot<K, V> {
    pub(crate) prev: Link<K>,
    pub(crate) value: V,
    pub(crate) next: Link<K>,
}

/// One field of a slot, selected by position.
///
/// Returned by [`Slot::field`] (`SlotField<&Link<K>, &V>`) and
/// [`Slot::field_mut`] (`SlotField<&mut Link<K>, &mut V>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotField<L, V> {
    /// Position 0 (or -3): the predecessor link.
    Prev(L),
    /// Position 1 (or -2): the stored value.
    Value(V),
    /// Position 2 (or -1): the successor link.
    Next(L),
}

impl<L, V> SlotField<L, V> {
    /// Returns the link if this is [`SlotField::Prev`] or [`SlotField::Next`].
    pub fn link(self) -> Option<L> {
        match self {
            SlotField::Prev(link) | SlotField::Next(link) => Some(link),
            SlotField::Value(_) => None,
        }
    }

    /// Returns the value if this is [`SlotField::Value`].
    pub fn value(self) -> Option<V> {
        match self {
            SlotField::Value(value) => Some(value),
            _ => None,
        }
    }
}

fn position(index: isize) -> Result<usize> {
    match index {
        0 | -3 => Ok(0),
        1 | -2 => Ok(1),
        2 | -1 => Ok(2),
        _ => Err(Error::IndexOutOfRange { index }),
    }
}

impl<K, V> Slot<K, V> {
    /// Creates a slot from its predecessor link, value and successor link.
    pub fn new(prev_key: Link<K>, value: V, next_key: Link<K>) -> Self {
        Slot {
            prev: prev_key,
            value,
            next: next_key,
        }
    }

    /// The key of the previous entry, or [`Link::Nil`] at the head.
    pub fn prev_key(&self) -> &Link<K> {
        &self.prev
    }

    /// The key of the next entry, or [`Link::Nil`] at the tail.
    pub fn next_key(&self) -> &Link<K> {
        &self.next
    }

    /// The stored value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Mutable access to the stored value.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Returns the field at a positional index, treating the slot as the
    /// triple `(prev_key, value, next_key)`.
    ///
    /// Negative indices count from the end, so `-1` is `next_key`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] for any index outside `-3..=2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use odict::Error;
    /// use odict::Link;
    /// use odict::Slot;
    /// use odict::SlotField;
    ///
    /// let slot = Slot::new(Link::Nil, "v", Link::Key(2));
    /// assert_eq!(slot.field(1), Ok(SlotField::Value(&"v")));
    /// assert_eq!(slot.field(-1), Ok(SlotField::Next(&Link::Key(2))));
    /// assert_eq!(slot.field(3), Err(Error::IndexOutOfRange { index: 3 }));
    /// ```
    pub fn field(&self, index: isize) -> Result<SlotField<&Link<K>, &V>> {
        Ok(match position(index)? {
            0 => SlotField::Prev(&self.prev),
            1 => SlotField::Value(&self.value),
            _ => SlotField::Next(&self.next),
        })
    }

    /// Mutable variant of [`Slot::field`].
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] for any index outside `-3..=2`.
    pub fn field_mut(&mut self, index: isize) -> Result<SlotField<&mut Link<K>, &mut V>> {
        Ok(match position(index)? {
            0 => SlotField::Prev(&mut self.prev),
            1 => SlotField::Value(&mut self.value),
            _ => SlotField::Next(&mut self.next),
        })
    }

    /// Reduces the slot to the triple it can be rebuilt from.
    pub fn into_parts(self) -> (Link<K>, V, Link<K>) {
        (self.prev, self.value, self.next)
    }

    /// Replaces the stored value, returning the old one.
    pub fn replace_value(&mut self, value: V) -> V {
        mem::replace(&mut self.value, value)
    }
}

impl<K, V> From<(Link<K>, V, Link<K>)> for Slot<K, V> {
    fn from((prev, value, next): (Link<K>, V, Link<K>)) -> Self {
        Slot::new(prev, value, next)
    }
}

/// The capabilities the ordered map needs from the record it stores per key.
///
/// Implemented for [`Slot`] and for the positional triple
/// `(Link<K>, V, Link<K>)`. A store-friendly record (for example one with a
/// custom layout for a persistent store) can implement this trait and be
/// selected through the store type passed to
/// [`OrderedMap::with_store`](crate::ordered_map::OrderedMap::with_store).
pub trait SlotLike<K, V>: Sized {
    /// Builds a record from its predecessor link, value and successor link.
    fn from_parts(prev: Link<K>, value: V, next: Link<K>) -> Self;

    /// The predecessor link.
    fn prev_link(&self) -> &Link<K>;

    /// Mutable access to the predecessor link.
    fn prev_link_mut(&mut self) -> &mut Link<K>;

    /// The successor link.
    fn next_link(&self) -> &Link<K>;

    /// Mutable access to the successor link.
    fn next_link_mut(&mut self) -> &mut Link<K>;

    /// The stored value.
    fn value_ref(&self) -> &V;

    /// Mutable access to the stored value.
    fn value_mut_ref(&mut self) -> &mut V;

    /// Splits the record into `(prev, value, next)`.
    fn into_triple(self) -> (Link<K>, V, Link<K>);

    /// Consumes the record, keeping only its value.
    fn into_value(self) -> V {
        self.into_triple().1
    }
}

impl<K, V> SlotLike<K, V> for Slot<K, V> {
    fn from_parts(prev: Link<K>, value: V, next: Link<K>) -> Self {
        Slot::new(prev, value, next)
    }

    fn prev_link(&self) -> &Link<K> {
        &self.prev
    }

    fn prev_link_mut(&mut self) -> &mut Link<K> {
        &mut self.prev
    }

    fn next_link(&self) -> &Link<K> {
        &self.next
    }

    fn next_link_mut(&mut self) -> &mut Link<K> {
        &mut self.next
    }

    fn value_ref(&self) -> &V {
        &self.value
    }

    fn value_mut_ref(&mut self) -> &mut V {
        &mut self.value
    }

    fn into_triple(self) -> (Link<K>, V, Link<K>) {
        self.into_parts()
    }
}

impl<K, V> SlotLike<K, V> for (Link<K>, V, Link<K>) {
    fn from_parts(prev: Link<K>, value: V, next: Link<K>) -> Self {
        (prev, value, next)
    }

    fn prev_link(&self) -> &Link<K> {
        &self.0
    }

    fn prev_link_mut(&mut self) -> &mut Link<K> {
        &mut self.0
    }

    fn next_link(&self) -> &Link<K> {
        &self.2
    }

    fn next_link_mut(&mut self) -> &mut Link<K> {
        &mut self.2
    }

    fn value_ref(&self) -> &V {
        &self.1
    }

    fn value_mut_ref(&mut self) -> &mut V {
        &mut self.1
    }

    fn into_triple(self) -> (Link<K>, V, Link<K>) {
        self
    }
}
