use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::ordered_map::OrderedMap;
use crate::slot::SlotLike;
use crate::store::SlotStore;

/// An iterator over the entries of an [`OrderedMap`], in order.
///
/// Created by [`OrderedMap::iter`]. Iterating from the back (`.rev()`) walks
/// the predecessor links from the tail.
pub struct Iter<'a, K, V, S> {
    pub(super) store: &'a S,
    pub(super) front: Option<&'a K>,
    pub(super) back: Option<&'a K>,
    pub(super) remaining: usize,
    pub(super) _values: PhantomData<&'a V>,
}

impl<K, V, S> Clone for Iter<'_, K, V, S> {
    fn clone(&self) -> Self {
        Iter {
            store: self.store,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
            _values: PhantomData,
        }
    }
}

impl<'a, K, V, S> Iterator for Iter<'a, K, V, S>
where
    S: SlotStore<K, V>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let key = self.front?;
        let store: &'a S = self.store;
        let slot = store.get(key)?;
        self.front = slot.next_link().as_key();
        self.remaining -= 1;
        Some((key, slot.value_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V, S> DoubleEndedIterator for Iter<'a, K, V, S>
where
    S: SlotStore<K, V>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let key = self.back?;
        let store: &'a S = self.store;
        let slot = store.get(key)?;
        self.back = slot.prev_link().as_key();
        self.remaining -= 1;
        Some((key, slot.value_ref()))
    }
}

impl<K, V, S> ExactSizeIterator for Iter<'_, K, V, S> where S: SlotStore<K, V> {}

impl<K, V, S> FusedIterator for Iter<'_, K, V, S> where S: SlotStore<K, V> {}

/// An iterator over the keys of an [`OrderedMap`], in order.
///
/// Created by [`OrderedMap::keys`].
pub struct Keys<'a, K, V, S> {
    pub(super) iter: Iter<'a, K, V, S>,
}

impl<'a, K, V, S> Iterator for Keys<'a, K, V, S>
where
    S: SlotStore<K, V>,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<K, V, S> DoubleEndedIterator for Keys<'_, K, V, S>
where
    S: SlotStore<K, V>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(key, _)| key)
    }
}

impl<K, V, S> ExactSizeIterator for Keys<'_, K, V, S> where S: SlotStore<K, V> {}

impl<K, V, S> FusedIterator for Keys<'_, K, V, S> where S: SlotStore<K, V> {}

/// An iterator over the values of an [`OrderedMap`], in key order.
///
/// Created by [`OrderedMap::values`].
pub struct Values<'a, K, V, S> {
    pub(super) iter: Iter<'a, K, V, S>,
}

impl<'a, K, V, S> Iterator for Values<'a, K, V, S>
where
    S: SlotStore<K, V>,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<K, V, S> DoubleEndedIterator for Values<'_, K, V, S>
where
    S: SlotStore<K, V>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(_, value)| value)
    }
}

impl<K, V, S> ExactSizeIterator for Values<'_, K, V, S> where S: SlotStore<K, V> {}

impl<K, V, S> FusedIterator for Values<'_, K, V, S> where S: SlotStore<K, V> {}

/// An owning iterator over the entries of an [`OrderedMap`].
///
/// Created by the [`into_iter`] method on [`OrderedMap`] (provided by the
/// [`IntoIterator`] trait). Each step unlinks the entry at the front (or the
/// back) of the remaining map.
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V, S> {
    pub(super) map: OrderedMap<K, V, S>,
}

impl<K, V, S> Iterator for IntoIter<K, V, S>
where
    K: Eq + Clone,
    S: SlotStore<K, V>,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.map.pop_head().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.map.len();
        (len, Some(len))
    }
}

impl<K, V, S> DoubleEndedIterator for IntoIter<K, V, S>
where
    K: Eq + Clone,
    S: SlotStore<K, V>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.map.pop_tail().ok()
    }
}

impl<K, V, S> ExactSizeIterator for IntoIter<K, V, S>
where
    K: Eq + Clone,
    S: SlotStore<K, V>,
{
}

impl<K, V, S> FusedIterator for IntoIter<K, V, S>
where
    K: Eq + Clone,
    S: SlotStore<K, V>,
{
}
