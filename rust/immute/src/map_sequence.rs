//! A backing store holding key-value pairs.

use std::{any::Any, hash::Hash};

use ahash::AHashMap;

use crate::{
    sequence::Sequence,
    sequencer::{CompleteFn, RawForm, Sequencer, VisitFn},
};

/// A backing store holding key-value pairs.
///
/// `MapSequence` owns the map it was created from and mutates it in place. Iteration
/// passes each entry's key to the visit callback; the visitation order is unspecified
/// and may differ between two stores holding the same entries.
#[derive(Debug, Clone)]
pub struct MapSequence<K, V> {
    data: AHashMap<K, V>,
}

impl<K, V> MapSequence<K, V> {
    /// Creates a `MapSequence` that takes ownership of `data`.
    pub fn new(data: AHashMap<K, V>) -> MapSequence<K, V> {
        MapSequence { data }
    }

    /// Creates an empty `MapSequence`.
    pub fn empty() -> MapSequence<K, V> {
        MapSequence {
            data: AHashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the underlying map.
    pub fn entries(&self) -> &AHashMap<K, V> {
        &self.data
    }

    /// Consumes the `MapSequence` and returns the underlying map.
    pub fn into_inner(self) -> AHashMap<K, V> {
        self.data
    }
}

impl<K, V> MapSequence<K, V>
where
    K: Eq + Hash,
{
    /// Returns the value stored under `key`, or `None` if the key is absent.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.data.get(key)
    }

    /// Stores `value` under `key`, returning the value it replaced, if any.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.data.insert(key, value)
    }

    /// Removes the entry for `key` and returns its value, or `None` if the key is absent.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.data.remove(key)
    }
}

impl<K, V> MapSequence<K, V>
where
    K: Eq + Hash + 'static,
    V: 'static,
{
    /// Wraps this store in a [`Sequence`] façade.
    pub fn into_sequence(self) -> Sequence<K, V> {
        Sequence::new(self)
    }
}

impl<K, V> Default for MapSequence<K, V> {
    fn default() -> Self {
        MapSequence::empty()
    }
}

impl<K, V> From<AHashMap<K, V>> for MapSequence<K, V> {
    fn from(data: AHashMap<K, V>) -> Self {
        MapSequence::new(data)
    }
}

impl<K, V> FromIterator<(K, V)> for MapSequence<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MapSequence::new(iter.into_iter().collect())
    }
}

impl<K, V> Sequencer<K, V> for MapSequence<K, V>
where
    K: Eq + Hash + 'static,
    V: 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn each(&self, visit: &mut VisitFn<'_, K, V>, complete: &mut CompleteFn<'_, K, V>) {
        let mut count = 0;
        for (key, value) in self.data.iter() {
            visit(value, key);
            count += 1;
        }
        complete(count, RawForm::Map(&self.data));
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn raw_form(&self) -> RawForm<'_, K, V> {
        RawForm::Map(&self.data)
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.data.get(key)
    }

    fn add(&mut self, key: K, value: V) {
        self.data.insert(key, value);
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.data.remove(key)
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}
