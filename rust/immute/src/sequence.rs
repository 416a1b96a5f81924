//! The [`Sequence`] façade: a single entry point over any backing store.

use crate::{
    ops,
    sequence_op::SequenceOp,
    sequencer::{RawForm, Sequencer},
};

/// A handle over exactly one backing store.
///
/// All client interaction goes through `Sequence`, which delegates to the store it
/// owns without revealing whether that is a list or a map. `K` is the key type passed
/// to callbacks (`usize` for list-backed sequences).
///
/// [`map`](Self::map) and [`filter`](Self::filter) do not run anything: they return a
/// [`SequenceOp`] that borrows this sequence as its root and executes on demand.
pub struct Sequence<K, V> {
    store: Box<dyn Sequencer<K, V>>,
}

impl<K: 'static, V: 'static> Sequence<K, V> {
    /// Creates a `Sequence` owning `store`.
    pub fn new(store: impl Sequencer<K, V>) -> Sequence<K, V> {
        Sequence {
            store: Box::new(store),
        }
    }

    /// Creates a `Sequence` from an already boxed store.
    pub fn from_boxed(store: Box<dyn Sequencer<K, V>>) -> Sequence<K, V> {
        Sequence { store }
    }

    /// Visits every element, then calls `complete` once with the number of visited
    /// elements and the raw form of the store.
    pub fn each<F, C>(&self, mut visit: F, complete: C)
    where
        F: FnMut(&V, &K),
        C: FnOnce(usize, RawForm<'_, K, V>),
    {
        let mut complete = Some(complete);
        self.store.each(&mut visit, &mut |count, raw| {
            if let Some(complete) = complete.take() {
                complete(count, raw);
            }
        });
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns a borrowed view of the live backing container.
    pub fn raw_form(&self) -> RawForm<'_, K, V> {
        self.store.raw_form()
    }

    /// Returns the value stored under `key` (a position for list-backed sequences).
    pub fn get(&self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    /// Inserts `value` into the backing store.
    ///
    /// List-backed sequences append `value` and ignore `key`. Map-backed sequences
    /// store `value` under `key`, replacing any previous value.
    pub fn add(&mut self, key: K, value: V) {
        self.store.add(key, value);
    }

    /// Removes and returns the value stored under `key`, or `None` if there is none.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.store.remove(key)
    }

    /// Removes every element from the backing store.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Returns the backing store as `S`, or `None` if it is a different store type.
    pub fn downcast_ref<S: Sequencer<K, V>>(&self) -> Option<&S> {
        self.store.as_any().downcast_ref::<S>()
    }

    /// Mutable counterpart of [`downcast_ref`](Self::downcast_ref).
    pub fn downcast_mut<S: Sequencer<K, V>>(&mut self) -> Option<&mut S> {
        self.store.as_any_mut().downcast_mut::<S>()
    }

    /// Consumes the façade and returns the backing store as `S`.
    ///
    /// Returns the façade unchanged if the store is of a different type.
    pub fn into_store<S: Sequencer<K, V>>(self) -> Result<S, Sequence<K, V>> {
        if !self.store.as_any().is::<S>() {
            return Err(self);
        }
        match self.store.into_any().downcast::<S>() {
            Ok(store) => Ok(*store),
            Err(_) => unreachable!("store type was checked above"),
        }
    }

    /// Defers a map over this sequence.
    ///
    /// `transform` returns `None` to drop an element from the output. `complete` is
    /// called with the length of this sequence and the output values.
    pub fn map<'a, U, F, C>(&'a self, transform: F, complete: C) -> SequenceOp<'a, K, V, U>
    where
        U: 'static,
        F: Fn(&V, &K) -> Option<U> + 'a,
        C: Fn(usize, &[U]) + 'a,
    {
        SequenceOp::new_map(self.into(), transform, complete)
    }

    /// Defers a filter over this sequence.
    ///
    /// Elements for which `predicate` yields anything other than `Some(true)` are
    /// excluded. `complete` is called with the number of matches and the matched values.
    pub fn filter<'a, P, R, C>(&'a self, predicate: P, complete: C) -> SequenceOp<'a, K, V, V>
    where
        V: Clone,
        P: Fn(&V, &K) -> R + 'a,
        R: Into<Option<bool>>,
        C: Fn(usize, &[V]) + 'a,
    {
        SequenceOp::new_filter(self.into(), predicate, complete)
    }

    /// Runs a map immediately. See [`ops::map`].
    pub fn map_now<U, F, C>(&self, transform: F, complete: C) -> Sequence<usize, U>
    where
        U: 'static,
        F: FnMut(&V, &K) -> Option<U>,
        C: FnOnce(usize, &[U]),
    {
        ops::map(self, transform, complete)
    }

    /// Runs a filter immediately. See [`ops::filter`].
    pub fn filter_now<P, R, C>(&self, predicate: P, complete: C) -> Sequence<usize, V>
    where
        V: Clone,
        P: FnMut(&V, &K) -> R,
        R: Into<Option<bool>>,
        C: FnOnce(usize, &[V]),
    {
        ops::filter(self, predicate, complete)
    }
}

impl<K, V> std::fmt::Debug for Sequence<K, V>
where
    K: std::fmt::Debug + 'static,
    V: std::fmt::Debug + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequence")
            .field("store", &self.store.raw_form())
            .finish()
    }
}
