//! This module defines the capability abstraction shared by all backing stores.
//!
//! It provides the [`Sequencer`] trait, implemented by
//! [`ListSequence`](crate::list_sequence::ListSequence) and
//! [`MapSequence`](crate::map_sequence::MapSequence), and the [`RawForm`] view
//! through which a store exposes its live container. The [`Sequence`](crate::sequence::Sequence)
//! façade holds a boxed `Sequencer`, which is what lets client code work with either
//! store without knowing which one it has.

use std::any::Any;

use ahash::AHashMap;

/// Per-element callback passed to [`Sequencer::each`].
///
/// Receives the value and its key: the 0-based position for list stores, the map
/// key for map stores.
pub type VisitFn<'f, K, V> = dyn FnMut(&V, &K) + 'f;

/// Completion callback passed to [`Sequencer::each`].
///
/// Invoked exactly once after the last element has been visited, with the number of
/// visited elements and the raw form of the store that was iterated.
pub type CompleteFn<'f, K, V> = dyn for<'r> FnMut(usize, RawForm<'r, K, V>) + 'f;

/// Trait representing a backing store that can be iterated as a sequence.
///
/// `K` is the type used to address elements (`usize` for lists), `V` is the element
/// type. Implementors must uphold one invariant: [`len()`](Self::len) equals the
/// number of elements visited by a full [`each()`](Self::each) call, which is also the
/// count handed to the completion callback.
pub trait Sequencer<K, V>: 'static {
    /// Returns a reference to this store as a type-erased `Any` trait object.
    ///
    /// Enables dynamic downcasting to the concrete store type.
    fn as_any(&self) -> &dyn Any;

    /// Mutable counterpart of [`as_any`](Self::as_any).
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Converts the boxed store into a boxed `Any`, for by-value downcasting.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Visits every element currently present in the store exactly once, then calls
    /// `complete` once with the visit count.
    ///
    /// Lists are visited in storage order. Map visitation order is unspecified.
    fn each(&self, visit: &mut VisitFn<'_, K, V>, complete: &mut CompleteFn<'_, K, V>);

    /// Returns the number of elements in the store.
    fn len(&self) -> usize;

    /// Returns `true` if the store has no elements.
    fn is_empty(&self) -> bool;

    /// Returns a borrowed view of the live backing container.
    fn raw_form(&self) -> RawForm<'_, K, V>;

    /// Returns the value stored under `key`, or `None` if there is none.
    fn get(&self, key: &K) -> Option<&V>;

    /// Inserts `value`. List stores append it and ignore `key`; map stores insert
    /// it under `key`, replacing any previous value.
    fn add(&mut self, key: K, value: V);

    /// Removes and returns the value stored under `key`, or `None` if there is none.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes every element from the store.
    fn clear(&mut self);
}

/// Borrowed view of the container that backs a sequence.
///
/// This is the live storage, not a copy: it reflects the store's state at the time
/// of the borrow.
pub enum RawForm<'a, K, V> {
    /// Elements of a list store, in storage order.
    List(&'a [V]),
    /// Entries of a map store.
    Map(&'a AHashMap<K, V>),
}

impl<'a, K, V> RawForm<'a, K, V> {
    /// Returns the number of elements in the viewed container.
    pub fn len(&self) -> usize {
        match self {
            RawForm::List(values) => values.len(),
            RawForm::Map(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the list elements, or `None` if this is a map view.
    pub fn as_list(&self) -> Option<&'a [V]> {
        match *self {
            RawForm::List(values) => Some(values),
            RawForm::Map(_) => None,
        }
    }

    /// Returns the map entries, or `None` if this is a list view.
    pub fn as_map(&self) -> Option<&'a AHashMap<K, V>> {
        match *self {
            RawForm::List(_) => None,
            RawForm::Map(entries) => Some(entries),
        }
    }
}

impl<K, V> Clone for RawForm<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for RawForm<'_, K, V> {}

impl<K, V> std::fmt::Debug for RawForm<'_, K, V>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawForm::List(values) => f.debug_tuple("List").field(values).finish(),
            RawForm::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
        }
    }
}
