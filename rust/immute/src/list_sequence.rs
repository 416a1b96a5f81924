//! A backing store holding an ordered list of values.

use std::any::Any;

use immute_common::{Result, verify_index};

use crate::{
    sequence::Sequence,
    sequencer::{CompleteFn, RawForm, Sequencer, VisitFn},
};

/// A backing store holding an ordered list of values.
///
/// `ListSequence` owns the `Vec` it was created from and mutates it in place.
/// Elements are addressed by their 0-based position, which is also the key passed to
/// visit callbacks during iteration.
///
/// Positional lookups past the end return `None`; positional mutations past the end
/// return an `IndexOutOfBounds` error and leave the list untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSequence<V> {
    data: Vec<V>,
}

impl<V> ListSequence<V> {
    /// Creates a `ListSequence` that takes ownership of `data`.
    pub fn new(data: Vec<V>) -> ListSequence<V> {
        ListSequence { data }
    }

    /// Creates an empty `ListSequence`.
    pub fn empty() -> ListSequence<V> {
        ListSequence { data: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Appends a value to the end of the list.
    pub fn push(&mut self, value: V) {
        self.data.push(value);
    }

    /// Returns the value at `index`, or `None` if `index` is past the end.
    pub fn get(&self, index: usize) -> Option<&V> {
        self.data.get(index)
    }

    /// Replaces the value at `index` and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns an `IndexOutOfBounds` error if `index` is past the end.
    pub fn set(&mut self, index: usize, value: V) -> Result<V> {
        verify_index!(index, self.data.len());
        Ok(std::mem::replace(&mut self.data[index], value))
    }

    /// Removes the value at `index`, shifting all following elements to the left.
    ///
    /// # Errors
    ///
    /// Returns an `IndexOutOfBounds` error if `index` is past the end.
    pub fn remove(&mut self, index: usize) -> Result<V> {
        verify_index!(index, self.data.len());
        Ok(self.data.remove(index))
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the values as a slice.
    pub fn values(&self) -> &[V] {
        &self.data
    }

    /// Returns a mutable slice of the values.
    pub fn values_mut(&mut self) -> &mut [V] {
        &mut self.data
    }

    /// Consumes the `ListSequence` and returns the underlying `Vec`.
    pub fn into_inner(self) -> Vec<V> {
        self.data
    }
}

impl<V: 'static> ListSequence<V> {
    /// Wraps this store in a [`Sequence`] façade.
    pub fn into_sequence(self) -> Sequence<usize, V> {
        Sequence::new(self)
    }
}

impl<V> From<Vec<V>> for ListSequence<V> {
    fn from(data: Vec<V>) -> Self {
        ListSequence::new(data)
    }
}

impl<V> FromIterator<V> for ListSequence<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        ListSequence::new(iter.into_iter().collect())
    }
}

impl<V: 'static> Sequencer<usize, V> for ListSequence<V> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn each(&self, visit: &mut VisitFn<'_, usize, V>, complete: &mut CompleteFn<'_, usize, V>) {
        let mut count = 0;
        for (index, value) in self.data.iter().enumerate() {
            visit(value, &index);
            count += 1;
        }
        complete(count, RawForm::List(&self.data));
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn raw_form(&self) -> RawForm<'_, usize, V> {
        RawForm::List(&self.data)
    }

    fn get(&self, key: &usize) -> Option<&V> {
        self.data.get(*key)
    }

    fn add(&mut self, _key: usize, value: V) {
        self.data.push(value);
    }

    fn remove(&mut self, key: &usize) -> Option<V> {
        ListSequence::remove(self, *key).ok()
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}
