//! One-shot caching of a [`SequenceOp`] result.

use std::cell::OnceCell;

use crate::{
    sequence::Sequence,
    sequence_op::{OpKind, Root, SequenceOp},
    sequencer::RawForm,
};

/// A [`SequenceOp`] that executes at most once.
///
/// The first call to [`each`](Self::each) (or any accessor built on it) runs the
/// wrapped operation and stores the result; every later call returns that same
/// sequence. The cache is write-once and is never invalidated.
pub struct MemoizedSequenceOp<'a, K, V, U> {
    op: SequenceOp<'a, K, V, U>,
    cache: OnceCell<Sequence<usize, U>>,
}

impl<'a, K: 'static, V: 'static, U: 'static> MemoizedSequenceOp<'a, K, V, U> {
    pub(crate) fn new(op: SequenceOp<'a, K, V, U>) -> Self {
        MemoizedSequenceOp {
            op,
            cache: OnceCell::new(),
        }
    }

    /// Returns the cached result, executing the wrapped operation on first use.
    pub fn each(&self) -> &Sequence<usize, U> {
        self.cache.get_or_init(|| {
            let result = self.op.each();
            log::trace!(
                "cached {} result with {} elements",
                self.op.kind(),
                result.len()
            );
            result
        })
    }

    pub fn len(&self) -> usize {
        self.each().len()
    }

    pub fn is_empty(&self) -> bool {
        self.each().is_empty()
    }

    /// Returns a borrowed view of the cached result's values.
    pub fn raw_form(&self) -> RawForm<'_, usize, U> {
        self.each().raw_form()
    }

    /// Returns `true` once the wrapped operation has been executed.
    pub fn is_cached(&self) -> bool {
        self.cache.get().is_some()
    }

    pub fn kind(&self) -> OpKind {
        self.op.kind()
    }

    /// Returns `self`: the operation is already memoized, and any cached result is kept.
    pub fn memoize(self) -> Self {
        self
    }

    /// Defers a map over the cached result.
    ///
    /// The new operation borrows the cached sequence, so building it executes the
    /// wrapped operation only if that has not happened yet.
    pub fn map<'s, W, F, C>(&'s self, transform: F, complete: C) -> SequenceOp<'s, usize, U, W>
    where
        W: 'static,
        F: Fn(&U, &usize) -> Option<W> + 's,
        C: Fn(usize, &[W]) + 's,
    {
        SequenceOp::new_map(Root::Borrowed(self.each()), transform, complete)
    }

    /// Defers a filter over the cached result.
    pub fn filter<'s, P, R, C>(&'s self, predicate: P, complete: C) -> SequenceOp<'s, usize, U, U>
    where
        U: Clone,
        P: Fn(&U, &usize) -> R + 's,
        R: Into<Option<bool>>,
        C: Fn(usize, &[U]) + 's,
    {
        SequenceOp::new_filter(Root::Borrowed(self.each()), predicate, complete)
    }
}

impl<K, V, U> std::fmt::Debug for MemoizedSequenceOp<'_, K, V, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoizedSequenceOp")
            .field("op", &self.op)
            .field("cached", &self.cache.get().is_some())
            .finish()
    }
}
