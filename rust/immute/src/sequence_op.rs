//! Deferred map and filter operations.

use std::ops::Deref;

use crate::{
    list_sequence::ListSequence, memoized::MemoizedSequenceOp, ops, sequence::Sequence,
};

/// The algorithm bound to a [`SequenceOp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Map,
    Filter,
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpKind::Map => f.write_str("map"),
            OpKind::Filter => f.write_str("filter"),
        }
    }
}

/// The sequence an operation runs against.
///
/// Operations created from a [`Sequence`] or a [`MemoizedSequenceOp`] borrow it;
/// operations chained onto another operation own the intermediate result.
pub(crate) enum Root<'a, K, V> {
    Borrowed(&'a Sequence<K, V>),
    Owned(Sequence<K, V>),
}

impl<K, V> Deref for Root<'_, K, V> {
    type Target = Sequence<K, V>;

    fn deref(&self) -> &Sequence<K, V> {
        match self {
            Root::Borrowed(sequence) => sequence,
            Root::Owned(sequence) => sequence,
        }
    }
}

impl<'a, K, V> From<&'a Sequence<K, V>> for Root<'a, K, V> {
    fn from(sequence: &'a Sequence<K, V>) -> Self {
        Root::Borrowed(sequence)
    }
}

type Stage<'a, K, V, U> = dyn Fn(&Sequence<K, V>) -> ListSequence<U> + 'a;

/// A map or filter that has been described but not executed.
///
/// A `SequenceOp` binds a root sequence, the algorithm to run, the per-element
/// transform and the completion callback. Nothing runs until the result is requested:
/// every call to [`each`](Self::each), [`len`](Self::len) or [`raw_form`](Self::raw_form)
/// executes the full algorithm again, invoking the transform and completion callbacks
/// each time. Use [`memoize`](Self::memoize) to run it at most once.
///
/// Chaining with [`map`](Self::map) or [`filter`](Self::filter) executes this
/// operation immediately and defers only the new stage.
pub struct SequenceOp<'a, K, V, U> {
    root: Root<'a, K, V>,
    kind: OpKind,
    stage: Box<Stage<'a, K, V, U>>,
}

impl<'a, K: 'static, V: 'static, U: 'static> SequenceOp<'a, K, V, U> {
    pub(crate) fn new_map<F, C>(root: Root<'a, K, V>, transform: F, complete: C) -> Self
    where
        F: Fn(&V, &K) -> Option<U> + 'a,
        C: Fn(usize, &[U]) + 'a,
    {
        SequenceOp {
            root,
            kind: OpKind::Map,
            stage: Box::new(move |sequence: &Sequence<K, V>| {
                ops::map_list(sequence, &transform, &complete)
            }),
        }
    }

    /// Returns the algorithm this operation runs.
    pub fn kind(&self) -> OpKind {
        self.kind
    }

    /// Returns the sequence this operation runs against.
    pub fn root(&self) -> &Sequence<K, V> {
        &self.root
    }

    /// Executes the operation and returns the resulting list-backed sequence.
    pub fn each(&self) -> Sequence<usize, U> {
        self.run().into_sequence()
    }

    /// Executes the operation and returns the number of resulting elements.
    pub fn len(&self) -> usize {
        self.run().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Executes the operation and returns the resulting values.
    pub fn raw_form(&self) -> Vec<U> {
        self.run().into_inner()
    }

    /// Wraps this operation so that it executes at most once.
    pub fn memoize(self) -> MemoizedSequenceOp<'a, K, V, U> {
        MemoizedSequenceOp::new(self)
    }

    /// Executes this operation now and defers a map over its result.
    pub fn map<'b, W, F, C>(&self, transform: F, complete: C) -> SequenceOp<'b, usize, U, W>
    where
        W: 'static,
        F: Fn(&U, &usize) -> Option<W> + 'b,
        C: Fn(usize, &[W]) + 'b,
    {
        SequenceOp::new_map(Root::Owned(self.each()), transform, complete)
    }

    /// Executes this operation now and defers a filter over its result.
    pub fn filter<'b, P, R, C>(&self, predicate: P, complete: C) -> SequenceOp<'b, usize, U, U>
    where
        U: Clone,
        P: Fn(&U, &usize) -> R + 'b,
        R: Into<Option<bool>>,
        C: Fn(usize, &[U]) + 'b,
    {
        SequenceOp::new_filter(Root::Owned(self.each()), predicate, complete)
    }

    fn run(&self) -> ListSequence<U> {
        log::trace!("running {} over {} elements", self.kind, self.root.len());
        (self.stage)(self.root())
    }
}

impl<'a, K: 'static, V: Clone + 'static> SequenceOp<'a, K, V, V> {
    pub(crate) fn new_filter<P, R, C>(root: Root<'a, K, V>, predicate: P, complete: C) -> Self
    where
        P: Fn(&V, &K) -> R + 'a,
        R: Into<Option<bool>>,
        C: Fn(usize, &[V]) + 'a,
    {
        SequenceOp {
            root,
            kind: OpKind::Filter,
            stage: Box::new(move |sequence: &Sequence<K, V>| {
                ops::filter_list(sequence, &predicate, &complete)
            }),
        }
    }
}

impl<K, V, U> std::fmt::Debug for SequenceOp<'_, K, V, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceOp")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
