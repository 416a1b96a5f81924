//! Uniform sequences over list and map backing stores.
//!
//! This crate lets callers iterate, transform (map) and select (filter) over an ordered
//! list or an unordered key-value map through a single interface, without knowing which
//! of the two backs the data.
//!
//! # Core Concepts
//!
//! ## Backing stores
//!
//! [`ListSequence`] owns a `Vec` and addresses elements by position. [`MapSequence`]
//! owns an `AHashMap` and addresses elements by key. Both implement the
//! [`Sequencer`] trait, and both are mutated in place.
//!
//! ## The façade
//!
//! A [`Sequence`] owns exactly one boxed `Sequencer` and is what client code works
//! with. Its key type `K` is `usize` for list-backed sequences.
//!
//! ## Deferred operations
//!
//! [`Sequence::map`] and [`Sequence::filter`] return a [`SequenceOp`]: nothing is
//! executed until its result is requested, and each request executes it again.
//! [`SequenceOp::memoize`] turns it into a [`MemoizedSequenceOp`] that executes once and
//! keeps the result for its whole lifetime. Results are always list-backed.
//!
//! Chaining a further `map`/`filter` onto an operation executes that operation right
//! away; only the newly attached stage is deferred.
//!
//! ## Absence instead of failure
//!
//! A map transform drops an element by returning `None`. A filter predicate keeps an
//! element only if its verdict is `Some(true)` (a plain `bool` converts), so an
//! undecided verdict excludes the element silently. Positional lookups past the end of
//! a list return `None`; positional mutations past the end return an
//! [`immute_common::ErrorKind::IndexOutOfBounds`] error.
//!
//! # Example
//!
//! ```
//! use immute::create_list;
//!
//! let words = create_list(vec!["a", "bb", "ccc"]);
//! let lengths = words.map(|w, _| Some(w.len()), |_, _| {});
//! assert_eq!(lengths.raw_form(), vec![1, 2, 3]);
//! ```

use std::hash::Hash;

use ahash::AHashMap;

pub mod list_sequence;
pub mod map_sequence;
pub mod memoized;
pub mod ops;
pub mod sequence;
pub mod sequence_op;
pub mod sequencer;

pub use list_sequence::ListSequence;
pub use map_sequence::MapSequence;
pub use memoized::MemoizedSequenceOp;
pub use ops::{filter, map};
pub use sequence::Sequence;
pub use sequence_op::{OpKind, SequenceOp};
pub use sequencer::{RawForm, Sequencer};

/// Creates a list-backed [`Sequence`] that takes ownership of `elements`.
pub fn create_list<V: 'static>(elements: Vec<V>) -> Sequence<usize, V> {
    create_list_store(elements).into_sequence()
}

/// Creates a map-backed [`Sequence`] that takes ownership of `entries`.
///
/// ```
/// use ahash::AHashMap;
/// use immute::create_map;
///
/// let entries: AHashMap<i32, &str> = [(1, "sic"), (3, "luc")].into_iter().collect();
/// let seq = create_map(entries);
/// assert_eq!(seq.len(), 2);
///
/// let matches = seq.filter(|v, _| *v == "sic", |_, _| {});
/// assert_eq!(matches.raw_form(), vec!["sic"]);
/// ```
pub fn create_map<K, V>(entries: AHashMap<K, V>) -> Sequence<K, V>
where
    K: Eq + Hash + 'static,
    V: 'static,
{
    create_map_store(entries).into_sequence()
}

/// Creates a bare [`ListSequence`] store, without a façade.
pub fn create_list_store<V>(elements: Vec<V>) -> ListSequence<V> {
    ListSequence::new(elements)
}

/// Creates a bare [`MapSequence`] store, without a façade.
pub fn create_map_store<K, V>(entries: AHashMap<K, V>) -> MapSequence<K, V> {
    MapSequence::new(entries)
}
