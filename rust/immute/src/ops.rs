//! The map and filter algorithms.
//!
//! Both iterate their source sequence exactly once and collect their output into a new
//! list-backed sequence, so the result of a map over a map-backed sequence is addressed
//! by position. Output order follows the source's visitation order.

use crate::{list_sequence::ListSequence, sequence::Sequence};

/// Applies `transform` to every element of `sequence`.
///
/// Elements for which `transform` returns `None` are dropped from the output.
/// `complete` is called once, after the last element, with the length of the *source*
/// sequence (not the output) and the output values.
pub fn map<K, V, U, F, C>(
    sequence: &Sequence<K, V>,
    transform: F,
    complete: C,
) -> Sequence<usize, U>
where
    K: 'static,
    V: 'static,
    U: 'static,
    F: FnMut(&V, &K) -> Option<U>,
    C: FnOnce(usize, &[U]),
{
    map_list(sequence, transform, complete).into_sequence()
}

/// Selects the elements of `sequence` accepted by `predicate`.
///
/// The predicate's verdict converts into `Option<bool>`: only `Some(true)` keeps an
/// element, so a predicate may return `None` to signal that it could not judge the
/// element. Kept values are cloned into the output. `complete` is called once with
/// the number of matches and the matched values.
pub fn filter<K, V, P, R, C>(
    sequence: &Sequence<K, V>,
    predicate: P,
    complete: C,
) -> Sequence<usize, V>
where
    K: 'static,
    V: Clone + 'static,
    P: FnMut(&V, &K) -> R,
    R: Into<Option<bool>>,
    C: FnOnce(usize, &[V]),
{
    filter_list(sequence, predicate, complete).into_sequence()
}

pub(crate) fn map_list<K, V, U, F, C>(
    sequence: &Sequence<K, V>,
    mut transform: F,
    complete: C,
) -> ListSequence<U>
where
    K: 'static,
    V: 'static,
    F: FnMut(&V, &K) -> Option<U>,
    C: FnOnce(usize, &[U]),
{
    let mut output = Vec::new();
    let mut source_len = 0;
    sequence.each(
        |value, key| {
            if let Some(converted) = transform(value, key) {
                output.push(converted);
            }
        },
        |count, _| source_len = count,
    );
    complete(source_len, &output);
    ListSequence::new(output)
}

pub(crate) fn filter_list<K, V, P, R, C>(
    sequence: &Sequence<K, V>,
    mut predicate: P,
    complete: C,
) -> ListSequence<V>
where
    K: 'static,
    V: Clone + 'static,
    P: FnMut(&V, &K) -> R,
    R: Into<Option<bool>>,
    C: FnOnce(usize, &[V]),
{
    let mut output = Vec::new();
    let mut matches = 0;
    sequence.each(
        |value, key| {
            let verdict: Option<bool> = predicate(value, key).into();
            if verdict == Some(true) {
                output.push(value.clone());
                matches += 1;
            }
        },
        |_, _| {},
    );
    complete(matches, &output);
    ListSequence::new(output)
}
