use std::cell::Cell;

use ahash::AHashMap;
use immute::{
    MapSequence, OpKind, Sequence, create_list, create_list_store, create_map, create_map_store,
};

fn random_list(len: usize) -> Vec<i64> {
    (0..len).map(|_| fastrand::i64(-1000..1000)).collect()
}

fn random_lists() -> Vec<Vec<i64>> {
    fastrand::seed(2985745485);
    (0..40).map(|_| random_list(fastrand::usize(0..64))).collect()
}

#[test]
fn test_map_sequence_scenario() {
    let entries: AHashMap<i32, &str> = [(1, "sic"), (3, "luc")].into_iter().collect();
    let seq = create_map(entries);
    assert_eq!(seq.len(), 2);

    let filtered = seq.filter(|v, _| *v == "sic", |_, _| {});
    let result = filtered.each();
    assert_eq!(result.len(), 1);
    assert_eq!(result.raw_form().as_list(), Some(&["sic"][..]));
}

#[test]
fn test_list_lengths_scenario() {
    let seq = create_list(vec!["a", "bb", "ccc"]);
    let lengths = seq.map(|v, _| Some(v.len()), |_, _| {});
    assert_eq!(lengths.raw_form(), vec![1, 2, 3]);
}

#[test]
fn test_empty_list_scenario() {
    let seq = create_list(Vec::<String>::new());
    let calls = Cell::new(0);
    let counts = Cell::new(usize::MAX);

    let mapped = seq.map(
        |v, _| Some(v.clone()),
        |count, _| {
            calls.set(calls.get() + 1);
            counts.set(count);
        },
    );
    assert_eq!(mapped.each().len(), 0);
    assert_eq!(calls.get(), 1);
    assert_eq!(counts.get(), 0);

    calls.set(0);
    counts.set(usize::MAX);
    let filtered = seq.filter(
        |_, _| true,
        |count, _| {
            calls.set(calls.get() + 1);
            counts.set(count);
        },
    );
    assert_eq!(filtered.each().len(), 0);
    assert_eq!(calls.get(), 1);
    assert_eq!(counts.get(), 0);
}

#[test]
fn test_length_matches_construction() {
    for list in random_lists() {
        let len = list.len();
        let seq = create_list(list);
        assert_eq!(seq.len(), len);

        let mut visited = 0;
        let mut reported = None;
        seq.each(|_, _| visited += 1, |count, _| reported = Some(count));
        assert_eq!(visited, len);
        assert_eq!(reported, Some(len));
    }
}

#[test]
fn test_length_after_pass_equals_retained() {
    for list in random_lists() {
        let positives = list.iter().filter(|v| **v > 0).count();
        let seq = create_list(list);

        let retained = Cell::new(0);
        let filtered = seq.filter(|v, _| *v > 0, |count, _| retained.set(count));
        assert_eq!(filtered.len(), positives);
        assert_eq!(retained.get(), positives);

        let kept = Cell::new(0);
        let mapped = seq.map(
            |v, _| (*v > 0).then_some(*v),
            |_, values| kept.set(values.len()),
        );
        assert_eq!(mapped.len(), positives);
        assert_eq!(kept.get(), positives);
    }
}

#[test]
fn test_accept_all_and_identity_preserve_list() {
    for list in random_lists() {
        let expected = list.clone();
        let seq = create_list(list);
        assert_eq!(seq.filter(|_, _| true, |_, _| {}).raw_form(), expected);
        assert_eq!(seq.map(|v, _| Some(*v), |_, _| {}).raw_form(), expected);
    }
}

#[test]
fn test_reject_all_and_drop_all_are_empty() {
    for list in random_lists() {
        let seq = create_list(list);
        assert!(seq.filter(|_, _| false, |_, _| {}).is_empty());
        assert!(seq.map(|_, _| None::<i64>, |_, _| {}).is_empty());
        assert!(seq.filter(|_, _| None::<bool>, |_, _| {}).is_empty());
    }
}

#[test]
fn test_accept_all_preserves_map_elements() {
    let entries: AHashMap<u32, String> = (0..25).map(|i| (i, format!("v{i}"))).collect();
    let mut expected: Vec<String> = entries.values().cloned().collect();
    expected.sort();

    let seq = create_map(entries);
    let mut filtered = seq.filter(|_, _| true, |_, _| {}).raw_form();
    filtered.sort();
    assert_eq!(filtered, expected);

    let mut mapped = seq.map(|v, _| Some(v.clone()), |_, _| {}).raw_form();
    mapped.sort();
    assert_eq!(mapped, expected);
}

#[test]
fn test_map_completion_reports_source_length() {
    let seq = create_list(vec![1, 2, 3, 4, 5, 6]);
    let reported = Cell::new((0, 0));
    let op = seq.map(
        |v, _| (v % 3 == 0).then_some(*v),
        |count, values| reported.set((count, values.len())),
    );
    assert_eq!(op.raw_form(), vec![3, 6]);
    assert_eq!(reported.get(), (6, 2));
}

#[test]
fn test_memoized_runs_transform_once() {
    let seq = create_list(vec!["x", "yy"]);
    let calls = Cell::new(0);
    let memo = seq
        .map(
            |v, _| {
                calls.set(calls.get() + 1);
                Some(v.to_uppercase())
            },
            |_, _| {},
        )
        .memoize();

    let first: *const Sequence<usize, String> = memo.each();
    let len = memo.len();
    let second: *const Sequence<usize, String> = memo.each();
    assert_eq!(first, second);
    assert_eq!(len, 2);
    assert_eq!(calls.get(), 2);
    assert_eq!(memo.kind(), OpKind::Map);
}

#[test]
fn test_memoized_single_element_counts_one_call() {
    let seq = create_list(vec![7]);
    let calls = Cell::new(0);
    let memo = seq
        .filter(
            |_, _| {
                calls.set(calls.get() + 1);
                true
            },
            |_, _| {},
        )
        .memoize();
    assert_eq!(memo.len(), 1);
    assert_eq!(memo.len(), 1);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_chained_pipeline() {
    let seq = create_list((1..=10).collect::<Vec<u32>>());
    let op = seq
        .filter(|v, _| v % 2 == 0, |_, _| {})
        .map(|v, _| Some(v * v), |_, _| {})
        .filter(|v, _| *v > 10, |_, _| {});
    assert_eq!(op.kind(), OpKind::Filter);
    assert_eq!(op.raw_form(), vec![16, 36, 64, 100]);
}

#[test]
fn test_store_level_access() {
    let mut list = create_list_store(vec![1, 2, 3]);
    list.push(4);
    assert_eq!(list.set(0, 10).unwrap(), 1);
    assert!(list.set(9, 0).is_err());
    assert_eq!(list.remove(1).unwrap(), 2);
    assert_eq!(list.values(), &[10, 3, 4]);

    let seq = list.into_sequence();
    let shifted = seq.map(|v, i| Some(v + *i as i32), |_, _| {});
    assert_eq!(shifted.raw_form(), vec![10, 4, 6]);

    let mut map = create_map_store(AHashMap::new());
    map.set("a", 1);
    map.set("b", 2);
    assert_eq!(map.remove(&"a"), Some(1));
    let seq = map.into_sequence();
    assert_eq!(seq.len(), 1);
    assert!(seq.downcast_ref::<MapSequence<&str, i32>>().is_some());
}

#[test]
fn test_mutation_visible_to_later_ops() {
    let mut seq = create_list(vec![1, 2, 3]);
    assert_eq!(seq.filter(|v, _| *v > 1, |_, _| {}).len(), 2);
    seq.remove(&2);
    assert_eq!(seq.filter(|v, _| *v > 1, |_, _| {}).len(), 1);
    seq.clear();
    assert!(seq.filter(|_, _| true, |_, _| {}).is_empty());
}

#[test]
fn test_add_through_facade_feeds_ops() {
    let mut list = create_list(vec![1, 2]);
    list.add(0, 5);
    assert_eq!(list.filter(|v, _| *v > 1, |_, _| {}).raw_form(), vec![2, 5]);

    let mut map = create_map(AHashMap::new());
    map.add(1, "sic");
    map.add(3, "luc");
    map.add(1, "sic");
    assert_eq!(map.len(), 2);
    let memo = map.filter(|v, _| *v == "sic", |_, _| {}).memoize();
    assert_eq!(memo.raw_form().as_list(), Some(&["sic"][..]));
    assert!(std::ptr::eq(memo.each(), memo.each()));
}
