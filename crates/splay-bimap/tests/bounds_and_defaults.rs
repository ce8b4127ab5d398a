use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};

use splay_bimap::SplayBimap;

#[test]
fn bound_queries_on_sparse_left_keys() {
    let mut map = SplayBimap::<i32, i32>::new();
    map.insert(1, 100);
    map.insert(3, 300);
    map.insert(5, 500);

    let lb3 = map.lower_bound_left(&3);
    assert_eq!(map.left_value(lb3), &3);

    let lb4 = map.lower_bound_left(&4);
    assert_eq!(map.left_value(lb4), &5);

    let ub3 = map.upper_bound_left(&3);
    assert_eq!(map.left_value(ub3), &5);

    assert!(map.upper_bound_left(&5).is_end());
    assert!(map.lower_bound_left(&6).is_end());

    let lb0 = map.lower_bound_left(&0);
    assert_eq!(map.left_value(lb0), &1);
}

#[test]
fn bound_queries_on_the_right_side() {
    let mut map = SplayBimap::<i32, i32>::new();
    map.insert(1, 100);
    map.insert(3, 300);
    map.insert(5, 500);

    let lb = map.lower_bound_right(&200);
    assert_eq!(map.right_value(lb), &300);
    let ub = map.upper_bound_right(&300);
    assert_eq!(map.right_value(ub), &500);
    assert!(map.upper_bound_right(&500).is_end());

    // Bound cursors flip to the paired left view.
    assert_eq!(map.left_value(lb.flip()), &3);
}

#[test]
fn bounds_on_empty_map_are_end() {
    let mut map = SplayBimap::<i32, i32>::new();
    assert!(map.lower_bound_left(&0).is_end());
    assert!(map.upper_bound_left(&0).is_end());
    assert!(map.lower_bound_right(&0).is_end());
    assert!(map.upper_bound_right(&0).is_end());
}

#[test]
fn at_left_or_default_inserts_the_default() {
    let mut map = SplayBimap::<i32, String>::new();
    map.insert(1, "a".to_string());

    assert_eq!(map.at_left_or_default(1), "a");
    assert_eq!(map.len(), 1);

    // Absent key: (2, "") appears.
    assert_eq!(map.at_left_or_default(2), "");
    assert_eq!(map.len(), 2);
    assert_eq!(map.at_right(&String::new()), Ok(&2));
}

#[test]
fn at_left_or_default_evicts_the_default_holder() {
    let mut map = SplayBimap::<i32, String>::new();
    map.insert(1, "a".to_string());
    map.insert(2, String::new());

    // Key 3 is absent; the default "" is held by 2, which must go.
    assert_eq!(map.at_left_or_default(3), "");
    assert_eq!(map.len(), 2);
    assert!(map.find_left(&2).is_end());
    assert_eq!(map.at_left(&1), Ok(&"a".to_string()));
    assert_eq!(map.at_right(&String::new()), Ok(&3));
}

#[test]
fn at_right_or_default_mirrors_the_left_variant() {
    let mut map = SplayBimap::<i32, String>::new();
    map.insert(0, "zero".to_string());
    map.insert(7, "seven".to_string());

    // "nine" is absent; the default left 0 is held by "zero", which must go.
    assert_eq!(map.at_right_or_default("nine".to_string()), &0);
    assert_eq!(map.len(), 2);
    assert!(map.find_right(&"zero".to_string()).is_end());
    assert_eq!(map.at_left(&0), Ok(&"nine".to_string()));
}

#[test]
fn equality_is_by_equivalence_in_lockstep() {
    let mut a = SplayBimap::<i32, i32>::new();
    let mut b = SplayBimap::<i32, i32>::new();
    assert_eq!(a, b);

    a.insert(1, 10);
    a.insert(2, 20);
    assert_ne!(a, b);

    // Same pairs, different insertion order: equal regardless of shape.
    b.insert(2, 20);
    b.insert(1, 10);
    assert_eq!(a, b);

    b.erase_left_key(&2);
    b.insert(2, 21);
    assert_ne!(a, b);
}

#[test]
fn erase_then_reinsert_round_trips() {
    let mut map = SplayBimap::<i32, i32>::new();
    for i in 0..10 {
        map.insert(i, i * 100);
    }
    let before = map.clone();

    assert!(map.erase_left_key(&4));
    assert_ne!(map, before);
    map.insert(4, 400);
    assert_eq!(map, before);
}

#[test]
fn clone_is_deep_and_ordered() {
    let mut map = SplayBimap::<i32, String>::new();
    map.insert(3, "c".to_string());
    map.insert(1, "a".to_string());
    map.insert(2, "b".to_string());

    let copy = map.clone();
    assert_eq!(copy, map);
    assert_eq!(
        copy.iter_left().map(|(l, _)| *l).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    // Mutating the copy leaves the original alone.
    let mut copy = copy;
    copy.erase_left_key(&1);
    assert_eq!(map.len(), 3);
    assert_eq!(copy.len(), 2);
}

/// Value type whose `Clone` panics once the shared countdown runs out.
#[derive(Debug, PartialEq, PartialOrd)]
struct Brittle(i32);

static CLONES_LEFT: AtomicUsize = AtomicUsize::new(0);

impl Clone for Brittle {
    fn clone(&self) -> Self {
        if CLONES_LEFT.fetch_sub(1, Ordering::SeqCst) == 0 {
            panic!("clone refused");
        }
        Brittle(self.0)
    }
}

#[test]
fn panicking_value_clone_leaves_the_original_intact() {
    let mut map = SplayBimap::<i32, Brittle>::new();
    for i in 0..5 {
        map.insert(i, Brittle(i * 10));
    }

    // Three right values clone fine; the fourth pair blows up mid-copy.
    CLONES_LEFT.store(3, Ordering::SeqCst);
    let result = catch_unwind(AssertUnwindSafe(|| map.clone()));
    assert!(result.is_err());

    // The partial copy was dropped whole; the source is untouched.
    assert_eq!(map.len(), 5);
    let pairs: Vec<(i32, i32)> = map.iter_left().map(|(l, r)| (*l, r.0)).collect();
    assert_eq!(pairs, vec![(0, 0), (1, 10), (2, 20), (3, 30), (4, 40)]);
    assert!(map.erase_left_key(&0));
    assert_eq!(map.len(), 4);
}

#[test]
fn swap_exchanges_contents_in_o1() {
    let mut a = SplayBimap::<i32, i32>::new();
    let mut b = SplayBimap::<i32, i32>::new();
    a.insert(1, 10);
    b.insert(2, 20);
    b.insert(3, 30);

    a.swap(&mut b);
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 1);
    assert_eq!(a.at_left(&3), Ok(&30));
    assert_eq!(b.at_left(&1), Ok(&10));

    // Both maps remain fully operational after the swap.
    a.insert(4, 40);
    b.erase_left_key(&1);
    assert_eq!(a.len(), 3);
    assert!(b.is_empty());
}

#[test]
fn equivalence_comparator_treats_keys_case_insensitively() {
    // Strict weak order where "A" and "a" are equivalent.
    let ci = |a: &String, b: &String| {
        a.to_lowercase().cmp(&b.to_lowercase()) as i32
    };
    let mut map = SplayBimap::with_comparators(ci, |a: &i32, b: &i32| a.cmp(b) as i32);
    map.insert("Apple".to_string(), 1);

    // Equivalent key on the left: rejected as a duplicate.
    assert!(map.insert("apple".to_string(), 2).is_end());
    assert_eq!(map.len(), 1);
    assert_eq!(map.at_left(&"APPLE".to_string()), Ok(&1));
}
