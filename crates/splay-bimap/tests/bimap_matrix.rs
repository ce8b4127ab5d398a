use splay_bimap::SplayBimap;

#[test]
fn numbers_from_0_to_100_matrix() {
    let mut map = SplayBimap::<i32, i32>::new();
    for i in 0..=100 {
        let cur = map.insert(i, -i);
        assert!(!cur.is_end());
        assert_eq!(map.len(), (i + 1) as usize);
    }
    for i in 0..=100 {
        assert!(map.erase_left_key(&i));
        assert_eq!(map.len(), (100 - i) as usize);
    }
    assert!(map.is_empty());
}

#[test]
fn numbers_both_directions_from_50_matrix() {
    let mut map = SplayBimap::<i32, i32>::new();
    for i in 1..=100 {
        map.insert(50 + i, 1000 + i);
        map.insert(50 - i, -i);
        assert_eq!(map.len(), ((i - 1) * 2 + 2) as usize);
    }
    for i in 1..=100 {
        assert!(map.erase_left_key(&(50 - i)));
        assert!(map.erase_right_key(&(1000 + i)));
    }
    assert_eq!(map.len(), 0);
}

#[test]
fn insert_conflict_is_a_no_op() {
    let mut map = SplayBimap::<i32, i32>::new();
    assert!(!map.insert(1, 10).is_end());
    assert!(!map.insert(2, 20).is_end());

    // Same left, fresh right.
    assert!(map.insert(1, 30).is_end());
    // Fresh left, same right.
    assert!(map.insert(3, 10).is_end());
    // Both taken.
    assert!(map.insert(2, 20).is_end());

    assert_eq!(map.len(), 2);
    assert_eq!(map.at_left(&1), Ok(&10));
    assert_eq!(map.at_left(&2), Ok(&20));
    assert!(map.find_left(&3).is_end());
}

#[test]
fn lookups_on_both_sides() {
    let mut map = SplayBimap::<i32, String>::new();
    map.insert(1, "one".to_string());
    map.insert(2, "two".to_string());
    map.insert(3, "three".to_string());

    assert_eq!(map.at_left(&2), Ok(&"two".to_string()));
    assert_eq!(map.at_right(&"three".to_string()), Ok(&3));
    assert!(map.at_left(&4).is_err());
    assert!(map.at_right(&"four".to_string()).is_err());

    let cur = map.find_left(&1);
    assert_eq!(map.left_value(cur), &1);
    assert_eq!(map.right_value(cur.flip()), "one");
}

#[test]
fn erase_by_key_reports_removal() {
    let mut map = SplayBimap::<i32, i32>::new();
    map.insert(1, 10);
    map.insert(2, 20);

    assert!(map.erase_left_key(&1));
    assert!(!map.erase_left_key(&1));
    assert!(map.erase_right_key(&20));
    assert!(!map.erase_right_key(&20));
    assert!(map.is_empty());
}

fn next_pseudo(seed: &mut u64) -> i32 {
    *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    ((*seed >> 33) % 101) as i32
}

#[test]
fn random_churn_keeps_sides_consistent_matrix() {
    let mut map = SplayBimap::<i32, i32>::new();
    let mut seed = 0x5EED_u64;

    for _ in 0..=1000 {
        let num = next_pseudo(&mut seed);
        // Pair each left key with a disjoint right key so only the left
        // check can conflict.
        map.insert(num, num + 1000);
    }

    let size1 = map.len();
    assert!(size1 > 4);

    // Every pair is reachable from both sides.
    for (l, r) in map.iter_left().map(|(l, r)| (*l, *r)).collect::<Vec<_>>() {
        assert_eq!(map.at_right(&r), Ok(&l));
        assert_eq!(map.at_left(&l), Ok(&r));
    }

    for _ in 0..=400 {
        let num = next_pseudo(&mut seed);
        let removed = map.erase_left_key(&num);
        // Whatever the left side said, the paired right key is gone too.
        assert_eq!(map.at_right(&(num + 1000)).is_ok(), !removed && map.at_left(&num).is_ok());
    }

    let size2 = map.len();
    assert!(size2 < size1);

    // Traversal counts agree with len on both sides.
    assert_eq!(map.iter_left().count(), map.len());
    assert_eq!(map.iter_right().count(), map.len());
}

#[test]
fn traversals_are_sorted_on_each_side() {
    let mut map = SplayBimap::<i32, i32>::new();
    // Rights deliberately ordered opposite to lefts.
    for i in 0..50 {
        map.insert(i, -i);
    }

    let lefts: Vec<i32> = map.iter_left().map(|(l, _)| *l).collect();
    let mut sorted = lefts.clone();
    sorted.sort();
    assert_eq!(lefts, sorted);

    let rights: Vec<i32> = map.iter_right().map(|(_, r)| *r).collect();
    let mut sorted = rights.clone();
    sorted.sort();
    assert_eq!(rights, sorted);

    // Opposite orders: first left pairs with last right.
    assert_eq!(lefts.first(), Some(&0));
    assert_eq!(rights.last(), Some(&0));
}

#[test]
fn custom_comparators_reverse_the_order() {
    let mut map = SplayBimap::with_comparators(
        |a: &i32, b: &i32| b.cmp(a) as i32,
        |a: &i32, b: &i32| a.cmp(b) as i32,
    );
    map.insert(1, 10);
    map.insert(2, 20);
    map.insert(3, 30);

    let lefts: Vec<i32> = map.iter_left().map(|(l, _)| *l).collect();
    assert_eq!(lefts, vec![3, 2, 1]);
    let rights: Vec<i32> = map.iter_right().map(|(_, r)| *r).collect();
    assert_eq!(rights, vec![10, 20, 30]);
}

#[test]
fn clear_releases_everything() {
    let mut map = SplayBimap::<i32, i32>::new();
    for i in 0..20 {
        map.insert(i, i + 100);
    }
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.iter_left().count(), 0);

    // The map is fully usable afterwards.
    map.insert(5, 50);
    assert_eq!(map.at_left(&5), Ok(&50));
    assert_eq!(map.len(), 1);
}
