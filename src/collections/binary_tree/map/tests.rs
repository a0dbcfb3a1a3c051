#![cfg(test)]

use super::*;

/// Walks the tree, checking BST ordering, and returns the number of nodes found. Uses an explicit
/// stack so degenerate trees can be checked too.
fn check_ordering<K: Ord, V>(root: &Branch<K, V>) -> usize {
    let mut count = 0;
    let mut stack = vec![(root, None::<&K>, None::<&K>)];
    while let Some((branch, lower, upper)) = stack.pop() {
        let Some(node) = branch.0.as_deref() else {
            continue;
        };
        if let Some(lower) = lower {
            assert!(node.key > *lower, "Right subtree keys should be greater than their ancestor.");
        }
        if let Some(upper) = upper {
            assert!(node.key < *upper, "Left subtree keys should be less than their ancestor.");
        }
        count += 1;
        stack.push((&node.left, lower, Some(&node.key)));
        stack.push((&node.right, Some(&node.key), upper));
    }
    count
}

fn assert_valid<K: Ord, V>(map: &OrderedMap<K, V>) {
    assert_eq!(
        check_ordering(&map.root),
        map.len(),
        "The length counter should match the number of nodes in the tree."
    );
}

fn keys_of(map: &OrderedMap<i32, i32>) -> Vec<i32> {
    let mut keys = Vec::new();
    map.for_each(|key, _| keys.push(*key));
    keys
}

#[test]
fn test_scenario() {
    let mut map = OrderedMap::new();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());

    for key in [10, 5, 15, 2, 4, 12, 14] {
        map.insert(key, key);
    }
    assert_valid(&map);

    assert_eq!(map.len(), 7);
    assert!(map.contains(&4));
    assert!(map.contains(&12));
    assert!(!map.contains(&3));
    assert!(!map.contains(&13));
    assert_eq!(keys_of(&map), [2, 4, 5, 10, 12, 14, 15]);

    map.remove(&15);
    map.remove(&14);
    map.remove(&2);
    assert_valid(&map);

    assert_eq!(map.len(), 4);
    assert!(map.contains(&4));
    assert!(map.contains(&12));
    assert!(!map.contains(&2));
    assert!(!map.contains(&14));
    assert_eq!(keys_of(&map), [4, 5, 10, 12]);
}

#[test]
fn test_insert_existing_key() {
    let mut map = OrderedMap::new();
    assert_eq!(map.insert(1, 10), None);
    assert_eq!(map.insert(1, 11), Some(10), "The replaced value should be returned.");
    assert_eq!(map.len(), 1, "Replacing a value shouldn't change the length.");
    assert_eq!(map.get(&1), Some(&11));
    assert_valid(&map);
}

#[test]
fn test_remove_absent_key() {
    let mut map = OrderedMap::from_iter([(1, 1), (2, 2)]);
    assert_eq!(map.remove(&3), None);
    assert_eq!(map.len(), 2, "Removing an absent key should be a no-op.");

    assert_eq!(map.remove(&1), Some(1));
    assert_eq!(map.remove(&1), None);
    assert_eq!(map.len(), 1, "Removing the same key twice should only count once.");

    let mut empty = OrderedMap::<i32, i32>::new();
    assert_eq!(empty.remove(&0), None);
    assert_eq!(empty.len(), 0);
}

#[test]
fn test_remove_two_children() {
    //        50
    //      /    \
    //    30      70
    //   /  \    /  \
    //  20  40  60  80
    //            \
    //            65
    let mut map = OrderedMap::from_iter(
        [50, 30, 70, 20, 40, 60, 80, 65].map(|k| (k, k * 10))
    );

    assert_eq!(map.remove_entry(&50), Some((50, 500)));
    assert_valid(&map);
    let root = map.root.0.as_ref().map(|n| n.key);
    assert_eq!(root, Some(60), "The in-order successor should take the root's place.");
    assert_eq!(map.get(&60), Some(&600), "The successor should keep its own value.");
    assert_eq!(map.get(&65), Some(&650), "The successor's right child should be kept.");

    assert_eq!(map.remove(&30), Some(300));
    assert_valid(&map);
    assert_eq!(
        map.keys().copied().collect::<Vec<_>>(),
        [20, 40, 60, 65, 70, 80],
        "No entries other than the removed ones should be lost."
    );
}

#[test]
fn test_remove_one_child() {
    let mut map = OrderedMap::from_iter([(5, ()), (3, ()), (1, ()), (8, ()), (9, ())]);

    map.remove(&3);
    assert_valid(&map);
    assert!(map.contains(&1), "A single left child should be spliced into the parent.");

    map.remove(&8);
    assert_valid(&map);
    assert!(map.contains(&9), "A single right child should be spliced into the parent.");

    map.remove(&5);
    assert_valid(&map);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 9]);
}

#[test]
fn test_sorted_insertion() {
    const LEN: i32 = 20_000;

    let mut map = OrderedMap::new();
    for key in 0..LEN {
        map.insert(key, key * 2);
    }
    assert_eq!(map.len(), LEN as usize);
    assert_eq!(map.first_entry(), Some((&0, &0)));
    assert_eq!(map.last_entry(), Some((&(LEN - 1), &(LEN * 2 - 2))));
    assert!(map.contains(&(LEN - 1)));
    assert_eq!(map.insert(LEN - 1, 0), Some(LEN * 2 - 2));

    for key in (0..LEN).step_by(2) {
        assert_eq!(map.remove(&key), Some(key * 2));
    }
    assert_valid(&map);
    assert!(map.keys().copied().eq((1..LEN).step_by(2)));
}

/// Builds a map whose tree is a single chain of right children, keys `0..len` from the root down.
fn right_spine(len: i32) -> OrderedMap<i32, i32> {
    let mut root = Branch::empty();
    for key in (0..len).rev() {
        root = Branch(Some(Box::new(Node {
            left: Branch::empty(),
            right: root,
            key,
            value: key,
        })));
    }
    OrderedMap { root, len: len as usize }
}

/// Builds a chain of left children holding `keys`, the last key at the root.
fn left_spine(keys: impl Iterator<Item = i32>) -> (Branch<i32, i32>, usize) {
    let mut root = Branch::empty();
    let mut len = 0;
    for key in keys {
        root = Branch(Some(Box::new(Node {
            left: root,
            right: Branch::empty(),
            key,
            value: key,
        })));
        len += 1;
    }
    (root, len)
}

#[test]
fn test_deep_tree() {
    const DEPTH: i32 = 200_000;

    let mut map = right_spine(DEPTH);
    assert!(map.contains(&(DEPTH - 1)));
    assert_eq!(map.last_entry(), Some((&(DEPTH - 1), &(DEPTH - 1))));
    assert_eq!(map.insert(DEPTH, DEPTH), None, "Inserting below the deepest node should work.");
    assert_eq!(map.len(), DEPTH as usize + 1);
    if let Some(value) = map.get_mut(&DEPTH) {
        *value = -1;
    }
    assert_eq!(map.get(&DEPTH), Some(&-1));

    assert_eq!(map.remove(&(DEPTH / 2)), Some(DEPTH / 2), "A deep single-child node should be spliced out.");
    assert_eq!(map.remove(&DEPTH), Some(-1), "The deepest leaf should be removable.");
    assert_eq!(map.take_last_entry(), Some((DEPTH - 1, DEPTH - 1)));
    assert_eq!(map.take_first(), Some(0));
    assert_eq!(map.len(), DEPTH as usize - 3);
    assert_valid(&map);
    assert_eq!(map.iter().count(), map.len());
    assert!(map.keys().copied().eq((1..DEPTH - 1).filter(|&k| k != DEPTH / 2)));

    map.clear();
    assert!(map.is_empty());

    let map = right_spine(DEPTH);
    drop(map);

    let mut iter = right_spine(DEPTH).into_iter();
    assert_eq!(iter.next(), Some((0, 0)));
    assert_eq!(iter.len(), DEPTH as usize - 1);
    drop(iter);
}

#[test]
fn test_deep_successor() {
    const DEPTH: i32 = 200_000;

    // The root has a single left leaf and a right subtree that is a left chain, so the root's
    // successor sits at the bottom of the chain.
    let (right, right_len) = left_spine(1..DEPTH);
    let mut map = OrderedMap {
        root: Branch(Some(Box::new(Node {
            left: Branch(Some(Box::new(Node::leaf(-1, -1)))),
            right,
            key: 0,
            value: 0,
        }))),
        len: right_len + 2,
    };

    assert_eq!(map.remove(&0), Some(0));
    assert_eq!(map.root.0.as_ref().map(|n| n.key), Some(1), "The deep successor should move up.");
    assert_eq!(map.take_first(), Some(-1));
    assert_eq!(map.take_first(), Some(1));
    assert_eq!(map.first(), Some(&2));
    assert_valid(&map);
    assert_eq!(map.len(), DEPTH as usize - 2);

    let (root, len) = left_spine(0..DEPTH);
    let mut map = OrderedMap { root, len };
    assert_eq!(map.remove(&0), Some(0), "The deepest left leaf should be removable.");
    assert_eq!(map.insert(-1, -1), None);
    assert_eq!(map.first_entry(), Some((&-1, &-1)));
    assert!(map.keys().copied().eq((-1..DEPTH).filter(|&k| k != 0)));
}

#[test]
fn test_get_mut() {
    let mut map = OrderedMap::from_iter([(1, 1), (2, 2), (3, 3)]);
    if let Some(value) = map.get_mut(&2) {
        *value = 20;
    }
    assert_eq!(map.get(&2), Some(&20));
    assert_eq!(map.get_mut(&4), None);
}

#[test]
fn test_take_first_and_last() {
    let mut map = OrderedMap::from_iter([4, 2, 6, 1, 3, 5, 7].map(|k| (k, k)));

    assert_eq!(map.take_first_entry(), Some((1, 1)));
    assert_eq!(map.take_last_entry(), Some((7, 7)));
    assert_eq!(map.take_first(), Some(2));
    assert_eq!(map.take_last(), Some(6));
    assert_valid(&map);
    assert_eq!(map.len(), 3);
    assert_eq!(map.first(), Some(&3));
    assert_eq!(map.last(), Some(&5));

    let mut empty = OrderedMap::<i32, i32>::new();
    assert_eq!(empty.take_first_entry(), None);
    assert_eq!(empty.len(), 0);
}

#[test]
fn test_iteration() {
    let map = OrderedMap::from_iter([(3, 'c'), (1, 'a'), (2, 'b')]);

    let iter = map.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(
        iter.collect::<Vec<_>>(),
        [(&1, &'a'), (&2, &'b'), (&3, &'c')]
    );
    assert_eq!(map.values().copied().collect::<String>(), "abc");

    let owned = map.into_iter();
    assert_eq!(owned.len(), 3);
    assert_eq!(owned.collect::<Vec<_>>(), [(1, 'a'), (2, 'b'), (3, 'c')]);
}

#[test]
fn test_clear_and_eq() {
    let mut map = OrderedMap::from_iter([(2, 2), (1, 1)]);
    let other = OrderedMap::from_iter([(1, 1), (2, 2)]);
    assert_eq!(map, other, "Maps with the same entries should be equal regardless of shape.");

    map.clear();
    assert!(map.is_empty());
    assert!(!map.contains(&1));
    assert_ne!(map, other);
    assert_eq!(map, OrderedMap::default());
}

#[test]
fn test_fmt() {
    let map = OrderedMap::from_iter([(2, "b"), (1, "a"), (3, "c")]);
    assert_eq!(format!("{}", map), r#"{1: "a", 2: "b", 3: "c"}"#);

    let debug = format!("{:?}", map);
    assert!(debug.starts_with("OrderedMap { nodes: "));
    assert!(debug.contains("(2: \"b\")"));
    assert!(debug.ends_with("len: 3 }"));
}
