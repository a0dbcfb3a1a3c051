use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, Iter, Keys, Values};

/// An ordered map, implemented as an unbalanced binary search tree.
///
/// Entries are kept in ascending key order, so iteration (and [`OrderedMap::for_each`]) always
/// visits keys from smallest to largest.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the OrderedMap.
/// - `h`: The height of the tree, `log2 n` for random insertion order but `n` in the worst case.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `get` | `O(h)` |
/// | `first` / `last` | `O(h)` |
/// | `for_each` | `O(n)` |
///
/// The tree is never rebalanced. Inserting keys in sorted order produces a tree that is
/// effectively a linked list, which is accepted behaviour for this type.
pub struct OrderedMap<K: Ord, V> {
    pub(crate) root: Branch<K, V>,
    pub(crate) len: usize,
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Creates a new, empty OrderedMap.
    ///
    /// # Examples
    /// ```
    /// # use exercise_lib::collections::binary_tree::OrderedMap;
    /// let map: OrderedMap<i32, i32> = OrderedMap::new();
    /// assert_eq!(map.len(), 0);
    /// ```
    pub const fn new() -> OrderedMap<K, V> {
        OrderedMap {
            root: Branch::empty(),
            len: 0,
        }
    }

    /// Returns the number of entries in the map.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `value` under `key`.
    ///
    /// If the key is new, a node is created and the length grows by one. Otherwise the existing
    /// value is replaced in place and returned, leaving the length unchanged.
    ///
    /// # Examples
    /// ```
    /// # use exercise_lib::collections::binary_tree::OrderedMap;
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert(1, "a"), None);
    /// assert_eq!(map.insert(1, "b"), Some("a"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.root.insert(key, value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Removes the entry for `key`, returning it if it was present. Removing an absent key does
    /// nothing.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let result = self.root.remove_entry(key);
        if result.is_some() {
            self.len -= 1;
        }
        result
    }

    /// Removes the entry for `key`, returning its value if it was present.
    ///
    /// # Examples
    /// ```
    /// # use exercise_lib::collections::binary_tree::OrderedMap;
    /// let mut map = OrderedMap::from_iter([(2, 20), (1, 10), (3, 30)]);
    /// assert_eq!(map.remove(&2), Some(20));
    /// assert_eq!(map.remove(&2), None);
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|e| e.1)
    }

    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get_entry(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_entry(key).map(|e| e.1)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get_mut(key)
    }

    /// Returns true if the map contains an entry for `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.contains(key)
    }

    /// Returns the entry with the smallest key.
    pub fn first_entry(&self) -> Option<(&K, &V)> {
        self.root.first_entry()
    }

    pub fn first(&self) -> Option<&V> {
        self.first_entry().map(|e| e.1)
    }

    /// Returns the entry with the largest key.
    pub fn last_entry(&self) -> Option<(&K, &V)> {
        self.root.last_entry()
    }

    pub fn last(&self) -> Option<&V> {
        self.last_entry().map(|e| e.1)
    }

    /// Removes and returns the entry with the smallest key.
    pub fn take_first_entry(&mut self) -> Option<(K, V)> {
        let result = self.root.take_first_entry();
        if result.is_some() {
            self.len -= 1;
        }
        result
    }

    pub fn take_first(&mut self) -> Option<V> {
        self.take_first_entry().map(|e| e.1)
    }

    /// Removes and returns the entry with the largest key.
    pub fn take_last_entry(&mut self) -> Option<(K, V)> {
        let result = self.root.take_last_entry();
        if result.is_some() {
            self.len -= 1;
        }
        result
    }

    pub fn take_last(&mut self) -> Option<V> {
        self.take_last_entry().map(|e| e.1)
    }

    /// Removes every entry from the map.
    pub fn clear(&mut self) {
        self.root = Branch::empty();
        self.len = 0;
    }

    /// Calls `visit` with every entry in ascending key order.
    ///
    /// # Examples
    /// ```
    /// # use exercise_lib::collections::binary_tree::OrderedMap;
    /// let map = OrderedMap::from_iter([(3, 'c'), (1, 'a'), (2, 'b')]);
    /// let mut keys = vec![];
    /// map.for_each(|k, _| keys.push(*k));
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn for_each<F: FnMut(&K, &V)>(&self, mut visit: F) {
        for (key, value) in self.iter() {
            visit(key, value);
        }
    }

    /// Returns an iterator over all entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Ord, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Ord, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Ord + Debug, V: Debug> Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedMap")
            .field("nodes", &format_args!("\n{:?}\n", self.root))
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Ord + Debug, V: Debug> Display for OrderedMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
