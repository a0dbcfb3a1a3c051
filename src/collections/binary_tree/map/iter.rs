use std::iter::FusedIterator;

use super::{Branch, Node, OrderedMap};

impl<K: Ord, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = IntoIter {
            stack: Vec::new(),
            len: self.len,
        };
        iter.descend_left(self.root);
        iter
    }
}

/// An owned iterator over the entries of an [`OrderedMap`], in ascending key order.
pub struct IntoIter<K: Ord, V> {
    stack: Vec<Box<Node<K, V>>>,
    len: usize,
}

impl<K: Ord, V> IntoIter<K, V> {
    fn descend_left(&mut self, mut branch: Branch<K, V>) {
        let mut current = branch.0.take();
        while let Some(mut node) = current {
            current = node.left.0.take();
            self.stack.push(node);
        }
    }
}

impl<K: Ord, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.descend_left(Branch(node.right.0.take()));
        self.len -= 1;
        Some(node.into_tuple())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K: Ord, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K: Ord, V> FusedIterator for IntoIter<K, V> {}

impl<'a, K: Ord, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            stack: Vec::new(),
            len: self.len,
        };
        iter.descend_left(&self.root);
        iter
    }
}

/// A borrowed iterator over the entries of an [`OrderedMap`], in ascending key order.
///
/// The traversal keeps an explicit stack of the ancestors still to be visited rather than
/// recursing, so it holds at most `h` references at a time.
pub struct Iter<'a, K: Ord, V> {
    stack: Vec<&'a Node<K, V>>,
    len: usize,
}

impl<'a, K: Ord, V> Iter<'a, K, V> {
    fn descend_left(&mut self, branch: &'a Branch<K, V>) {
        let mut current = branch.0.as_deref();
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.0.as_deref();
        }
    }
}

impl<'a, K: Ord, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(&node.right);
        self.len -= 1;
        Some(node.tuple())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K: Ord, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K: Ord, V> FusedIterator for Iter<'a, K, V> {}

impl<'a, K: Ord, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            stack: self.stack.clone(),
            len: self.len,
        }
    }
}

pub struct Keys<'a, K: Ord, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K: Ord, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K: Ord, V> ExactSizeIterator for Keys<'a, K, V> {}

impl<'a, K: Ord, V> FusedIterator for Keys<'a, K, V> {}

pub struct Values<'a, K: Ord, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K: Ord, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K: Ord, V> ExactSizeIterator for Values<'a, K, V> {}

impl<'a, K: Ord, V> FusedIterator for Values<'a, K, V> {}
