use std::iter::FusedIterator;

use super::CircularQueue;

impl<T> IntoIterator for CircularQueue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// An owned iterator that drains a [`CircularQueue`] from front to back.
pub struct IntoIter<T>(CircularQueue<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a CircularQueue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            queue: self,
            offset: 0,
        }
    }
}

/// A borrowed iterator over the elements of a [`CircularQueue`] from front to back.
pub struct Iter<'a, T> {
    queue: &'a CircularQueue<T>,
    offset: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.queue.len() {
            return None;
        }
        let index = (self.queue.head + self.offset) % self.queue.capacity();
        self.offset += 1;
        self.queue.slots[index].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len() - self.offset;
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
