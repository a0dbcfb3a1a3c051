use std::fmt::{self, Debug, Formatter};
use std::iter;

use super::{Iter, QueueFull};

/// A first-in-first-out queue with a capacity fixed at construction, storing its elements in a
/// ring of slots.
///
/// Pushing writes to the slot after the current back, wrapping around to the start of the ring
/// once the end is reached, so no elements are ever moved.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `front` | `O(1)` |
/// | `back` | `O(1)` |
/// | `clear` | `O(n)` |
pub struct CircularQueue<T> {
    pub(crate) slots: Box<[Option<T>]>,
    pub(crate) head: usize,
    pub(crate) len: usize,
}

impl<T> CircularQueue<T> {
    /// Creates an empty CircularQueue able to hold `cap` elements.
    ///
    /// # Examples
    /// ```
    /// # use exercise_lib::collections::circ::CircularQueue;
    /// let queue: CircularQueue<i32> = CircularQueue::with_cap(3);
    /// assert_eq!(queue.capacity(), 3);
    /// assert!(queue.is_empty());
    /// ```
    pub fn with_cap(cap: usize) -> CircularQueue<T> {
        CircularQueue {
            slots: iter::repeat_with(|| None).take(cap).collect(),
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Maps a logical position (0 being the front) to its slot in the ring. Only valid for a
    /// non-zero capacity.
    fn slot_index(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity()
    }

    /// Appends `value` to the back of the queue.
    ///
    /// # Errors
    /// Returns [`QueueFull`] containing `value` if the queue is already at capacity.
    ///
    /// # Examples
    /// ```
    /// # use exercise_lib::collections::circ::CircularQueue;
    /// let mut queue = CircularQueue::with_cap(1);
    /// assert!(queue.push(1).is_ok());
    /// assert_eq!(queue.push(2).map_err(|e| e.into_inner()), Err(2));
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), QueueFull<T>> {
        if self.is_full() {
            return Err(QueueFull(value));
        }
        let index = self.slot_index(self.len);
        self.slots[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at the front of the queue, or [`None`] if it is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = self.slot_index(1);
        self.len -= 1;
        value
    }

    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_mut()
    }

    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.slot_index(self.len - 1)].as_ref()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let index = self.slot_index(self.len - 1);
        self.slots[index].as_mut()
    }

    /// Drops every element in the queue, keeping its capacity.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.len = 0;
    }

    /// Returns the raw ring of slots, in storage order rather than queue order. Slots that don't
    /// hold an element are [`None`].
    pub fn as_slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Returns an iterator over the queue's elements from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Debug> Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
