//! Fixed-pool FIFO ring
//!
//! Holds the rolling window of platforms. Slots live in one `Vec`; a logical
//! head index marks the front. Recycling the front element mutates its slot in
//! place and advances the head, so the pool never reallocates and iteration
//! order always matches spawn order.

use std::iter::Chain;
use std::slice;

/// FIFO ring over a fixed pool of slots
#[derive(Debug, Clone, PartialEq)]
pub struct RecycleRing<T> {
    slots: Vec<T>,
    /// Physical index of the logical front
    head: usize,
}

impl<T> Default for RecycleRing<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecycleRing<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Physical slot of the `index`-th element in queue order
    #[inline]
    fn physical(&self, index: usize) -> usize {
        (self.head + index) % self.slots.len()
    }

    /// Append to the back
    pub fn enqueue(&mut self, item: T) {
        if self.head == 0 {
            self.slots.push(item);
        } else {
            // The back sits just before the head; slot the item in there
            self.slots.insert(self.head, item);
            self.head += 1;
        }
    }

    /// Remove and return the front, or `None` when empty
    pub fn dequeue(&mut self) -> Option<T> {
        if self.slots.is_empty() {
            return None;
        }
        let item = self.slots.remove(self.head);
        if self.head >= self.slots.len() {
            self.head = 0;
        }
        Some(item)
    }

    /// Move the front element to the back without touching the pool.
    ///
    /// Returns the moved element so the caller can reposition it.
    pub fn recycle_front(&mut self) -> Option<&mut T> {
        if self.slots.is_empty() {
            return None;
        }
        let slot = self.head;
        self.head = (self.head + 1) % self.slots.len();
        self.slots.get_mut(slot)
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }

    /// Element at `index` in queue order
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.slots.len() {
            return None;
        }
        self.slots.get(self.physical(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.slots.len() {
            return None;
        }
        let slot = self.physical(index);
        self.slots.get_mut(slot)
    }

    /// Iterate front to back
    pub fn iter(&self) -> Chain<slice::Iter<'_, T>, slice::Iter<'_, T>> {
        let (wrapped, tail) = self.slots.split_at(self.head);
        tail.iter().chain(wrapped.iter())
    }

    pub fn iter_mut(&mut self) -> Chain<slice::IterMut<'_, T>, slice::IterMut<'_, T>> {
        let (wrapped, tail) = self.slots.split_at_mut(self.head);
        tail.iter_mut().chain(wrapped.iter_mut())
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = 0;
    }
}

impl<T: Clone> RecycleRing<T> {
    /// Value copy of the current order
    pub fn snapshot(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> From<Vec<T>> for RecycleRing<T> {
    fn from(slots: Vec<T>) -> Self {
        Self { slots, head: 0 }
    }
}

impl<T> FromIterator<T> for RecycleRing<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> IntoIterator for &'a RecycleRing<T> {
    type Item = &'a T;
    type IntoIter = Chain<slice::Iter<'a, T>, slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
