//! Array-backed binary min-heap used as a priority queue.
//!
//! The element at position `i` has its children at `2i + 1` and `2i + 2`;
//! every parent compares less than or equal to both of its children, so the
//! smallest element is always at position 0.

use std::slice;

/// Priority queue that always yields its smallest element first.
///
/// ```rust
/// use keygraph::heap::PriorityQueue;
///
/// let mut queue: PriorityQueue<_> = [7, 3, 9, 1].into_iter().collect();
/// assert_eq!(Some(&1), queue.peek());
/// assert!(queue.remove(&3));
/// assert_eq!(Some(1), queue.pop());
/// assert_eq!(vec![7, 9], queue.into_sorted_vec());
/// ```
#[derive(Clone, Debug)]
pub struct PriorityQueue<T> {
    data: Vec<T>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        PriorityQueue{data: Vec::new()}
    }
}

#[inline(always)]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

impl<T: Ord> PriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element.
    pub fn push(&mut self, element: T) {
        self.data.push(element);
        self.sift_up(self.data.len() - 1);
    }

    /// Remove and return the smallest element, or `None` if the queue is
    /// empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let smallest = self.data.swap_remove(0);
        self.sift_down(0);
        Some(smallest)
    }

    /// Remove one element equal to `element`, returning whether one was found.
    pub fn remove(&mut self, element: &T) -> bool {
        let Some(pos) = self.data.iter().position(|e| e == element) else {
            return false;
        };
        self.data.swap_remove(pos);
        if pos < self.data.len() {
            // The former last element now sits at `pos` and may belong
            // either above or below it.
            let pos = self.sift_up(pos);
            self.sift_down(pos);
        }
        true
    }

    /// Check whether an element equal to `element` is queued.
    pub fn contains(&self, element: &T) -> bool {
        self.data.contains(element)
    }

    /// Consume the queue, returning its elements in increasing order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(e) = self.pop() {
            sorted.push(e);
        }
        sorted
    }

    /// Move the element at `i` towards the root until its parent is no
    /// larger, returning its final position.
    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 && self.data[parent(i)] > self.data[i] {
            self.data.swap(parent(i), i);
            i = parent(i);
        }
        i
    }

    /// Move the element at `i` towards the leaves until neither child is
    /// smaller.
    fn sift_down(&mut self, mut i: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.data[left] < self.data[smallest] {
                smallest = left;
            }
            if right < len && self.data[right] < self.data[smallest] {
                smallest = right;
            }
            if smallest == i {
                return;
            }
            self.data.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<T> PriorityQueue<T> {
    /// Peek at the smallest element.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterate over the elements in storage (heap) order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consume the queue, returning its backing vector in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = PriorityQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}
