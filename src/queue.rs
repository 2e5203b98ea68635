//! A FIFO queue backed by a circular buffer whose capacity is fixed at
//! construction.
//!
//! Overflow and underflow are surfaced as [`QueueError`]s rather than being
//! swallowed, so a caller that sizes the queue too small finds out
//! immediately instead of silently losing elements.
//!
//! # Examples
//!
//! ```
//! use bstree::queue::{Queue, QueueError};
//!
//! let mut queue = Queue::with_capacity(3);
//!
//! queue.enqueue(1).unwrap();
//! queue.enqueue(2).unwrap();
//! queue.enqueue(3).unwrap();
//!
//! // A fourth element doesn't fit.
//! assert_eq!(queue.enqueue(4), Err(QueueError::Full));
//!
//! // Draining the front makes room again.
//! assert_eq!(queue.dequeue(), Ok(1));
//! assert_eq!(queue.enqueue(4), Ok(()));
//! ```

use thiserror::Error;

/// The recoverable conditions a [`Queue`] can report.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    /// An `enqueue` was attempted on a queue already holding `capacity`
    /// elements.
    #[error("queue is full")]
    Full,
    /// A `dequeue` or `front` was attempted on a queue with no elements.
    #[error("queue is empty")]
    Empty,
}

/// A fixed-capacity FIFO queue. All operations are O(1).
#[derive(Debug)]
pub struct Queue<T> {
    /// The circular backing store. Exactly `count` slots are `Some`, in the
    /// window starting at `front`.
    slots: Vec<Option<T>>,
    count: usize,
    front: usize,
    back: usize,
}

impl<T> Queue<T> {
    /// Creates a queue that holds at most `capacity` elements. The capacity
    /// cannot be changed later; a zero-capacity queue is legal and is both
    /// empty and full.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            count: 0,
            front: 0,
            // The first enqueue wraps this around to index 0.
            back: capacity.saturating_sub(1),
        }
    }

    /// Appends `value` at the back of the queue.
    ///
    /// Returns [`QueueError::Full`] (and drops nothing into the queue) when
    /// the queue is at capacity.
    pub fn enqueue(&mut self, value: T) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Full);
        }

        self.back = (self.back + 1) % self.slots.len();
        self.slots[self.back] = Some(value);
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the element at the front of the queue.
    ///
    /// Returns [`QueueError::Empty`] when there is nothing to remove.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        let value = self.slots[self.front]
            .take()
            .expect("a slot inside the live window holds a value");
        self.front = (self.front + 1) % self.slots.len();
        self.count -= 1;
        Ok(value)
    }

    /// Returns a reference to the element at the front of the queue without
    /// removing it.
    ///
    /// Returns [`QueueError::Empty`] when there is nothing to peek at.
    pub fn front(&self) -> Result<&T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        Ok(self.slots[self.front]
            .as_ref()
            .expect("a slot inside the live window holds a value"))
    }

    /// Whether the queue currently holds no elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether the queue currently holds `capacity` elements.
    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    /// The number of elements currently in the queue.
    pub fn len(&self) -> usize {
        self.count
    }

    /// The fixed capacity the queue was created with.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
