//! Fixed-capacity ring buffer with eviction reporting
//!
//! The ring buffer holds the most recent N items of a stream. Once full, each
//! insertion overwrites the oldest slot and hands the displaced item back to
//! the caller, which is what lets a windowed accumulator subtract the evicted
//! sample's contribution without rescanning the window.

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Fixed-capacity ring buffer over the last N items of a stream
///
/// Backed by a preallocated `Vec` that grows by pushes only until capacity is
/// reached and is never reallocated afterwards. `append` is O(1): while the
/// buffer is filling it returns `None`, and once full it returns the item it
/// displaced.
///
/// # Example
///
/// ```
/// use slidestats::ring::RingBuffer;
///
/// let mut buf = RingBuffer::new(3);
///
/// assert_eq!(buf.append(1.0), None);
/// assert_eq!(buf.append(2.0), None);
/// assert_eq!(buf.append(3.0), None);
///
/// // Full: the oldest item is evicted
/// assert_eq!(buf.append(4.0), Some(1.0));
/// assert_eq!(buf.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    /// Maximum number of items, fixed at construction
    capacity: usize,
    /// Stored items in physical slot order
    slots: Vec<T>,
    /// Position of the next write, always in [0, capacity)
    cursor: usize,
}

impl<T> RingBuffer<T> {
    /// Create a new empty ring buffer with given capacity
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. A zero-capacity window has no meaningful
    /// append semantics, so this is rejected at construction rather than
    /// surfacing later as a modulo-by-zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");

        Self {
            capacity,
            slots: Vec::with_capacity(capacity),
            cursor: 0,
        }
    }

    /// Insert an item, returning the evicted item if the buffer was full
    ///
    /// While the buffer is filling this returns `None` and the length grows
    /// by one. Once `len() == capacity()`, the item at the write cursor is
    /// displaced and returned. Never fails; O(1).
    pub fn append(&mut self, value: T) -> Option<T> {
        let evicted = if self.slots.len() == self.capacity {
            Some(core::mem::replace(&mut self.slots[self.cursor], value))
        } else {
            self.slots.push(value);
            None
        };
        self.cursor = (self.cursor + 1) % self.capacity;
        evicted
    }

    /// Number of items currently stored
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no items have been inserted yet
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check if the buffer has reached capacity
    ///
    /// Once full, a buffer stays full: every further `append` evicts.
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Maximum number of items
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current contents in physical slot order
    ///
    /// Slot order is not insertion order once the buffer has wrapped. This is
    /// fine for order-insensitive consumers (aggregate statistics, reference
    /// comparisons); anything order-sensitive must track arrival order itself.
    pub fn items(&self) -> &[T] {
        &self.slots
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<T: serde::Serialize> serde::Serialize for RingBuffer<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("RingBuffer", 3)?;
        state.serialize_field("capacity", &self.capacity)?;
        state.serialize_field("slots", &self.slots)?;
        state.serialize_field("cursor", &self.cursor)?;
        state.end()
    }
}
