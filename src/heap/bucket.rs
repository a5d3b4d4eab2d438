/*!
 * Priority Bucket
 * Fixed-capacity FIFO ring of elements sharing one priority
 */

use std::cmp::Ordering;

/// Ring buffer holding elements of a single priority in insertion order
///
/// # Performance
/// - Constant-time enqueue/dequeue
/// - Ring allocated once on creation, slots reused via wraparound
/// - No resizing: capacity is fixed for the lifetime of the bucket
#[derive(Debug, Clone)]
pub(crate) struct PriorityBucket<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    count: usize,
}

impl<T> PriorityBucket<T> {
    /// Create a bucket holding a single element
    ///
    /// A bucket only exists while it holds at least one element, so creation
    /// always takes the first one. `capacity` comes from a validated
    /// `HeapConfig`.
    ///
    /// # Returns
    /// - `Ok(bucket)` with the whole ring allocated
    /// - `Err(element)` if the ring could not be allocated
    pub(crate) fn with_first(element: T, capacity: usize) -> Result<Self, T> {
        debug_assert!(capacity > 0, "bucket capacity must be validated first");

        let mut slots: Vec<Option<T>> = Vec::new();
        if slots.try_reserve_exact(capacity).is_err() {
            return Err(element);
        }
        slots.push(Some(element));
        slots.resize_with(capacity, || None);

        Ok(Self {
            slots: slots.into_boxed_slice(),
            head: 0,
            count: 1,
        })
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    /// Append an element behind the newest one
    ///
    /// # Returns
    /// - `Ok(())` if the element was queued
    /// - `Err(element)` if the ring already holds `capacity` elements
    pub fn enqueue(&mut self, element: T) -> Result<(), T> {
        if self.is_full() {
            return Err(element);
        }

        let tail = self.wrap(self.head + self.count);
        self.slots[tail] = Some(element);
        self.count += 1;
        Ok(())
    }

    /// Remove and return the oldest element
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let element = self.slots[self.head].take();
        self.head = self.wrap(self.head + 1);
        self.count -= 1;
        element
    }

    /// Oldest element, next to be dequeued
    ///
    /// Every element in the bucket compares equal, so this is also the
    /// bucket's priority.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Elements in dequeue order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.count).filter_map(move |offset| self.slots[self.wrap(self.head + offset)].as_ref())
    }

    #[inline]
    fn wrap(&self, index: usize) -> usize {
        index % self.slots.len()
    }
}

impl<T: Ord> PriorityBucket<T> {
    /// Compare this bucket's priority against an element
    ///
    /// Empty buckets never live in a sequence; they sort first if asked.
    pub fn cmp_priority(&self, element: &T) -> Ordering {
        self.front().map_or(Ordering::Less, |front| front.cmp(element))
    }

    /// Compare the priorities of two buckets
    pub fn cmp_bucket(&self, other: &Self) -> Ordering {
        match other.front() {
            Some(theirs) => self.cmp_priority(theirs),
            None => Ordering::Greater,
        }
    }
}
