use std::fmt::Debug;

use num_traits::Float;

use crate::{Error, Result};

/// Sentinel in the position map for vertices not currently queued.
const NOT_QUEUED: usize = usize::MAX;

/// A binary min-heap over `(vertex, priority)` pairs with a reverse index
/// from vertex id to heap slot, giving O(log n) `decrease_key` on top of the
/// usual O(log n) insert and extract-min.
///
/// The reverse index and the entry buffer move as one unit: every slot swap
/// during sift-up or sift-down updates the positions of both swapped
/// vertices. A heap that swaps entries without updating positions still
/// extracts minima correctly but silently corrupts every later
/// `decrease_key`, which would keep addressing the vertex's original slot.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<W>
where
    W: Float + Debug + Copy,
{
    /// Heap-ordered `(vertex, priority)` entries.
    entries: Vec<(usize, W)>,

    /// Maps a vertex id to its slot in `entries`, or `NOT_QUEUED`.
    position: Vec<usize>,
}

impl<W> IndexedMinHeap<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a new empty heap.
    pub fn new() -> Self {
        IndexedMinHeap {
            entries: Vec::new(),
            position: Vec::new(),
        }
    }

    /// Creates an empty heap with room for vertices `0..n`.
    pub fn with_capacity(n: usize) -> Result<Self> {
        let mut heap = IndexedMinHeap::new();
        heap.entries.try_reserve_exact(n)?;
        heap.position.try_reserve_exact(n)?;
        heap.position.resize(n, NOT_QUEUED);
        Ok(heap)
    }

    /// Returns the number of queued vertices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no vertex is queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `vertex` is currently queued.
    pub fn contains(&self, vertex: usize) -> bool {
        self.position.get(vertex).is_some_and(|&slot| slot != NOT_QUEUED)
    }

    /// Returns the current priority of `vertex`, if queued.
    pub fn priority(&self, vertex: usize) -> Option<W> {
        self.position
            .get(vertex)
            .filter(|&&slot| slot != NOT_QUEUED)
            .map(|&slot| self.entries[slot].1)
    }

    /// Queues `vertex` at `priority`, extending the position map when the
    /// vertex id lies beyond its current domain.
    ///
    /// Fails with `InvalidVertex` if the vertex is already queued and with
    /// an allocation error if the backing buffers cannot grow.
    pub fn insert(&mut self, vertex: usize, priority: W) -> Result<()> {
        if self.contains(vertex) {
            return Err(Error::InvalidVertex(vertex));
        }
        if vertex >= self.position.len() {
            let grow = vertex + 1 - self.position.len();
            self.position.try_reserve(grow)?;
            self.position.resize(vertex + 1, NOT_QUEUED);
        }
        self.entries.try_reserve(1)?;
        self.entries.push((vertex, priority));
        let slot = self.entries.len() - 1;
        self.position[vertex] = slot;
        self.sift_up(slot);
        Ok(())
    }

    /// Lowers the priority of a queued vertex and restores heap order.
    ///
    /// A `new_priority` that would not decrease the current one is ignored;
    /// the structure only ever moves priorities toward the root. Errors with
    /// `InvalidVertex` if the vertex is absent.
    pub fn decrease_key(&mut self, vertex: usize, new_priority: W) -> Result<()> {
        let slot = match self.position.get(vertex) {
            Some(&slot) if slot != NOT_QUEUED => slot,
            _ => return Err(Error::InvalidVertex(vertex)),
        };
        if new_priority >= self.entries[slot].1 {
            return Ok(());
        }
        self.entries[slot].1 = new_priority;
        self.sift_up(slot);
        Ok(())
    }

    /// Removes and returns the queued vertex with the smallest priority.
    pub fn extract_min(&mut self) -> Option<(usize, W)> {
        let (min_vertex, min_priority) = *self.entries.first()?;
        self.position[min_vertex] = NOT_QUEUED;
        let last = self.entries.pop()?;
        if !self.entries.is_empty() {
            self.entries[0] = last;
            self.position[last.0] = 0;
            self.sift_down(0);
        }
        Some((min_vertex, min_priority))
    }

    /// Swaps two slots together with their reverse-index entries.
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.position[self.entries[a].0] = a;
        self.position[self.entries[b].0] = b;
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[slot].1 < self.entries[parent].1 {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;
            // Ties keep the left child: the right child must be strictly
            // smaller to win.
            if left < self.entries.len() && self.entries[left].1 < self.entries[smallest].1 {
                smallest = left;
            }
            if right < self.entries.len() && self.entries[right].1 < self.entries[smallest].1 {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }
}

impl<W> Default for IndexedMinHeap<W>
where
    W: Float + Debug + Copy,
{
    fn default() -> Self {
        IndexedMinHeap::new()
    }
}
