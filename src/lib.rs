use log::{debug, trace};

pub use crate::heap::{Orderable, PriorityQueue};

mod heap;

/// Capacity of a heap that never evicts. A `Vec` can not grow past it.
const UNBOUNDED: usize = usize::MAX;

/// Array-backed binary min-heap with an optional capacity bound.
///
/// The tree is implicit: the children of the element at `i` live at `2i + 1`
/// and `2i + 2`. Once the heap is full, every push evicts the current root,
/// so a bounded heap ends up holding the highest orders it has seen.
#[derive(Debug, Clone)]
pub struct Heap<T> {
    storage: Vec<T>,
    capacity: usize,
}

impl<T: Orderable> PriorityQueue<T> for Heap<T> {
    fn peek(&self) -> Option<&T> {
        self.storage.first()
    }

    fn push(&mut self, element: T) -> Option<T> {
        self.storage.push(element);
        self.sift_up(self.storage.len() - 1);

        if self.storage.len() <= self.capacity {
            return None;
        }

        let evicted = self.pop();
        if let Some(element) = &evicted {
            debug!(
                "Evict element of order {} due to size > capacity({})",
                element.order(),
                self.capacity
            );
        }
        evicted
    }

    fn pop(&mut self) -> Option<T> {
        match self.storage.len() {
            0 => None,
            1 => self.storage.pop(),
            _ => {
                // The tail takes the root slot and sinks back into place.
                let root = self.storage.swap_remove(0);
                self.sift_down(0);
                Some(root)
            }
        }
    }

    fn size(&self) -> usize {
        self.storage.len()
    }
}

impl<T: Orderable> Heap<T> {
    /// Creates an empty heap. A capacity of `0` means unbounded.
    pub fn new(capacity: usize) -> Heap<T> {
        Heap {
            storage: Vec::new(),
            capacity: normalize_capacity(capacity),
        }
    }

    pub fn unbounded() -> Heap<T> {
        Heap::new(0)
    }

    /// Takes `source` as the backing storage and reorders it in place in
    /// linear time.
    ///
    /// The capacity is only enforced by later pushes: a `source` longer than
    /// `capacity` is kept whole, and each push past that point evicts exactly
    /// one element.
    pub fn heapify(source: Vec<T>, capacity: usize) -> Heap<T> {
        let mut heap = Heap {
            storage: source,
            capacity: normalize_capacity(capacity),
        };
        heap.build();
        heap
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Gives the backing storage back, in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }

    fn build(&mut self) {
        if self.storage.is_empty() {
            return;
        }

        let len = self.storage.len();
        if len > self.capacity {
            trace!("Heapify {} elements above capacity({})", len, self.capacity);
        } else {
            trace!("Heapify {} elements", len);
        }

        // Leaves are already valid heaps, start from the last parent.
        for parent in (0..=(len - 1) / 2).rev() {
            self.sift_down(parent);
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while let Some(parent) = parent_index(index) {
            if self.in_order(parent, index) {
                break;
            }
            self.storage.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        while let Some(child) = self.highest_priority_child_index(index) {
            if self.in_order(index, child) {
                break;
            }
            self.storage.swap(index, child);
            index = child;
        }
    }

    /// Left child wins ties. `None` for a leaf.
    fn highest_priority_child_index(&self, parent: usize) -> Option<usize> {
        let left = left_child_index(parent);
        let right = right_child_index(parent);

        if left >= self.storage.len() {
            return None;
        }
        if right >= self.storage.len() {
            return Some(left);
        }

        if self.storage[left].order() <= self.storage[right].order() {
            Some(left)
        } else {
            Some(right)
        }
    }

    fn in_order(&self, parent: usize, child: usize) -> bool {
        self.storage[parent].order() <= self.storage[child].order()
    }
}

impl<T: Orderable + Clone> Heap<T> {
    /// Copies every stored element, in heap order. The copy never aliases the
    /// heap's own storage.
    pub fn snapshot(&self) -> Vec<T> {
        self.storage.clone()
    }
}

impl<T: Orderable> Default for Heap<T> {
    fn default() -> Heap<T> {
        Heap::unbounded()
    }
}

impl<T: Orderable> From<Vec<T>> for Heap<T> {
    fn from(source: Vec<T>) -> Heap<T> {
        Heap::heapify(source, 0)
    }
}

fn normalize_capacity(capacity: usize) -> usize {
    if capacity == 0 {
        UNBOUNDED
    } else {
        capacity
    }
}

fn parent_index(child: usize) -> Option<usize> {
    if child == 0 {
        None
    } else {
        Some((child - 1) / 2)
    }
}

fn left_child_index(parent: usize) -> usize {
    parent * 2 + 1
}

fn right_child_index(parent: usize) -> usize {
    parent * 2 + 2
}
