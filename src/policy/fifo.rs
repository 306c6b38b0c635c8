//! FIFO (First-In-First-Out) replacement policy.
//!
//! Evicts in arrival order. Hits never reorder the queue.

use std::collections::{HashSet, VecDeque};

use log::trace;

use crate::common::{Capacity, PageId};
use crate::policy::{Access, Replacer};

/// A FIFO frame store.
///
/// Resident order is arrival order, oldest first.
#[derive(Debug, Clone)]
pub struct FifoReplacer {
    /// Resident pages in arrival order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    in_queue: HashSet<PageId>,

    capacity: Capacity,
}

impl FifoReplacer {
    /// Create an empty FIFO replacer.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity.get()),
            in_queue: HashSet::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Remove and return the oldest resident page.
    fn evict(&mut self) -> Option<PageId> {
        let victim = self.queue.pop_front()?;
        self.in_queue.remove(&victim);
        trace!("fifo evict {}", victim);
        Some(victim)
    }
}

impl Replacer for FifoReplacer {
    fn access(&mut self, page: PageId) -> Access {
        if self.in_queue.contains(&page) {
            return Access::Hit;
        }
        if self.capacity.is_zero() {
            return Access::Miss { evicted: None };
        }

        let evicted = if self.queue.len() >= self.capacity.get() {
            self.evict()
        } else {
            None
        };
        self.queue.push_back(page);
        self.in_queue.insert(page);
        Access::Miss { evicted }
    }

    fn resident(&self) -> Vec<PageId> {
        self.queue.iter().copied().collect()
    }

    fn contains(&self, page: PageId) -> bool {
        self.in_queue.contains(&page)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn capacity(&self) -> Capacity {
        self.capacity
    }
}
