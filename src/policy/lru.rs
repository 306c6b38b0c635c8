//! LRU (Least Recently Used) replacement policy.

use linked_hash_map::LinkedHashMap;
use log::trace;

use crate::common::{Capacity, PageId};
use crate::policy::{Access, Replacer};

/// An LRU frame store.
///
/// Resident order is recency order: front is least recently used,
/// back is most recently used. Every hit moves the page to the back.
#[derive(Debug, Clone)]
pub struct LruReplacer {
    /// Insertion-ordered map doubling as the recency list.
    recency: LinkedHashMap<PageId, ()>,

    capacity: Capacity,
}

impl LruReplacer {
    /// Create an empty LRU replacer.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            recency: LinkedHashMap::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// The page that would be evicted next.
    pub fn least_recent(&self) -> Option<PageId> {
        self.recency.front().map(|(page, _)| *page)
    }

    /// The page referenced most recently.
    pub fn most_recent(&self) -> Option<PageId> {
        self.recency.back().map(|(page, _)| *page)
    }

    fn evict(&mut self) -> Option<PageId> {
        let (victim, _) = self.recency.pop_front()?;
        trace!("lru evict {}", victim);
        Some(victim)
    }
}

impl Replacer for LruReplacer {
    fn access(&mut self, page: PageId) -> Access {
        if self.recency.get_refresh(&page).is_some() {
            return Access::Hit;
        }
        if self.capacity.is_zero() {
            return Access::Miss { evicted: None };
        }

        let evicted = if self.recency.len() >= self.capacity.get() {
            self.evict()
        } else {
            None
        };
        self.recency.insert(page, ());
        Access::Miss { evicted }
    }

    fn resident(&self) -> Vec<PageId> {
        self.recency.keys().copied().collect()
    }

    fn contains(&self, page: PageId) -> bool {
        self.recency.contains_key(&page)
    }

    fn len(&self) -> usize {
        self.recency.len()
    }

    fn capacity(&self) -> Capacity {
        self.capacity
    }
}
