//! Optimal (Belady) replacement policy.
//!
//! On a capacity miss, evicts the resident page whose next reference lies
//! furthest in the future, or that is never referenced again.
//!
//! # Lookahead
//! A next-occurrence table is built once in O(n) when the replacer is
//! created. Each resident page carries the index of its next reference,
//! refreshed whenever it is referenced, so victim selection is a single
//! O(capacity) scan over the slots instead of a rescan of the remaining
//! sequence.
//!
//! # Tie-break
//! Among pages sharing the furthest next use (including several pages that
//! never recur), the one in the earliest slot wins. A replacement keeps the
//! victim's slot, so slot order is stable apart from the replaced occupant.

use std::collections::HashMap;

use log::trace;

use crate::common::{Capacity, PageId};
use crate::policy::{Access, Replacer};

/// An Optimal frame store bound to one reference sequence.
///
/// Resident order is slot order. Pages must be passed to [`access`] in the
/// same order as the sequence given to [`OptimalReplacer::new`].
///
/// # Panics
/// [`access`] panics if the page differs from the next page of the bound
/// sequence, or if the sequence is already exhausted. Lookahead for any
/// other page would be meaningless.
///
/// [`access`]: Replacer::access
#[derive(Debug, Clone)]
pub struct OptimalReplacer {
    /// Resident pages by slot.
    slots: Vec<PageId>,

    /// Index of the next reference of each resident page, `None` if it
    /// never recurs.
    next_use: HashMap<PageId, Option<usize>>,

    /// `next_occurrence[i]` is the smallest `j > i` with
    /// `references[j] == references[i]`.
    next_occurrence: Vec<Option<usize>>,

    references: Vec<PageId>,

    /// Position of the next reference to be processed.
    cursor: usize,

    capacity: Capacity,
}

impl OptimalReplacer {
    /// Create an empty Optimal replacer with full knowledge of `references`.
    pub fn new(capacity: Capacity, references: &[PageId]) -> Self {
        Self {
            slots: Vec::with_capacity(capacity.get()),
            next_use: HashMap::with_capacity(capacity.get()),
            next_occurrence: next_occurrences(references),
            references: references.to_vec(),
            cursor: 0,
            capacity,
        }
    }

    /// Next-use distance of a resident page from the current position.
    ///
    /// Returns `None` if `page` is not resident, `Some(None)` if it is never
    /// referenced again.
    pub fn next_use_distance(&self, page: PageId) -> Option<Option<usize>> {
        let next = *self.next_use.get(&page)?;
        Some(next.map(|j| j.saturating_sub(self.cursor.saturating_sub(1))))
    }

    /// Slot of the resident page referenced furthest in the future.
    ///
    /// Scans slots in order and only replaces the candidate on a strictly
    /// greater distance, so ties resolve to the earliest slot.
    fn select_victim(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (slot, page) in self.slots.iter().enumerate() {
            let next = self
                .next_use
                .get(page)
                .copied()
                .flatten()
                .unwrap_or(usize::MAX);
            match best {
                Some((_, furthest)) if next <= furthest => {}
                _ => best = Some((slot, next)),
            }
        }
        best.map(|(slot, _)| slot)
    }
}

impl Replacer for OptimalReplacer {
    fn access(&mut self, page: PageId) -> Access {
        let position = self.cursor;
        self.cursor += 1;
        assert_eq!(
            self.references.get(position),
            Some(&page),
            "optimal replacer driven out of sequence order at position {}",
            position
        );
        let upcoming = self.next_occurrence.get(position).copied().flatten();

        if let Some(next) = self.next_use.get_mut(&page) {
            *next = upcoming;
            return Access::Hit;
        }
        if self.capacity.is_zero() {
            return Access::Miss { evicted: None };
        }

        if self.slots.len() < self.capacity.get() {
            self.slots.push(page);
            self.next_use.insert(page, upcoming);
            return Access::Miss { evicted: None };
        }

        let evicted = self.select_victim().map(|slot| {
            let victim = std::mem::replace(&mut self.slots[slot], page);
            self.next_use.remove(&victim);
            trace!("optimal evict {} from slot {}", victim, slot);
            victim
        });
        self.next_use.insert(page, upcoming);
        Access::Miss { evicted }
    }

    fn resident(&self) -> Vec<PageId> {
        self.slots.clone()
    }

    fn contains(&self, page: PageId) -> bool {
        self.next_use.contains_key(&page)
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn capacity(&self) -> Capacity {
        self.capacity
    }
}

/// For every position, the index of the next reference to the same page.
fn next_occurrences(references: &[PageId]) -> Vec<Option<usize>> {
    let mut last_seen: HashMap<PageId, usize> = HashMap::new();
    let mut next = vec![None; references.len()];
    for (i, page) in references.iter().enumerate().rev() {
        next[i] = last_seen.insert(*page, i);
    }
    next
}
