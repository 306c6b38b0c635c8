//! The full outcome of running one policy.

use serde::Serialize;

use crate::common::{Capacity, PageId};
use crate::policy::Policy;
use crate::trace::{RunStats, Status, Step};

/// Ordered step trace plus aggregate counters for one policy.
///
/// Immutable once built. `stats.total` always equals `steps.len()` and
/// `hits + faults == total`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    policy: Policy,
    capacity: Capacity,
    stats: RunStats,
    steps: Vec<Step>,
}

impl RunResult {
    /// Build a result from a finished trace, deriving its counters.
    pub fn new(policy: Policy, capacity: Capacity, steps: Vec<Step>) -> Self {
        let hits = steps.iter().filter(|s| s.is_hit()).count();
        let evictions = steps.iter().filter(|s| s.evicted.is_some()).count();
        let stats = RunStats {
            total: steps.len(),
            hits,
            faults: steps.len() - hits,
            evictions,
        };
        Self {
            policy,
            capacity,
            stats,
            steps,
        }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn total(&self) -> usize {
        self.stats.total
    }

    pub fn hits(&self) -> usize {
        self.stats.hits
    }

    pub fn faults(&self) -> usize {
        self.stats.faults
    }

    pub fn evictions(&self) -> usize {
        self.stats.evictions
    }

    /// `None` for an empty reference sequence.
    pub fn hit_ratio(&self) -> Option<f64> {
        self.stats.hit_ratio()
    }

    /// `None` for an empty reference sequence.
    pub fn fault_ratio(&self) -> Option<f64> {
        self.stats.fault_ratio()
    }

    /// Frame contents after the last reference.
    pub fn final_resident(&self) -> &[PageId] {
        match self.steps.last() {
            Some(step) => &step.resident,
            None => &[],
        }
    }

    /// Pages evicted, in eviction order.
    pub fn eviction_order(&self) -> Vec<PageId> {
        self.steps.iter().filter_map(|s| s.evicted).collect()
    }

    /// CRC32 over every step's page, status, victim and frame snapshot.
    ///
    /// Two runs with equal checksums produced the same trace; used to check
    /// that repeated or concurrent runs are reproducible.
    pub fn trace_checksum(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        for step in &self.steps {
            hasher.update(&step.page.0.to_le_bytes());
            hasher.update(&[match step.status {
                Status::Hit => 0,
                Status::Miss => 1,
            }]);
            match step.evicted {
                Some(victim) => {
                    hasher.update(&[1]);
                    hasher.update(&victim.0.to_le_bytes());
                }
                None => hasher.update(&[0]),
            }
            hasher.update(&(step.resident.len() as u64).to_le_bytes());
            for page in &step.resident {
                hasher.update(&page.0.to_le_bytes());
            }
        }
        hasher.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;

    fn step(index: usize, page: i64, status: Status, evicted: Option<i64>, resident: &[i64]) -> Step {
        Step {
            index,
            page: PageId(page),
            status,
            evicted: evicted.map(PageId),
            resident: pages(resident),
        }
    }

    fn sample() -> RunResult {
        RunResult::new(
            Policy::Fifo,
            Capacity::new(1),
            vec![
                step(0, 1, Status::Miss, None, &[1]),
                step(1, 1, Status::Hit, None, &[1]),
                step(2, 2, Status::Miss, Some(1), &[2]),
                step(3, 3, Status::Miss, Some(2), &[3]),
            ],
        )
    }

    #[test]
    fn test_counts_derived_from_steps() {
        let result = sample();
        assert_eq!(result.total(), 4);
        assert_eq!(result.hits(), 1);
        assert_eq!(result.faults(), 3);
        assert_eq!(result.evictions(), 2);
        assert_eq!(result.hit_ratio(), Some(0.25));
        assert_eq!(result.fault_ratio(), Some(0.75));
    }

    #[test]
    fn test_final_resident_and_eviction_order() {
        let result = sample();
        assert_eq!(result.final_resident(), pages(&[3]).as_slice());
        assert_eq!(result.eviction_order(), pages(&[1, 2]));
    }

    #[test]
    fn test_empty_result() {
        let result = RunResult::new(Policy::Lru, Capacity::new(3), vec![]);
        assert_eq!(result.total(), 0);
        assert_eq!(result.hit_ratio(), None);
        assert_eq!(result.fault_ratio(), None);
        assert!(result.final_resident().is_empty());
    }

    #[test]
    fn test_checksum_stable_and_sensitive() {
        let a = sample();
        let b = sample();
        assert_eq!(a.trace_checksum(), b.trace_checksum());

        let other = RunResult::new(
            Policy::Fifo,
            Capacity::new(1),
            vec![step(0, 1, Status::Miss, None, &[1])],
        );
        assert_ne!(a.trace_checksum(), other.trace_checksum());
    }
}
