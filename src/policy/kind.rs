//! Policy selection.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::common::{Capacity, Error, PageId};
use crate::policy::{simulate, FifoReplacer, LruReplacer, OptimalReplacer};
use crate::trace::RunResult;

/// The replacement policies the simulator knows.
///
/// Ordering follows declaration order, which is also the order results
/// are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Policy {
    Fifo,
    Lru,
    Optimal,
}

impl Policy {
    /// Every policy, in reporting order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }

    /// One-line description of the eviction rule.
    pub fn description(&self) -> &'static str {
        match self {
            Policy::Fifo => "Replaces the oldest page in memory",
            Policy::Lru => "Replaces the least recently used page",
            Policy::Optimal => "Replaces the page that won't be used for the longest time",
        }
    }

    /// Run this policy over `references` with a fresh frame store.
    ///
    /// # Example
    /// ```
    /// use pagesim::{pages, Capacity, Policy};
    ///
    /// let refs = pages(&[1, 2, 3, 4, 1, 2, 5]);
    /// let result = Policy::Optimal.process(&refs, Capacity::new(3));
    /// assert_eq!(result.faults(), 5);
    /// ```
    pub fn process(&self, references: &[PageId], capacity: Capacity) -> RunResult {
        match self {
            Policy::Fifo => simulate(*self, FifoReplacer::new(capacity), references),
            Policy::Lru => simulate(*self, LruReplacer::new(capacity), references),
            Policy::Optimal => simulate(
                *self,
                OptimalReplacer::new(capacity, references),
                references,
            ),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" | "belady" => Ok(Policy::Optimal),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;

    #[test]
    fn test_policy_from_str() {
        assert_eq!("FIFO".parse::<Policy>().unwrap(), Policy::Fifo);
        assert_eq!("lru".parse::<Policy>().unwrap(), Policy::Lru);
        assert_eq!(" Optimal ".parse::<Policy>().unwrap(), Policy::Optimal);
        assert_eq!("belady".parse::<Policy>().unwrap(), Policy::Optimal);
        assert_eq!(
            "clock".parse::<Policy>(),
            Err(Error::UnknownPolicy("clock".to_string()))
        );
    }

    #[test]
    fn test_policy_display_roundtrips() {
        for policy in Policy::ALL {
            assert_eq!(policy.to_string().parse::<Policy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_policy_ordering() {
        assert!(Policy::Fifo < Policy::Lru);
        assert!(Policy::Lru < Policy::Optimal);
    }

    #[test]
    fn test_process_labels_result() {
        let refs = pages(&[1, 2, 1]);
        for policy in Policy::ALL {
            let result = policy.process(&refs, Capacity::new(2));
            assert_eq!(result.policy(), policy);
            assert_eq!(result.faults(), 2);
            assert_eq!(result.hits(), 1);
        }
    }
}
