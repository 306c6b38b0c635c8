//! Simulation driver - runs selected policies over one input.
//!
//! The [`Simulator`] provides:
//! - Input validation before any engine runs
//! - One fresh engine per selected policy
//! - A [`SimulationReport`] keyed by policy

use std::collections::BTreeMap;

use log::debug;

use crate::common::{parse_reference_string, Capacity, Error, PageId, Result, SimulatorConfig};
use crate::policy::Policy;
use crate::simulation::SimulationReport;

/// Runs replacement policies over a reference sequence.
///
/// Holds only immutable configuration, so one simulator can serve any
/// number of callers, across threads, without locking.
///
/// # Usage
/// ```
/// use pagesim::{pages, Policy, Simulator};
///
/// let sim = Simulator::default();
/// let refs = pages(&[7, 0, 1, 2, 0, 3, 4, 2, 3, 0, 3, 2]);
/// let report = sim.run(&refs, 3, &Policy::ALL).unwrap();
///
/// assert_eq!(report.get(Policy::Fifo).unwrap().faults(), 8);
/// assert_eq!(report.get(Policy::Optimal).unwrap().faults(), 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a simulator with the given configuration.
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Run every policy in `policies` over `references` with `capacity` frames.
    ///
    /// Duplicate policies are run once. An empty selection yields an empty
    /// report.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is negative
    /// - `Error::TooManyReferences` if the sequence exceeds the configured limit
    /// - `Error::TraceTooLarge` if the worst-case trace exceeds the configured budget
    pub fn run(
        &self,
        references: &[PageId],
        capacity: i64,
        policies: &[Policy],
    ) -> Result<SimulationReport> {
        let mut selected = policies.to_vec();
        selected.sort();
        selected.dedup();
        let capacity = self.validate(references, capacity, selected.len())?;

        let mut runs = BTreeMap::new();
        for policy in selected {
            let result = policy.process(references, capacity);
            debug!(
                "{} over {} refs with {}: {}",
                policy,
                references.len(),
                capacity,
                result.stats()
            );
            runs.insert(policy, result);
        }

        Ok(SimulationReport::new(references.to_vec(), capacity, runs))
    }

    /// Parse a whitespace-delimited reference string, then [`run`](Self::run).
    ///
    /// # Errors
    /// - `Error::InvalidReference` if any token is not an integer
    /// - Everything [`run`](Self::run) reports
    pub fn run_str(&self, input: &str, capacity: i64, policies: &[Policy]) -> Result<SimulationReport> {
        let references = parse_reference_string(input)?;
        self.run(&references, capacity, policies)
    }

    fn validate(&self, references: &[PageId], capacity: i64, runs: usize) -> Result<Capacity> {
        let capacity = Capacity::try_from_i64(capacity)?;
        if references.len() > self.config.max_references {
            return Err(Error::TooManyReferences {
                len: references.len(),
                max: self.config.max_references,
            });
        }
        let entries = SimulatorConfig::trace_entries(references.len(), capacity.get(), runs);
        if entries > self.config.max_trace_entries {
            return Err(Error::TraceTooLarge {
                entries,
                max: self.config.max_trace_entries,
            });
        }
        Ok(capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config::MAX_TRACE_ENTRIES;
    use crate::common::pages;

    #[test]
    fn test_run_all_policies() {
        let sim = Simulator::default();
        let report = sim.run(&pages(&[1, 2, 3, 4, 1, 2, 5]), 3, &Policy::ALL).unwrap();

        assert_eq!(report.len(), 3);
        assert_eq!(report.get(Policy::Fifo).unwrap().faults(), 7);
        assert_eq!(report.get(Policy::Lru).unwrap().faults(), 7);
        assert_eq!(report.get(Policy::Optimal).unwrap().faults(), 5);
    }

    #[test]
    fn test_run_deduplicates_policies() {
        let sim = Simulator::default();
        let report = sim
            .run(&pages(&[1, 2]), 1, &[Policy::Lru, Policy::Lru, Policy::Fifo])
            .unwrap();

        assert_eq!(report.policies(), vec![Policy::Fifo, Policy::Lru]);
    }

    #[test]
    fn test_run_rejects_negative_capacity() {
        let sim = Simulator::default();
        assert_eq!(
            sim.run(&pages(&[1]), -1, &Policy::ALL).unwrap_err(),
            Error::InvalidCapacity(-1)
        );
    }

    #[test]
    fn test_run_enforces_reference_limit() {
        let sim = Simulator::new(SimulatorConfig::with_max_references(3));
        assert!(sim.run(&pages(&[1, 2, 3]), 2, &Policy::ALL).is_ok());
        assert_eq!(
            sim.run(&pages(&[1, 2, 3, 4]), 2, &Policy::ALL).unwrap_err(),
            Error::TooManyReferences { len: 4, max: 3 }
        );
    }

    #[test]
    fn test_run_enforces_trace_budget() {
        // 4 refs x 3 frames x 1 policy = 12 entries.
        let sim = Simulator::new(SimulatorConfig::with_max_trace_entries(12));
        let refs = pages(&[1, 2, 3, 4]);

        assert!(sim.run(&refs, 3, &[Policy::Fifo]).is_ok());
        assert_eq!(
            sim.run(&refs, 3, &[Policy::Fifo, Policy::Lru]).unwrap_err(),
            Error::TraceTooLarge { entries: 24, max: 12 }
        );
        // Duplicates count once.
        assert!(sim.run(&refs, 3, &[Policy::Lru, Policy::Lru]).is_ok());
    }

    #[test]
    fn test_huge_capacity_rejected_before_running() {
        // Every page distinct and capacity as large as the input: the trace
        // grows quadratically, so this must fail in validation.
        let refs: Vec<PageId> = (0..1_000_000).map(PageId).collect();
        let sim = Simulator::default();

        assert_eq!(
            sim.run(&refs, i64::MAX, &Policy::ALL).unwrap_err(),
            Error::TraceTooLarge {
                entries: 3_000_000_000_000,
                max: MAX_TRACE_ENTRIES
            }
        );
    }

    #[test]
    fn test_large_capacity_estimated_by_len() {
        let sim = Simulator::new(SimulatorConfig::with_max_trace_entries(9));
        // Capacity far above len is estimated as len: 3 x 3 = 9.
        assert!(sim.run(&pages(&[1, 2, 3]), 1_000_000, &[Policy::Optimal]).is_ok());
    }

    #[test]
    fn test_run_str_parse_error_first() {
        let sim = Simulator::default();
        // Bad token wins even though capacity is also invalid.
        assert!(matches!(
            sim.run_str("1 2 z", -5, &Policy::ALL),
            Err(Error::InvalidReference { position: 2, .. })
        ));
    }

    #[test]
    fn test_run_empty_selection() {
        let sim = Simulator::default();
        let report = sim.run(&pages(&[1, 2]), 2, &[]).unwrap();
        assert!(report.is_empty());
    }
}
