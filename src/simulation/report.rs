//! Cross-policy results of one simulation.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::common::{Capacity, PageId};
use crate::policy::Policy;
use crate::trace::RunResult;

/// One row of the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryRow {
    pub policy: Policy,
    pub faults: usize,
    pub hits: usize,
    pub hit_ratio: Option<f64>,
    pub fault_ratio: Option<f64>,
}

impl fmt::Display for SummaryRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} faults: {:>4}  hits: {:>4}  hit ratio: {}",
            self.policy.name(),
            self.faults,
            self.hits,
            percent(self.hit_ratio)
        )
    }
}

fn percent(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.2}%", r * 100.0),
        None => "n/a".to_string(),
    }
}

/// Results of every policy run by one [`Simulator::run`](crate::Simulator::run).
///
/// Runs are keyed by policy and iterate in [`Policy`] declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    references: Vec<PageId>,
    capacity: Capacity,
    runs: BTreeMap<Policy, RunResult>,
}

impl SimulationReport {
    pub(crate) fn new(
        references: Vec<PageId>,
        capacity: Capacity,
        runs: BTreeMap<Policy, RunResult>,
    ) -> Self {
        Self {
            references,
            capacity,
            runs,
        }
    }

    /// The reference sequence every policy was run over.
    pub fn references(&self) -> &[PageId] {
        &self.references
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Result for `policy`, if it was selected.
    pub fn get(&self, policy: Policy) -> Option<&RunResult> {
        self.runs.get(&policy)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Policy, &RunResult)> {
        self.runs.iter().map(|(policy, result)| (*policy, result))
    }

    /// Policies that were run, in reporting order.
    pub fn policies(&self) -> Vec<Policy> {
        self.runs.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Comparison table, one row per policy.
    pub fn summary(&self) -> Vec<SummaryRow> {
        self.iter()
            .map(|(policy, result)| SummaryRow {
                policy,
                faults: result.faults(),
                hits: result.hits(),
                hit_ratio: result.hit_ratio(),
                fault_ratio: result.fault_ratio(),
            })
            .collect()
    }

    /// Policy with the lowest fault count.
    ///
    /// Ties go to the policy declared first.
    pub fn fewest_faults(&self) -> Option<Policy> {
        self.iter()
            .min_by_key(|(_, result)| result.faults())
            .map(|(policy, _)| policy)
    }
}

impl<'a> IntoIterator for &'a SimulationReport {
    type Item = (&'a Policy, &'a RunResult);
    type IntoIter = std::collections::btree_map::Iter<'a, Policy, RunResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;

    fn report(ids: &[i64], frames: usize, policies: &[Policy]) -> SimulationReport {
        let refs = pages(ids);
        let capacity = Capacity::new(frames);
        let runs = policies
            .iter()
            .map(|&p| (p, p.process(&refs, capacity)))
            .collect();
        SimulationReport::new(refs, capacity, runs)
    }

    #[test]
    fn test_summary_rows_in_policy_order() {
        let report = report(&[1, 2, 1], 2, &[Policy::Optimal, Policy::Fifo]);
        let rows = report.summary();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].policy, Policy::Fifo);
        assert_eq!(rows[1].policy, Policy::Optimal);
        assert_eq!(rows[0].faults, 2);
        assert_eq!(rows[0].hits, 1);
    }

    #[test]
    fn test_fewest_faults() {
        let report = report(&[7, 0, 1, 2, 0, 3, 4, 2, 3, 0, 3, 2], 3, &Policy::ALL);
        assert_eq!(report.fewest_faults(), Some(Policy::Optimal));
    }

    #[test]
    fn test_fewest_faults_tie_goes_to_first() {
        // No reuse: every policy faults on every reference.
        let report = report(&[1, 2, 3], 2, &Policy::ALL);
        assert_eq!(report.fewest_faults(), Some(Policy::Fifo));
    }

    #[test]
    fn test_summary_row_display() {
        let report = report(&[], 2, &[Policy::Lru]);
        let row = report.summary()[0];
        assert!(format!("{}", row).ends_with("hit ratio: n/a"));
    }

    #[test]
    fn test_iteration() {
        let report = report(&[1], 1, &Policy::ALL);
        assert_eq!((&report).into_iter().count(), 3);
        assert_eq!(report.references(), pages(&[1]).as_slice());
        assert_eq!(report.capacity(), Capacity::new(1));
    }
}
