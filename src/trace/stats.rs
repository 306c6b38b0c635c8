//! Aggregate counters for a single run.

use std::fmt;

use serde::Serialize;

/// Hit and fault totals for one policy over one reference sequence.
///
/// Computed once from the finished trace; plain values that can be
/// printed, serialized and compared.
///
/// # Example
/// ```
/// use pagesim::RunStats;
///
/// let stats = RunStats { total: 4, hits: 1, faults: 3, evictions: 1 };
/// assert_eq!(stats.hit_ratio(), Some(0.25));
/// assert_eq!(format!("{}", stats), "hits: 1, faults: 3, evictions: 1, hit_rate: 25.00%");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Number of references processed.
    pub total: usize,

    /// References that found their page resident.
    pub hits: usize,

    /// References that had to load their page.
    pub faults: usize,

    /// Faults that displaced a resident page.
    pub evictions: usize,
}

impl RunStats {
    /// Fraction of references that hit (0.0 to 1.0).
    ///
    /// `None` when no references were processed.
    pub fn hit_ratio(&self) -> Option<f64> {
        ratio(self.hits, self.total)
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    ///
    /// `None` when no references were processed.
    pub fn fault_ratio(&self) -> Option<f64> {
        ratio(self.faults, self.total)
    }
}

fn ratio(count: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(count as f64 / total as f64)
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits: {}, faults: {}, evictions: {}, ",
            self.hits, self.faults, self.evictions
        )?;
        match self.hit_ratio() {
            Some(rate) => write!(f, "hit_rate: {:.2}%", rate * 100.0),
            None => write!(f, "hit_rate: n/a"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = RunStats::default();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.hit_ratio(), None);
        assert_eq!(stats.fault_ratio(), None);
    }

    #[test]
    fn test_stats_ratios() {
        let stats = RunStats {
            total: 10,
            hits: 7,
            faults: 3,
            evictions: 0,
        };

        assert_eq!(stats.hit_ratio(), Some(0.7));
        assert_eq!(stats.fault_ratio(), Some(0.3));
    }

    #[test]
    fn test_stats_display() {
        let stats = RunStats {
            total: 100,
            hits: 80,
            faults: 20,
            evictions: 5,
        };
        let display = format!("{}", stats);

        assert!(display.contains("hits: 80"));
        assert!(display.contains("faults: 20"));
        assert!(display.contains("80.00%"));
    }

    #[test]
    fn test_stats_display_empty() {
        let display = format!("{}", RunStats::default());
        assert!(display.ends_with("hit_rate: n/a"));
    }
}
