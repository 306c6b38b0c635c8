//! Configuration constants for pagesim.

/// Reference string used when the caller supplies none.
///
/// With 3 frames FIFO and LRU both fault 8 times, Optimal 7 times.
pub const DEFAULT_REFERENCE_STRING: &str = "7 0 1 2 0 3 4 2 3 0 3 2";

/// Frame count used when the caller supplies none.
pub const DEFAULT_FRAMES: usize = 3;

/// Largest frame count the interactive front end offers.
///
/// Advisory only; the core accepts any non-negative capacity.
pub const MAX_UI_FRAMES: usize = 10;

/// Upper bound on reference sequence length.
///
/// Bounds the Optimal engine's lookahead table. Trace memory is bounded
/// separately by [`MAX_TRACE_ENTRIES`].
pub const MAX_REFERENCES: usize = 1_000_000;

/// Upper bound on frame-snapshot entries across all runs of one simulation.
///
/// Each step snapshots up to `min(capacity, len)` page ids, so one run
/// stores at most `len × min(capacity, len)` entries. 50M entries is about
/// 400MB of `PageId`s.
pub const MAX_TRACE_ENTRIES: usize = 50_000_000;

/// Runtime settings for a [`Simulator`](crate::Simulator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Reject reference sequences longer than this.
    pub max_references: usize,

    /// Reject simulations whose worst-case trace holds more snapshot
    /// entries than this.
    pub max_trace_entries: usize,
}

impl SimulatorConfig {
    /// Config with a custom input limit.
    pub fn with_max_references(max_references: usize) -> Self {
        Self {
            max_references,
            ..Self::default()
        }
    }

    /// Config with a custom trace budget.
    pub fn with_max_trace_entries(max_trace_entries: usize) -> Self {
        Self {
            max_trace_entries,
            ..Self::default()
        }
    }

    /// Worst-case snapshot entries for `runs` policies over `len`
    /// references with `frames` frames.
    ///
    /// A resident set never outgrows the number of references seen, so
    /// capacity beyond `len` adds nothing.
    pub fn trace_entries(len: usize, frames: usize, runs: usize) -> usize {
        len.saturating_mul(frames.min(len)).saturating_mul(runs)
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_references: MAX_REFERENCES,
            max_trace_entries: MAX_TRACE_ENTRIES,
        }
    }
}
