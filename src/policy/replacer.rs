//! The frame store interface shared by every replacement engine.

use crate::common::{Capacity, PageId};
use crate::policy::Policy;
use crate::trace::{RunResult, Status, Step};

/// Outcome of a single page reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Page was already resident.
    Hit,

    /// Page was not resident and has been loaded.
    ///
    /// `evicted` names the victim when the frames were full.
    Miss { evicted: Option<PageId> },
}

impl Access {
    /// True for [`Access::Hit`].
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Access::Hit)
    }

    /// The page evicted by this access, if any.
    #[inline]
    pub fn evicted(&self) -> Option<PageId> {
        match self {
            Access::Hit => None,
            Access::Miss { evicted } => *evicted,
        }
    }

    /// Hit/miss tag for the trace.
    #[inline]
    pub fn status(&self) -> Status {
        if self.is_hit() {
            Status::Hit
        } else {
            Status::Miss
        }
    }
}

/// A capacity-bounded set of resident pages with a policy-specific order.
///
/// Implementations own all their state; two replacers never share
/// anything, so each run starts from an empty frame store.
///
/// # Contract
/// - `access` is called once per reference, in sequence order
/// - `len() <= capacity()` after every call
/// - `resident()` never contains duplicates
pub trait Replacer {
    /// Process one reference and report whether it hit.
    fn access(&mut self, page: PageId) -> Access;

    /// Snapshot of resident pages in the policy's order.
    fn resident(&self) -> Vec<PageId>;

    /// Whether `page` is currently resident.
    fn contains(&self, page: PageId) -> bool;

    /// Number of resident pages.
    fn len(&self) -> usize;

    /// True when no page is resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of resident pages.
    fn capacity(&self) -> Capacity;
}

/// Run `replacer` over `references`, recording one step per reference.
///
/// This is a pure fold: the replacer is consumed and nothing outlives the
/// returned trace.
pub fn simulate<R: Replacer>(policy: Policy, mut replacer: R, references: &[PageId]) -> RunResult {
    let capacity = replacer.capacity();
    let steps = references
        .iter()
        .enumerate()
        .map(|(index, &page)| {
            let access = replacer.access(page);
            debug_assert!(replacer.len() <= capacity.get());
            Step {
                index,
                page,
                status: access.status(),
                evicted: access.evicted(),
                resident: replacer.resident(),
            }
        })
        .collect();

    RunResult::new(policy, capacity, steps)
}
