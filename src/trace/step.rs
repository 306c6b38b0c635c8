//! Per-reference step records.

use std::fmt;

use serde::Serialize;

use crate::common::PageId;

/// Whether a reference found its page resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    Hit,
    Miss,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Hit => write!(f, "Hit"),
            Status::Miss => write!(f, "Miss"),
        }
    }
}

/// The outcome of processing one reference.
///
/// `resident` is the frame contents immediately after the reference, in
/// the policy's order (arrival for FIFO, recency for LRU, slot for Optimal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Position in the reference sequence.
    pub index: usize,

    /// Page referenced.
    pub page: PageId,

    pub status: Status,

    /// Victim removed to make room, only on capacity misses.
    pub evicted: Option<PageId>,

    pub resident: Vec<PageId>,
}

impl Step {
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.status == Status::Hit
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} {} [", self.index, self.page.0, self.status)?;
        for (i, page) in self.resident.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", page.0)?;
        }
        write!(f, "]")?;
        if let Some(victim) = self.evicted {
            write!(f, " evicted {}", victim.0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;

    #[test]
    fn test_step_display() {
        let step = Step {
            index: 3,
            page: PageId(2),
            status: Status::Miss,
            evicted: Some(PageId(7)),
            resident: pages(&[0, 1, 2]),
        };
        assert_eq!(format!("{}", step), "#3 2 Miss [0, 1, 2] evicted 7");
        assert!(!step.is_hit());
    }

    #[test]
    fn test_step_display_empty_frames() {
        let step = Step {
            index: 0,
            page: PageId(5),
            status: Status::Miss,
            evicted: None,
            resident: vec![],
        };
        assert_eq!(format!("{}", step), "#0 5 Miss []");
    }
}
