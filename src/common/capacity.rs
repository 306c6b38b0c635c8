//! Frame capacity type.

use std::fmt;

use serde::Serialize;

use crate::common::{Error, Result};

/// Number of frames available to a replacement policy.
///
/// Only constructible from a validated value: negative frame counts are
/// rejected, zero is accepted. With zero frames nothing is ever resident
/// and every reference faults.
///
/// # Example
/// ```
/// use pagesim::Capacity;
///
/// let cap = Capacity::try_from_i64(3).unwrap();
/// assert_eq!(cap.get(), 3);
/// assert!(Capacity::try_from_i64(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Capacity(usize);

impl Capacity {
    /// Create a capacity from an unsigned frame count.
    #[inline]
    pub fn new(frames: usize) -> Self {
        Capacity(frames)
    }

    /// Validate a signed frame count.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `frames` is negative
    pub fn try_from_i64(frames: i64) -> Result<Self> {
        usize::try_from(frames)
            .map(Capacity)
            .map_err(|_| Error::InvalidCapacity(frames))
    }

    /// Number of frames.
    #[inline]
    pub fn get(&self) -> usize {
        self.0
    }

    /// True for the degenerate zero-frame system.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} frames", self.0)
    }
}
