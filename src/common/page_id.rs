//! Page identifier type.

use std::fmt;

use serde::Serialize;

/// Identifies a page in a reference sequence.
///
/// Using `i64` because reference strings are free-form integer tokens:
/// any value the parser accepts is a legal page label, negatives included.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }
}

impl From<i64> for PageId {
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

/// Convert a slice of raw integers into page identifiers.
pub fn pages(ids: &[i64]) -> Vec<PageId> {
    ids.iter().copied().map(PageId).collect()
}
