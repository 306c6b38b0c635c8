//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Every variant is raised while validating input, before any replacement
/// engine runs. Engines themselves cannot fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A token in the reference string is not an integer page identifier.
    #[error("Invalid page reference {token:?} at position {position}")]
    InvalidReference { position: usize, token: String },

    /// Frame count is negative.
    #[error("Invalid frame capacity: {0}")]
    InvalidCapacity(i64),

    /// Frame count text is not an integer.
    #[error("Invalid frame capacity: {0:?} is not an integer")]
    InvalidCapacityToken(String),

    /// Reference sequence exceeds the configured input limit.
    #[error("Reference sequence has {len} pages, limit is {max}")]
    TooManyReferences { len: usize, max: usize },

    /// Worst-case trace would hold more frame-snapshot entries than allowed.
    #[error("Trace would hold up to {entries} frame entries, limit is {max}")]
    TraceTooLarge { entries: usize, max: usize },

    /// Policy name not recognised.
    #[error("Unknown replacement policy: {0:?}")]
    UnknownPolicy(String),
}
