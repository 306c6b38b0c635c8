//! Text entry for reference strings and frame counts.

use crate::common::{Capacity, Error, PageId, Result};

/// Parse a whitespace-delimited reference string into page identifiers.
///
/// Any run of whitespace separates tokens. A blank string yields an empty
/// sequence. The first token that is not an integer aborts the parse.
///
/// # Errors
/// - `Error::InvalidReference` with the 0-based token position
///
/// # Example
/// ```
/// use pagesim::{parse_reference_string, PageId};
///
/// let refs = parse_reference_string("7 0  1\n2").unwrap();
/// assert_eq!(refs, vec![PageId(7), PageId(0), PageId(1), PageId(2)]);
/// assert!(parse_reference_string("1 two 3").is_err());
/// ```
pub fn parse_reference_string(input: &str) -> Result<Vec<PageId>> {
    input
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<i64>()
                .map(PageId)
                .map_err(|_| Error::InvalidReference {
                    position,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Parse a frame count.
///
/// # Errors
/// - `Error::InvalidCapacityToken` if the text is not an integer
/// - `Error::InvalidCapacity` if the integer is negative
pub fn parse_capacity(input: &str) -> Result<Capacity> {
    let trimmed = input.trim();
    let frames = trimmed
        .parse::<i64>()
        .map_err(|_| Error::InvalidCapacityToken(trimmed.to_string()))?;
    Capacity::try_from_i64(frames)
}
