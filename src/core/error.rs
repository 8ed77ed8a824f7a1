use thiserror::Error;

/// The error type for cache mutations that violate the change protocol.
///
/// Both variants are fail-soft: the offending mutation is skipped and the
/// cache stays valid, so callers that mirror the original wallet behavior can
/// log and move on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NewsError {
    /// The core announced a new item at a timestamp the cache already holds.
    #[error("news at time {time} is already cached")]
    DuplicateNews {
        /// Timestamp of the rejected item.
        time: i64,
    },

    /// The core deleted an item the cache never saw.
    #[error("no cached news at time {time}")]
    UnknownNews {
        /// Timestamp the delete was keyed on.
        time: i64,
    },
}
