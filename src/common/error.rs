//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The core has no I/O and no partial-failure states: a simulation either
/// completes deterministically or is never started because its configuration
/// was rejected up front. Nothing here is transient, so nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Frame capacity must be at least 1.
    ///
    /// With zero frames there is no resident set and no eviction target;
    /// this is a configuration error, not a simulation outcome.
    #[error("invalid frame capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// The given name does not identify a replacement policy.
    #[error("unknown replacement policy: {0:?}")]
    UnknownPolicy(String),
}
