//! Result alias over the shared search-error taxonomy.
//!
//! The taxonomy is closed and defined once, in `etour-remote`. No layer
//! in this crate introduces an error type of its own: the repository may
//! add the `Decode` classification and the service may add `Validation`,
//! but both do so through the shared [`SearchError`] constructors, so a
//! consumer can exhaustively match on [`SearchErrorKind`] regardless of
//! where a failure originated.

pub use etour_remote::{SearchError, SearchErrorKind};

/// Type alias for Result using the shared search error taxonomy.
pub type Result<T> = std::result::Result<T, SearchError>;
