//! eTour Core - Domain model, repository, and search service.
//!
//! This crate contains the domain half of the eTour search stack. It is
//! transport-agnostic: the raw remote call, the deadline enforcement,
//! and the failure taxonomy live in the `etour-remote` crate, which this
//! crate consumes through the `SearchGateway` trait.
//!
//! The layering is strict and one-way:
//!
//! - [`SiteRepository`] decodes raw gateway responses into [`Site`]
//!   values and is the only layer that may classify a `Decode` failure.
//! - [`SiteSearchService`] validates queries, applies the retry policy,
//!   and produces the final outcome a controller or view consumes.
//!
//! No layer below the service retries; no layer above the gateway sees
//! a raw response.

pub mod config;
pub mod errors;
pub mod sites;

// Re-export common types
pub use config::SearchConfig;
pub use sites::*;

// Re-export error types
pub use errors::Result;
pub use errors::{SearchError, SearchErrorKind};
