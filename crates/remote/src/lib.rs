//! eTour Remote Search Crate
//!
//! This crate provides the transport-facing half of the eTour search
//! stack: issuing one query to the remote backend, bounding how long the
//! caller will wait, and classifying failures at the point where they can
//! first be detected.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |    SiteQuery     |  (opaque, immutable query)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |   SiteGateway    |  (encodes the query, detects connection loss)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | BoundedExecutor  |  (dedicated worker, deadline, cancellation)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | SearchTransport  |  (injected blocking primitive)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`SiteQuery`] - Immutable query description (keywords + tourist context)
//! - [`RawResponse`] - Undecoded response body, consumed by the repository layer
//! - [`SearchError`] / [`SearchErrorKind`] - Closed failure taxonomy
//! - [`RetryPolicy`] - Pure retry decision, applied by the service layer only
//! - [`BoundedExecutor`] / [`Deadline`] - One bounded attempt on a dedicated worker
//! - [`SearchTransport`] - The injected raw transport primitive
//!
//! Decoding raw responses into domain objects, retrying, and input
//! validation all live above this crate; nothing here retries on its own.

pub mod errors;
pub mod executor;
pub mod gateway;
pub mod models;
pub mod transport;

// Re-export error types
pub use errors::{RetryPolicy, SearchError, SearchErrorKind};

// Re-export executor types
pub use executor::{BoundedExecutor, Deadline};

// Re-export gateway types
pub use gateway::{GatewayConfig, SearchGateway, SiteGateway, OP_SITE_SEARCH};

// Re-export models
pub use models::{InvalidQuery, RawResponse, SiteQuery};

// Re-export transport trait
pub use transport::SearchTransport;
