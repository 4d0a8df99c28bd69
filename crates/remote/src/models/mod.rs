//! Data types exchanged with the remote backend.

mod query;
mod response;

pub use query::{InvalidQuery, SiteQuery, MAX_KEYWORDS_LEN};
pub use response::RawResponse;
