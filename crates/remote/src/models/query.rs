//! Immutable query description for a site search.

use serde::Serialize;
use thiserror::Error;

/// Upper bound on the keyword string accepted by the search form.
pub const MAX_KEYWORDS_LEN: usize = 100;

/// Precondition failures detected before any remote call is made.
///
/// These become the cause of a `Validation` search error; the service
/// layer short-circuits on them without touching the repository.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum InvalidQuery {
    /// The keyword field was empty or contained only whitespace.
    #[error("search keywords must not be empty")]
    EmptyKeywords,

    /// The keyword field exceeded [`MAX_KEYWORDS_LEN`] characters.
    #[error("search keywords exceed {MAX_KEYWORDS_LEN} characters")]
    KeywordsTooLong,

    /// The tourist identifier was empty or contained only whitespace.
    #[error("tourist id must not be empty")]
    EmptyTouristId,
}

/// An immutable description of what the caller wants from the backend.
///
/// Created by the consumer from user-entered form fields and read-only
/// afterwards. The gateway serializes it as the request payload; no layer
/// mutates it.
///
/// # Example
///
/// ```
/// use etour_remote::SiteQuery;
///
/// let query = SiteQuery::new("tourist-42", "museum").with_category("cultural");
/// assert!(query.validate().is_ok());
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SiteQuery {
    tourist_id: String,
    keywords: String,
    category: Option<String>,
}

impl SiteQuery {
    /// Create a query for the given tourist context and keywords.
    pub fn new(tourist_id: impl Into<String>, keywords: impl Into<String>) -> Self {
        Self {
            tourist_id: tourist_id.into(),
            keywords: keywords.into(),
            category: None,
        }
    }

    /// Restrict the search to one site category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// The caller-chosen tourist identifier this query runs on behalf of.
    pub fn tourist_id(&self) -> &str {
        &self.tourist_id
    }

    /// The search keywords.
    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    /// The optional category filter.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Check the query against the form-level preconditions.
    ///
    /// Runs locally; a failing query never reaches the remote backend.
    pub fn validate(&self) -> Result<(), InvalidQuery> {
        if self.keywords.trim().is_empty() {
            return Err(InvalidQuery::EmptyKeywords);
        }
        if self.keywords.chars().count() > MAX_KEYWORDS_LEN {
            return Err(InvalidQuery::KeywordsTooLong);
        }
        if self.tourist_id.trim().is_empty() {
            return Err(InvalidQuery::EmptyTouristId);
        }
        Ok(())
    }
}
