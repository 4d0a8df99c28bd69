//! Raw, undecoded response body from the remote backend.

/// The untyped payload returned by the remote backend.
///
/// Produced by the gateway and consumed by the repository layer, which
/// decodes it into domain objects. It never appears in any interface
/// above the repository, so the backend's raw format can change without
/// touching the failure taxonomy or the service layer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawResponse(String);

impl RawResponse {
    /// Wrap a raw response body.
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    /// The response body as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the body.
    pub fn into_inner(self) -> String {
        self.0
    }
}
