//! Domain model for eTour sites.

use serde::Serialize;

/// A point of interest returned by a site search.
///
/// Decoded by the repository from the raw backend response; immutable
/// afterwards and safe to hand to the service and consumers by value or
/// shared reference. An empty list of sites is a legitimate successful
/// outcome, never an error.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Site {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
