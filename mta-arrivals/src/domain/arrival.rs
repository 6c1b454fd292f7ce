//! Arrival event type.

use chrono::{DateTime, Utc};

/// A single predicted arrival: one train reaching one stop.
///
/// Arrivals are produced fresh from every feed fetch and never mutated
/// afterwards. The extractor guarantees `stop_id` and `route_id` are
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    /// GTFS stop identifier, e.g. `"116N"`.
    pub stop_id: String,
    /// Route the trip runs on, e.g. `"1"`.
    pub route_id: String,
    /// Predicted arrival time.
    pub time: DateTime<Utc>,
}

impl Arrival {
    /// Create a new arrival event.
    pub fn new(
        stop_id: impl Into<String>,
        route_id: impl Into<String>,
        time: DateTime<Utc>,
    ) -> Self {
        Self {
            stop_id: stop_id.into(),
            route_id: route_id.into(),
            time,
        }
    }
}
