//! Trip-update walk: turns decoded feed entities into arrival events.

use chrono::{DateTime, Utc};
use gtfs_realtime::FeedEntity;

use crate::domain::Arrival;

/// Routes kept by default: the 1, 2 and 3 lines.
pub const DEFAULT_ROUTES: &[&str] = &["1", "2", "3"];

/// Extract upcoming arrivals from a feed snapshot.
///
/// Walks every trip update, keeping only allow-listed routes and stop-time
/// updates that carry a usable arrival prediction. An arrival at exactly
/// `now` is kept; only strictly-past times are dropped. The output carries
/// no ordering guarantee, sorting is the presenter's job.
pub fn extract_arrivals(
    entities: &[FeedEntity],
    now: DateTime<Utc>,
    allowed_routes: &[String],
) -> Vec<Arrival> {
    let mut arrivals = Vec::new();

    for entity in entities {
        let trip_update = match &entity.trip_update {
            Some(trip_update) => trip_update,
            None => continue,
        };

        // `trip` is a required field in the bindings; the route ID on it
        // is not.
        let route_id = match trip_update.trip.route_id.as_deref() {
            Some(route_id) => route_id,
            None => continue,
        };
        if !allowed_routes.iter().any(|allowed| allowed == route_id) {
            continue;
        }

        for update in &trip_update.stop_time_update {
            let timestamp = match update.arrival.as_ref().and_then(|arrival| arrival.time) {
                Some(timestamp) => timestamp,
                None => continue,
            };
            // Zero is the feed's sentinel for "unknown".
            if timestamp == 0 {
                continue;
            }

            let time = match DateTime::from_timestamp(timestamp, 0) {
                Some(time) => time,
                None => continue,
            };
            if time < now {
                continue;
            }

            let stop_id = match update.stop_id.as_deref() {
                Some(stop_id) if !stop_id.is_empty() => stop_id,
                _ => continue,
            };

            arrivals.push(Arrival::new(stop_id, route_id, time));
        }
    }

    arrivals
}
