//! NYC Subway real-time arrivals board.
//!
//! Fetches the MTA GTFS-Realtime feed for the A Division, filters trip
//! updates down to upcoming arrivals on the configured routes, resolves
//! stop identifiers against the static station table, and renders the
//! result as a fixed-width table, once or repeatedly in watch mode.

pub mod domain;
pub mod feed;
pub mod render;
pub mod stations;
pub mod watch;
