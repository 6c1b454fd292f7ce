//! MTA GTFS-Realtime feed client and arrival extraction.
//!
//! The feed is a binary protobuf `FeedMessage` whose entities carry trip
//! updates; each trip update holds per-stop arrival predictions. One fetch
//! produces one immutable snapshot. Nothing is retried or merged across
//! fetches: in watch mode a failed tick is reported and the next tick
//! starts from scratch.

mod client;
mod error;
mod extract;

pub use client::{FeedClient, FeedConfig};
pub use error::FeedError;
pub use extract::{DEFAULT_ROUTES, extract_arrivals};
