//! Static station directory and station-query resolution.
//!
//! The directory is the stop ID ↔ display name lookup built once from the
//! GTFS stops table; resolution decides whether a user query is a literal
//! stop ID or a station name covering several platforms.

mod directory;
mod error;
mod resolve;

pub use directory::StationDirectory;
pub use error::DirectoryError;
pub use resolve::resolve;
