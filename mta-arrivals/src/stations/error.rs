//! Station directory error types.

use std::path::PathBuf;

/// Errors from loading the static station table.
///
/// Malformed individual rows are not errors, they are dropped silently.
/// Only a structurally unreadable or unparsable table is reported.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Stops file could not be opened
    #[error("failed to open stops file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stops file is not parseable as CSV
    #[error("failed to parse stops file: {0}")]
    Parse(#[from] csv::Error),
}
