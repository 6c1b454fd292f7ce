//! Station directory: stop ID ↔ display name lookup.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use super::error::DirectoryError;

/// Bidirectional stop ID ↔ station name lookup.
///
/// Built once from the static GTFS stops table and immutable afterwards.
/// Several stop IDs (one per platform and direction) usually share one
/// station name, so the reverse mapping is one-to-many.
#[derive(Debug, Default)]
pub struct StationDirectory {
    id_to_name: HashMap<String, String>,
    name_to_ids: HashMap<String, Vec<String>>,
}

impl StationDirectory {
    /// Create an empty directory.
    ///
    /// Used when the stops table cannot be loaded: every lookup misses and
    /// arrivals render with bare stop IDs.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the directory from ordered `(stop_id, name)` rows.
    ///
    /// A stop ID appearing twice keeps its last name; a name appearing on
    /// several rows collects every stop ID in source order.
    pub fn build<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut id_to_name = HashMap::new();
        let mut name_to_ids: HashMap<String, Vec<String>> = HashMap::new();

        for (stop_id, name) in rows {
            id_to_name.insert(stop_id.clone(), name.clone());
            name_to_ids.entry(name).or_default().push(stop_id);
        }

        Self {
            id_to_name,
            name_to_ids,
        }
    }

    /// Load the directory from a GTFS stops CSV file.
    ///
    /// Column 0 is the stop ID and column 1 the display name; the header
    /// row and any extra columns are ignored. Rows with fewer than two
    /// fields are dropped silently.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DirectoryError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            match (record.get(0), record.get(1)) {
                (Some(stop_id), Some(name)) => {
                    rows.push((stop_id.to_string(), name.to_string()));
                }
                _ => continue,
            }
        }

        Ok(Self::build(rows))
    }

    /// Look up the display name for a stop ID.
    pub fn name_of(&self, stop_id: &str) -> Option<&str> {
        self.id_to_name.get(stop_id).map(String::as_str)
    }

    /// All stop IDs sharing a station name, in source order.
    ///
    /// Returns an empty slice for an unknown name.
    pub fn ids_for(&self, name: &str) -> &[String] {
        self.name_to_ids
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct stop IDs loaded.
    pub fn len(&self) -> usize {
        self.id_to_name.len()
    }

    /// Whether the directory holds no stations.
    pub fn is_empty(&self) -> bool {
        self.id_to_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn rows(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect()
    }

    #[test]
    fn build_maps_ids_to_names() {
        let directory = StationDirectory::build(rows(&[
            ("116N", "116 St-Columbia University"),
            ("116S", "116 St-Columbia University"),
        ]));

        assert_eq!(directory.name_of("116N"), Some("116 St-Columbia University"));
        assert_eq!(directory.name_of("116S"), Some("116 St-Columbia University"));
        assert_eq!(directory.name_of("999X"), None);
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn duplicate_stop_id_keeps_last_name() {
        let directory = StationDirectory::build(rows(&[
            ("116N", "Old Name"),
            ("116N", "New Name"),
        ]));

        assert_eq!(directory.name_of("116N"), Some("New Name"));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn name_collects_ids_in_source_order() {
        let directory = StationDirectory::build(rows(&[
            ("116N", "116 St"),
            ("225S", "225 St"),
            ("116S", "116 St"),
        ]));

        assert_eq!(directory.ids_for("116 St"), ["116N", "116S"]);
        assert_eq!(directory.ids_for("225 St"), ["225S"]);
    }

    #[test]
    fn repeated_rows_repeat_in_reverse_map() {
        let directory = StationDirectory::build(rows(&[
            ("116N", "116 St"),
            ("116N", "116 St"),
        ]));

        assert_eq!(directory.ids_for("116 St"), ["116N", "116N"]);
    }

    #[test]
    fn unknown_name_yields_empty_slice() {
        let directory = StationDirectory::build(rows(&[("116N", "116 St")]));

        assert!(directory.ids_for("Nonexistent Station").is_empty());
    }

    #[test]
    fn empty_directory() {
        let directory = StationDirectory::empty();

        assert!(directory.is_empty());
        assert_eq!(directory.name_of("116N"), None);
        assert!(directory.ids_for("116 St").is_empty());
    }

    fn write_stops(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn load_skips_header_row() {
        let file = write_stops("stop_id,stop_name\n116N,116 St\n116S,116 St\n");

        let directory = StationDirectory::load(file.path()).unwrap();

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.name_of("stop_id"), None);
        assert_eq!(directory.ids_for("116 St"), ["116N", "116S"]);
    }

    #[test]
    fn load_skips_short_rows() {
        let file = write_stops("stop_id,stop_name\nlonely\n116N,116 St\n");

        let directory = StationDirectory::load(file.path()).unwrap();

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.name_of("116N"), Some("116 St"));
    }

    #[test]
    fn load_ignores_extra_fields() {
        let file = write_stops(
            "stop_id,stop_name,stop_lat,stop_lon\n116N,116 St,40.808,-73.964\n",
        );

        let directory = StationDirectory::load(file.path()).unwrap();

        assert_eq!(directory.name_of("116N"), Some("116 St"));
    }

    #[test]
    fn load_missing_file_reports_open_error() {
        let result = StationDirectory::load("definitely/not/a/real/stops.csv");

        assert!(matches!(result, Err(DirectoryError::Open { .. })));
    }
}
