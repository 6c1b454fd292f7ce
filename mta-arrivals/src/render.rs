//! Fixed-width arrivals table rendering.

use chrono::{DateTime, TimeZone};

use crate::domain::Arrival;
use crate::stations::StationDirectory;

/// Placeholder shown when a stop ID has no directory entry.
const UNKNOWN_STATION: &str = "(unknown)";

/// Render arrivals as a fixed-width table.
///
/// Sorts by ascending arrival time (stable: equal times keep their input
/// order), resolves display names through the directory, and appends a
/// trailing count line. Times are formatted on a 12-hour clock in `tz`;
/// the binary passes the local timezone.
pub fn render_table<Tz>(
    mut arrivals: Vec<Arrival>,
    directory: &StationDirectory,
    tz: &Tz,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    arrivals.sort_by_key(|arrival| arrival.time);

    let mut out = String::new();

    out.push_str(&format!(
        "{:<10} {:<8} {:<35} {}\n",
        "STOP_ID", "ROUTE", "STATION", "ARRIVAL_TIME"
    ));
    out.push_str(&"-".repeat(80));
    out.push('\n');

    for arrival in &arrivals {
        let station = directory
            .name_of(&arrival.stop_id)
            .unwrap_or(UNKNOWN_STATION);
        out.push_str(&format!(
            "{:<10} {:<8} {:<35} {}\n",
            arrival.stop_id,
            arrival.route_id,
            station,
            clock(&arrival.time.with_timezone(tz)),
        ));
    }

    out.push_str(&format!("\nTotal: {} upcoming arrivals", arrivals.len()));

    out
}

/// 12-hour clock without a leading zero, e.g. `3:04 PM`.
fn clock<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, hour, min, 0).unwrap()
    }

    fn directory() -> StationDirectory {
        StationDirectory::build(vec![
            ("116N".to_string(), "116 St-Columbia University".to_string()),
            ("116S".to_string(), "116 St-Columbia University".to_string()),
        ])
    }

    #[test]
    fn rows_sorted_by_arrival_time() {
        let arrivals = vec![
            Arrival::new("116S", "1", at(15, 30)),
            Arrival::new("116N", "1", at(15, 4)),
        ];

        let table = render_table(arrivals, &directory(), &Utc);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[2].starts_with("116N"));
        assert!(lines[3].starts_with("116S"));
    }

    #[test]
    fn equal_times_keep_input_order() {
        let arrivals = vec![
            Arrival::new("116S", "1", at(15, 4)),
            Arrival::new("116N", "1", at(15, 4)),
        ];

        let table = render_table(arrivals, &directory(), &Utc);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[2].starts_with("116S"));
        assert!(lines[3].starts_with("116N"));
    }

    #[test]
    fn unresolved_stop_renders_placeholder() {
        let arrivals = vec![Arrival::new("999X", "3", at(9, 0))];

        let table = render_table(arrivals, &directory(), &Utc);

        assert!(table.contains("(unknown)"));
    }

    #[test]
    fn header_separator_and_total() {
        let arrivals = vec![
            Arrival::new("116N", "1", at(15, 4)),
            Arrival::new("116S", "1", at(15, 30)),
        ];

        let table = render_table(arrivals, &directory(), &Utc);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("STOP_ID"));
        assert!(lines[0].contains("ARRIVAL_TIME"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(table.lines().last(), Some("Total: 2 upcoming arrivals"));
    }

    #[test]
    fn empty_table_totals_zero() {
        let table = render_table(Vec::new(), &directory(), &Utc);

        assert_eq!(table.lines().last(), Some("Total: 0 upcoming arrivals"));
    }

    #[test]
    fn clock_is_twelve_hour() {
        assert_eq!(clock(&at(15, 4)), "3:04 PM");
        assert_eq!(clock(&at(9, 30)), "9:30 AM");
        assert_eq!(clock(&at(0, 5)), "12:05 AM");
        assert_eq!(clock(&at(12, 0)), "12:00 PM");
    }

    #[test]
    fn row_carries_station_name_and_time() {
        let arrivals = vec![Arrival::new("116N", "1", at(15, 4))];

        let table = render_table(arrivals, &directory(), &Utc);

        let row = table.lines().nth(2).unwrap();
        assert!(row.contains("116 St-Columbia University"));
        assert!(row.ends_with("3:04 PM"));
    }
}
