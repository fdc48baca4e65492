pub mod models;

pub use models::{normalize_name, EmployeeHours, RankedEntry, UNNAMED_EMPLOYEE};

use crate::components::time_entries::TimeEntry;
use crate::error::{format_error, Error, ReportResult};
use crate::utils::time::{hours_between, parse_utc_timestamp};
use tracing::{debug, info};

/// Sum worked hours per normalized employee name.
///
/// Swapped start/end timestamps are counted by magnitude. An unparseable
/// timestamp aborts the whole aggregation.
pub fn aggregate_hours(entries: &[TimeEntry]) -> ReportResult<EmployeeHours> {
    let hours = entries
        .iter()
        .enumerate()
        .try_fold(EmployeeHours::new(), |acc, (position, entry)| {
            let worked = entry_hours(entry).map_err(|e| match e {
                Error::Format(message) => {
                    format_error(&format!("Time entry #{}: {}", position, message))
                }
                other => other,
            })?;
            Ok::<_, Error>(acc.with_hours(normalize_name(entry.employee_name.as_deref()), worked))
        })?;

    info!(
        "Aggregated {} time entries into {} employees",
        entries.len(),
        hours.len()
    );
    Ok(hours)
}

fn entry_hours(entry: &TimeEntry) -> ReportResult<f64> {
    let start = parse_utc_timestamp(&entry.start_time_utc)?;
    let end = parse_utc_timestamp(&entry.end_time_utc)?;
    if end < start {
        debug!(
            "Entry for {:?} ends before it starts, counting magnitude",
            entry.employee_name
        );
    }
    Ok(hours_between(&start, &end))
}

/// Order employees by descending hours; ties keep first-seen order
pub fn rank_employees(hours: &EmployeeHours) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = hours
        .iter()
        .map(|(name, total)| RankedEntry::new(name, total))
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.hours.total_cmp(&a.hours));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: Option<&str>, start: &str, end: &str) -> TimeEntry {
        TimeEntry::new(name, start, end)
    }

    #[test]
    fn test_aggregate_example() {
        let entries = vec![
            entry(Some("Alice"), "2024-01-01T08:00:00Z", "2024-01-01T12:00:00Z"),
            entry(Some(""), "2024-01-01T10:00:00Z", "2024-01-01T09:00:00Z"),
        ];

        let hours = aggregate_hours(&entries).unwrap();
        assert_eq!(hours.get("Alice"), Some(4.0));
        assert_eq!(hours.get("null"), Some(1.0));
        assert_eq!(hours.len(), 2);
    }

    #[test]
    fn test_total_matches_absolute_durations() {
        let entries = vec![
            entry(Some("Alice"), "2024-01-01T08:00:00Z", "2024-01-01T16:30:00Z"),
            entry(Some("Bob"), "2024-01-02T18:00:00Z", "2024-01-02T09:15:00Z"),
            entry(Some("Alice"), "2024-01-03T08:00:00Z", "2024-01-03T08:45:00Z"),
            entry(None, "2024-01-03T23:00:00Z", "2024-01-04T01:00:00Z"),
        ];

        let hours = aggregate_hours(&entries).unwrap();
        let expected = 8.5 + 8.75 + 0.75 + 2.0;
        assert!((hours.total() - expected).abs() < 1e-9);
        assert!(hours.iter().all(|(_, h)| h >= 0.0));
    }

    #[test]
    fn test_unnamed_entries_share_one_key() {
        let entries = vec![
            entry(None, "2024-01-01T08:00:00Z", "2024-01-01T09:00:00Z"),
            entry(Some(""), "2024-01-01T08:00:00Z", "2024-01-01T10:00:00Z"),
            entry(Some("Alice"), "2024-01-01T08:00:00Z", "2024-01-01T09:00:00Z"),
        ];

        let hours = aggregate_hours(&entries).unwrap();
        assert_eq!(hours.len(), 2);
        assert_eq!(hours.get(UNNAMED_EMPLOYEE), Some(3.0));
    }

    #[test]
    fn test_bad_timestamp_aborts() {
        let entries = vec![
            entry(Some("Alice"), "2024-01-01T08:00:00Z", "2024-01-01T12:00:00Z"),
            entry(Some("Bob"), "garbage", "2024-01-01T12:00:00Z"),
        ];

        let result = aggregate_hours(&entries);
        match result {
            Err(Error::Format(message)) => assert!(message.contains("#1"), "{message}"),
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_aggregate_empty() {
        let hours = aggregate_hours(&[]).unwrap();
        assert!(hours.is_empty());
        assert!(rank_employees(&hours).is_empty());
    }

    #[test]
    fn test_rank_descending_and_stable() {
        let hours = EmployeeHours::new()
            .with_hours("Dave", 5.0)
            .with_hours("Alice", 10.0)
            .with_hours("Bob", 5.0)
            .with_hours("Carol", 12.0)
            .with_hours("Eve", 5.0);

        let ranked = rank_employees(&hours);
        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Carol", "Alice", "Dave", "Bob", "Eve"]);
        assert!(ranked.windows(2).all(|w| w[0].hours >= w[1].hours));
    }
}
