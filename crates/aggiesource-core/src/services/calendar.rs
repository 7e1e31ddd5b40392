//! Volunteer Calendar
//!
//! Groups volunteer logs by month for the hours calendar.

use std::collections::{BTreeMap, BTreeSet};
use crate::domain::{minutes_to_hours, VolunteerLog};

/// Logged time for one `YYYY-MM` month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    /// `YYYY-MM`, or "unknown" for logs without a date
    pub month: String,
    pub minutes: u64,
    /// One decimal place
    pub hours: f64,
    /// Distinct dates with at least one shift, ascending
    pub days: Vec<String>,
}

/// Aggregate logs by month, newest month first.
pub fn monthly_calendar(logs: &[VolunteerLog]) -> Vec<MonthSummary> {
    let mut by_month: BTreeMap<String, (u64, BTreeSet<&str>)> = BTreeMap::new();
    for log in logs {
        let month: String = log.date.chars().take(7).collect();
        let month = if month.is_empty() { "unknown".to_string() } else { month };
        let entry = by_month.entry(month).or_default();
        entry.0 += u64::from(log.minutes);
        if !log.date.is_empty() {
            entry.1.insert(log.date.as_str());
        }
    }

    by_month
        .into_iter()
        .rev()
        .map(|(month, (minutes, days))| MonthSummary {
            month,
            minutes,
            hours: minutes_to_hours(minutes),
            days: days.into_iter().map(String::from).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn log(date: &str, minutes: u32) -> VolunteerLog {
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        VolunteerLog {
            shift: "Morning".to_string(),
            event: "Pantry".to_string(),
            date: date.to_string(),
            start: at,
            end: at,
            minutes,
        }
    }

    #[test]
    fn test_groups_by_month_newest_first() {
        let logs = vec![
            log("2026-01-15", 60),
            log("2026-02-02", 45),
            log("2026-01-15", 30),
            log("2026-01-03", 20),
        ];
        let calendar = monthly_calendar(&logs);
        assert_eq!(
            calendar,
            vec![
                MonthSummary {
                    month: "2026-02".to_string(),
                    minutes: 45,
                    hours: 0.8,
                    days: vec!["2026-02-02".to_string()],
                },
                MonthSummary {
                    month: "2026-01".to_string(),
                    minutes: 110,
                    hours: 1.8,
                    days: vec!["2026-01-03".to_string(), "2026-01-15".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_undated_logs() {
        let calendar = monthly_calendar(&[log("", 90)]);
        assert_eq!(calendar.len(), 1);
        assert_eq!(calendar[0].month, "unknown");
        assert_eq!(calendar[0].hours, 1.5);
        assert!(calendar[0].days.is_empty());
    }

    #[test]
    fn test_empty() {
        assert!(monthly_calendar(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn prop_months_descending_and_minutes_conserved(
            entries in prop::collection::vec((2020u32..2030, 1u32..13, 1u32..29, 1u32..600), 0..30)
        ) {
            let logs: Vec<_> = entries
                .iter()
                .map(|(y, m, d, mins)| log(&format!("{:04}-{:02}-{:02}", y, m, d), *mins))
                .collect();
            let calendar = monthly_calendar(&logs);

            for pair in calendar.windows(2) {
                prop_assert!(pair[0].month > pair[1].month);
            }
            let total: u64 = calendar.iter().map(|m| m.minutes).sum();
            let expected: u64 = entries.iter().map(|e| u64::from(e.3)).sum();
            prop_assert_eq!(total, expected);
        }
    }
}
