//! Trailing date windows over check-in history.
//!
//! The engine reads a 7-day "recent" window for most rules and a 14-day
//! "trend" window for trend analysis. Both are plain filters on the
//! calendar `date` of each record, newest first.

use crate::CheckinRecord;
use chrono::{Duration, NaiveDate};

/// Days covered by the recent window
pub const RECENT_DAYS: i64 = 7;

/// Days covered by the trend window
pub const TREND_DAYS: i64 = 14;

/// Records with `date >= today - days`, sorted newest first
///
/// Future-dated records are kept; only the lower bound is applied.
pub fn trailing_window(
    history: &[CheckinRecord],
    today: NaiveDate,
    days: i64,
) -> Vec<CheckinRecord> {
    let cutoff = today - Duration::days(days);

    let mut window: Vec<CheckinRecord> = history
        .iter()
        .filter(|c| c.date >= cutoff)
        .cloned()
        .collect();

    // Stable, so same-day duplicates keep their input order
    window.sort_by(|a, b| b.date.cmp(&a.date));
    window
}

/// The pair of windows an engine instance works from
#[derive(Clone, Debug)]
pub struct Windows {
    pub recent: Vec<CheckinRecord>,
    pub trend: Vec<CheckinRecord>,
}

impl Windows {
    pub fn build(history: &[CheckinRecord], today: NaiveDate) -> Self {
        let recent = trailing_window(history, today, RECENT_DAYS);
        let trend = trailing_window(history, today, TREND_DAYS);

        tracing::debug!(
            "Built windows for {}: {} recent, {} trend (of {} records)",
            today,
            recent.len(),
            trend.len(),
            history.len()
        );

        Self { recent, trend }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let today = day(20);
        let history = vec![
            CheckinRecord::new(day(12)), // 8 days ago
            CheckinRecord::new(day(13)), // exactly 7 days ago
            CheckinRecord::new(day(20)),
        ];

        let recent = trailing_window(&history, today, RECENT_DAYS);
        let dates: Vec<_> = recent.iter().map(|c| c.date).collect();
        assert_eq!(dates, vec![day(20), day(13)]);
    }

    #[test]
    fn test_trend_cutoff_is_fourteen_days() {
        let today = day(20);
        let history = vec![
            CheckinRecord::new(day(5)), // 15 days ago
            CheckinRecord::new(day(6)), // exactly 14 days ago
            CheckinRecord::new(day(18)),
        ];

        let windows = Windows::build(&history, today);
        let recent: Vec<_> = windows.recent.iter().map(|c| c.date).collect();
        let trend: Vec<_> = windows.trend.iter().map(|c| c.date).collect();

        assert_eq!(recent, vec![day(18)]);
        assert_eq!(trend, vec![day(18), day(6)]);
    }

    #[test]
    fn test_windows_sorted_newest_first() {
        let today = day(20);
        let history = vec![
            CheckinRecord::new(day(15)),
            CheckinRecord::new(day(19)),
            CheckinRecord::new(day(7)),
            CheckinRecord::new(day(17)),
        ];

        let windows = Windows::build(&history, today);
        let recent: Vec<_> = windows.recent.iter().map(|c| c.date).collect();
        let trend: Vec<_> = windows.trend.iter().map(|c| c.date).collect();

        assert_eq!(recent, vec![day(19), day(17), day(15)]);
        assert_eq!(trend, vec![day(19), day(17), day(15), day(7)]);
    }

    #[test]
    fn test_empty_history() {
        let windows = Windows::build(&[], day(20));
        assert!(windows.recent.is_empty());
        assert!(windows.trend.is_empty());
    }
}
