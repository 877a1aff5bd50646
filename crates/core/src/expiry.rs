//! Calendar-date expiry rules for published records.
//!
//! Events expire by their `date` and opportunities by their `deadline`.
//! Both are plain calendar dates with no time-of-day: a record is expired
//! when its date is strictly before today, so records dated today are
//! still live.

use crate::types::{CalendarDate, DbId};

/// Whether a record dated `date` has expired as of `today`.
pub fn is_past(date: CalendarDate, today: CalendarDate) -> bool {
    date < today
}

/// Filter `(id, date)` pairs down to the ids expired as of `today`.
///
/// Returns an empty vec when nothing has expired, in which case the caller
/// must not issue a delete at all (the sweep is a no-op).
pub fn expired_ids(rows: &[(DbId, CalendarDate)], today: CalendarDate) -> Vec<DbId> {
    rows.iter()
        .filter(|(_, date)| is_past(*date, today))
        .map(|(id, _)| *id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_yesterday_is_past() {
        assert!(is_past(date(2025, 5, 31), date(2025, 6, 1)));
    }

    #[test]
    fn test_today_is_retained() {
        assert!(!is_past(date(2025, 6, 1), date(2025, 6, 1)));
    }

    #[test]
    fn test_tomorrow_is_retained() {
        assert!(!is_past(date(2025, 6, 2), date(2025, 6, 1)));
    }

    #[test]
    fn test_expired_ids_picks_strictly_past() {
        let rows = vec![
            (1, date(2020, 1, 1)),
            (2, date(2999, 1, 1)),
            (3, date(2025, 6, 1)),
        ];
        let ids = expired_ids(&rows, date(2025, 6, 1));
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_expired_ids_empty_when_nothing_past() {
        let rows = vec![(1, date(2999, 1, 1))];
        assert!(expired_ids(&rows, date(2025, 6, 1)).is_empty());
    }

    #[test]
    fn test_expired_ids_empty_input() {
        assert!(expired_ids(&[], date(2025, 6, 1)).is_empty());
    }
}
