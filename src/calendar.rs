use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashSet;

/// Inclusive day count between two dates.
///
/// Returns 0 when either date is missing or the end precedes the start;
/// a same-day span counts as 1.
pub fn inclusive_duration(start: Option<NaiveDate>, end: Option<NaiveDate>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) if end >= start => (end - start).num_days() + 1,
        _ => 0,
    }
}

/// Working-day calendar used for end-date projection.
///
/// The timeline engine only knows Mon-Fri business weeks; there is no
/// holiday list.
pub struct WorkCalendar {
    non_working_days: HashSet<Weekday>,
}

impl Default for WorkCalendar {
    fn default() -> Self {
        Self {
            non_working_days: HashSet::from([Weekday::Sat, Weekday::Sun]),
        }
    }
}

impl WorkCalendar {
    /// Check if a date is available for scheduling
    pub fn is_available(&self, date: NaiveDate) -> bool {
        !self.non_working_days.contains(&date.weekday())
    }

    /// Find the next available date after a given date
    pub fn next_available(&self, from: NaiveDate) -> NaiveDate {
        let mut current = from + Duration::days(1);
        while !self.is_available(current) {
            current = current + Duration::days(1);
        }
        current
    }

    /// Find a date N available days ahead
    pub fn find_next_available(&self, from: NaiveDate, days_ahead: i64) -> NaiveDate {
        let mut current = from;
        let mut count = 0;

        while count < days_ahead {
            current = current + Duration::days(1);
            if self.is_available(current) {
                count += 1;
            }
        }
        current
    }

    /// Project the end date reached by spending `working_days` business days
    /// starting at `start`.
    ///
    /// The start date counts as the first working day when it is itself a
    /// business day; a weekend start rolls forward to the next business day
    /// before counting. Missing, non-finite, or non-positive values (after
    /// truncation toward zero, so 3.7 behaves as 3) leave `start` unchanged.
    pub fn project_end_date(&self, start: NaiveDate, working_days: Option<f64>) -> NaiveDate {
        let days = match working_days {
            Some(value) if value.is_finite() => value.trunc() as i64,
            _ => return start,
        };
        if days <= 0 {
            return start;
        }

        let first = if self.is_available(start) {
            start
        } else {
            self.next_available(start)
        };
        self.find_next_available(first, days - 1)
    }
}
