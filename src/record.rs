use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Accepted truthy spellings for the milestone flag, matched case-insensitively.
const TRUE_VALUES: [&str; 5] = ["true", "yes", "1", "t", "y"];

/// One raw row of the input table, exactly as the loader hands it over.
///
/// Every field is kept as text so that a missing column, an empty cell, and
/// malformed content all look the same to the engine; the typed accessors
/// below perform the best-effort coercions and return `None` (or a default)
/// for anything they cannot make sense of.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "WorkStream", default)]
    pub work_stream: String,
    #[serde(rename = "WorkPackage", default)]
    pub work_package: String,
    #[serde(rename = "Start", default)]
    pub start: String,
    #[serde(rename = "End", default)]
    pub end: String,
    #[serde(rename = "WorkingDays", default)]
    pub working_days: String,
    #[serde(rename = "PercentComplete", default)]
    pub percent_complete: String,
    #[serde(rename = "IsMilestone", default)]
    pub is_milestone: String,
    #[serde(rename = "MilestoneGroup", default)]
    pub milestone_group: String,
}

impl RawRecord {
    pub fn new(
        work_stream: impl Into<String>,
        work_package: impl Into<String>,
        start: impl Into<String>,
    ) -> Self {
        Self {
            work_stream: work_stream.into(),
            work_package: work_package.into(),
            start: start.into(),
            ..Self::default()
        }
    }

    /// Start date, `None` when the text parses as neither accepted format.
    pub fn start_date(&self) -> Option<NaiveDate> {
        parse_date_text(&self.start)
    }

    /// End date, `None` when absent or unparseable.
    pub fn end_date(&self) -> Option<NaiveDate> {
        parse_date_text(&self.end)
    }

    /// Working-day count, `None` when absent or not a finite number.
    pub fn working_days(&self) -> Option<f64> {
        parse_number_text(&self.working_days)
    }

    /// Completion percentage clamped to 0-100, `None` when absent or
    /// unparseable.
    pub fn percent_complete(&self) -> Option<f64> {
        parse_number_text(&self.percent_complete).map(|value| value.clamp(0.0, 100.0))
    }

    /// Explicit milestone flag; anything outside the truthy set is false.
    pub fn is_milestone(&self) -> bool {
        let flag = self.is_milestone.trim().to_ascii_lowercase();
        TRUE_VALUES.contains(&flag.as_str())
    }

    pub fn milestone_group(&self) -> &str {
        self.milestone_group.trim()
    }
}

/// Parse date text in either `DD.MM.YYYY` or `YYYY-MM-DD` form.
fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%d.%m.%Y")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .ok()
}

fn parse_number_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn dates_accept_both_formats() {
        let mut record = RawRecord::new("WS", "Pkg", "15.03.2024");
        assert_eq!(record.start_date(), Some(d(2024, 3, 15)));
        record.start = "2024-03-15".into();
        assert_eq!(record.start_date(), Some(d(2024, 3, 15)));
    }

    #[test]
    fn garbage_dates_become_none() {
        let mut record = RawRecord::new("WS", "Pkg", "not-a-date");
        assert_eq!(record.start_date(), None);
        record.start = "2024-13-40".into();
        assert_eq!(record.start_date(), None);
        record.start = "  ".into();
        assert_eq!(record.start_date(), None);
    }

    #[test]
    fn milestone_flag_truthy_set() {
        let mut record = RawRecord::default();
        for value in ["true", "TRUE", "Yes", "1", "t", " y "] {
            record.is_milestone = value.into();
            assert!(record.is_milestone(), "expected truthy: {value}");
        }
        for value in ["", "false", "no", "0", "2", "maybe"] {
            record.is_milestone = value.into();
            assert!(!record.is_milestone(), "expected falsy: {value}");
        }
    }

    #[test]
    fn percent_is_clamped() {
        let mut record = RawRecord::default();
        record.percent_complete = "250".into();
        assert_eq!(record.percent_complete(), Some(100.0));
        record.percent_complete = "-10".into();
        assert_eq!(record.percent_complete(), Some(0.0));
        record.percent_complete = "abc".into();
        assert_eq!(record.percent_complete(), None);
    }

    #[test]
    fn working_days_rejects_non_numeric() {
        let mut record = RawRecord::default();
        record.working_days = "3.7".into();
        assert_eq!(record.working_days(), Some(3.7));
        record.working_days = "three".into();
        assert_eq!(record.working_days(), None);
        record.working_days = "NaN".into();
        assert_eq!(record.working_days(), None);
    }
}
