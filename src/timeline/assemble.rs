use super::milestones::MilestoneEntry;
use super::normalize::NormalizedEntry;
use crate::status::Status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Unified output record handed to the chart renderer: either a duration bar
/// or a zero-duration milestone line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub work_stream: String,
    pub name: String,
    /// ISO start date for tasks, milestone date for milestones; also the
    /// chronological sort key.
    pub date_key: String,
    pub duration_days: i64,
    pub status: Status,
}

impl ScheduleEntry {
    pub fn sort_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date_key, DATE_KEY_FORMAT).ok()
    }
}

/// Merge normalized tasks and derived milestones into the final ordered
/// sequence.
///
/// Explicit-milestone source rows never produce a task bar, and neither do
/// rows whose duration collapsed to zero. The result is sorted by work
/// stream, then chronologically; entries whose date key does not parse sort
/// after all dated entries within their stream, and ties keep their original
/// relative order. An empty result is a valid outcome, not an error.
pub fn assemble(
    normalized: &[NormalizedEntry],
    milestones: &[MilestoneEntry],
) -> Vec<ScheduleEntry> {
    let mut entries: Vec<ScheduleEntry> = Vec::with_capacity(normalized.len() + milestones.len());

    for entry in normalized
        .iter()
        .filter(|entry| !entry.is_milestone_source && entry.duration_days > 0)
    {
        entries.push(ScheduleEntry {
            work_stream: entry.work_stream.clone(),
            name: entry.work_package.clone(),
            date_key: entry.start.format(DATE_KEY_FORMAT).to_string(),
            duration_days: entry.duration_days,
            status: entry.status,
        });
    }

    for milestone in milestones {
        entries.push(ScheduleEntry {
            work_stream: milestone.work_stream.clone(),
            name: milestone.name.clone(),
            date_key: milestone.date.format(DATE_KEY_FORMAT).to_string(),
            duration_days: 0,
            status: Status::Milestone,
        });
    }

    // sort_by is stable, which is what keeps tie order deterministic.
    entries.sort_by(|a, b| {
        a.work_stream
            .cmp(&b.work_stream)
            .then_with(|| compare_dates(a.sort_date(), b.sort_date()))
    });

    entries
}

fn compare_dates(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
