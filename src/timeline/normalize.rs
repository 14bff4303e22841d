use super::Warning;
use crate::calendar::{inclusive_duration, WorkCalendar};
use crate::record::RawRecord;
use crate::status::{classify, Status};
use chrono::NaiveDate;

/// One input row after validation and end-date resolution.
///
/// The resolved end is never earlier than the start except when an explicit
/// End date preceded Start, in which case the duration collapses to 0 and
/// the assembler excludes the entry from regular rendering. Entries are kept
/// around regardless so the milestone deriver can still see them (a
/// milestone only needs a date, not a positive duration).
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEntry {
    pub work_stream: String,
    pub work_package: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub duration_days: i64,
    pub status: Status,
    pub is_milestone_source: bool,
    pub percent_complete: Option<f64>,
    pub milestone_group: String,
}

/// Normalize raw rows: coerce field types, resolve each row's end date, and
/// drop rows without a usable start date.
///
/// End resolution order: an explicit End date always wins (with a warning
/// when WorkingDays was also set), otherwise a positive WorkingDays count
/// projects an end via the calendar, otherwise the end equals the start.
pub fn normalize(
    records: &[RawRecord],
    calendar: &WorkCalendar,
    warnings: &mut Vec<Warning>,
) -> Vec<NormalizedEntry> {
    let mut entries = Vec::with_capacity(records.len());

    for (row, record) in records.iter().enumerate() {
        let work_package = record.work_package.trim().to_string();

        let Some(start) = record.start_date() else {
            tracing::warn!(row, work_package = %work_package, "dropping row: start date missing or unparseable");
            warnings.push(Warning::StartUnparseable { row, work_package });
            continue;
        };

        let end_date = record.end_date();
        let working_days = record.working_days();
        let has_working_days = working_days.is_some_and(|days| days.trunc() > 0.0);

        if end_date.is_some() && has_working_days {
            tracing::warn!(row, work_package = %work_package, "both End and WorkingDays set; End takes precedence");
            warnings.push(Warning::EndOverridesWorkingDays {
                row,
                work_package: work_package.clone(),
            });
        }

        let end = match end_date {
            Some(end) => end,
            None if has_working_days => calendar.project_end_date(start, working_days),
            None => start,
        };

        let percent_complete = record.percent_complete();

        entries.push(NormalizedEntry {
            work_stream: record.work_stream.trim().to_string(),
            work_package,
            start,
            end,
            duration_days: inclusive_duration(Some(start), Some(end)),
            status: classify(percent_complete),
            is_milestone_source: record.is_milestone(),
            percent_complete,
            milestone_group: record.milestone_group().to_string(),
        });
    }

    entries
}
