//! The timeline processing pipeline: raw records are normalized into
//! schedule entries, milestones are derived, and the combined set is
//! assembled into the ordered sequence the chart renderer consumes.
//!
//! One invocation is a single linear pass with no state carried between
//! calls; bad rows are dropped with a warning instead of failing the batch.

use crate::calendar::WorkCalendar;
use crate::record::RawRecord;
use std::fmt;

pub mod assemble;
pub mod milestones;
pub mod normalize;

pub use assemble::{assemble, ScheduleEntry};
pub use milestones::{derive_milestones, MilestoneEntry};
pub use normalize::{normalize, NormalizedEntry};

/// Row- or group-scoped problem encountered during processing.
///
/// Warnings are returned alongside the output so library consumers can
/// surface them without depending on a particular logging backend; the
/// pipeline additionally emits them through `tracing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The row's start date parsed as neither DD.MM.YYYY nor YYYY-MM-DD;
    /// the row was dropped.
    StartUnparseable { row: usize, work_package: String },
    /// Both an end date and a working-day count were supplied; the explicit
    /// end date wins.
    EndOverridesWorkingDays { row: usize, work_package: String },
    /// A milestone group has members without completion data, so no group
    /// milestone can be derived.
    GroupMissingProgress { group: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::StartUnparseable { row, work_package } => write!(
                f,
                "row {row} ('{work_package}'): start date is missing or unparseable; row dropped"
            ),
            Warning::EndOverridesWorkingDays { row, work_package } => write!(
                f,
                "row {row} ('{work_package}'): both End and WorkingDays set; using End"
            ),
            Warning::GroupMissingProgress { group } => write!(
                f,
                "milestone group '{group}' has members without completion data; no milestone derived"
            ),
        }
    }
}

/// Output of one processing pass.
///
/// An empty `entries` vec means "nothing to render"; it is the caller's
/// decision whether that counts as a failure.
#[derive(Debug, Clone)]
pub struct TimelineResult {
    pub entries: Vec<ScheduleEntry>,
    pub warnings: Vec<Warning>,
}

/// Run the full pipeline over one input table.
pub fn process_timeline(records: &[RawRecord]) -> TimelineResult {
    let mut warnings = Vec::new();

    if records.is_empty() {
        tracing::warn!("input table is empty; nothing to process");
        return TimelineResult {
            entries: Vec::new(),
            warnings,
        };
    }

    let calendar = WorkCalendar::default();
    let normalized = normalize(records, &calendar, &mut warnings);
    let milestone_entries = derive_milestones(&normalized, &mut warnings);
    let entries = assemble(&normalized, &milestone_entries);

    if entries.is_empty() {
        tracing::warn!(
            rows = records.len(),
            "no usable schedule entries after normalization"
        );
    } else {
        tracing::info!(entries = entries.len(), "timeline data processed");
    }

    TimelineResult { entries, warnings }
}
