use super::normalize::NormalizedEntry;
use super::Warning;
use chrono::NaiveDate;
use std::collections::HashMap;

/// A zero-duration marker, either flagged on a source row or synthesized
/// from a fully completed milestone group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneEntry {
    pub work_stream: String,
    pub name: String,
    pub date: NaiveDate,
}

/// Derive milestone entries from the normalized table.
///
/// Explicit milestones take their resolved end date, falling back to the
/// start when the end collapsed below it. Group milestones are synthesized
/// once every member of a named group reports 100% completion; a single
/// member without completion data disqualifies the whole group. Group
/// members are assumed to share one work stream; when they do not, the
/// first member's stream is used without complaint (known limitation).
pub fn derive_milestones(
    entries: &[NormalizedEntry],
    warnings: &mut Vec<Warning>,
) -> Vec<MilestoneEntry> {
    let mut milestones = Vec::new();

    for entry in entries.iter().filter(|entry| entry.is_milestone_source) {
        // The end resolves to the start when nothing better was supplied, so
        // a surviving row always carries a usable milestone date.
        let date = if entry.end >= entry.start {
            entry.end
        } else {
            entry.start
        };
        milestones.push(MilestoneEntry {
            work_stream: entry.work_stream.clone(),
            name: entry.work_package.clone(),
            date,
        });
    }

    // Partition non-milestone rows by group label, first appearance first.
    let mut group_order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&NormalizedEntry>> = HashMap::new();
    for entry in entries
        .iter()
        .filter(|entry| !entry.is_milestone_source && !entry.milestone_group.is_empty())
    {
        let label = entry.milestone_group.as_str();
        if !groups.contains_key(label) {
            group_order.push(label);
        }
        groups.entry(label).or_default().push(entry);
    }

    for label in group_order {
        let members = &groups[label];

        if members
            .iter()
            .any(|member| member.percent_complete.is_none())
        {
            tracing::info!(group = label, "group has members without completion data");
            warnings.push(Warning::GroupMissingProgress {
                group: label.to_string(),
            });
            continue;
        }

        let all_complete = members
            .iter()
            .all(|member| member.percent_complete.is_some_and(|p| p >= 100.0));
        if !all_complete {
            tracing::info!(group = label, "group not yet fully complete; no milestone");
            continue;
        }

        let date = members
            .iter()
            .map(|member| member.end)
            .max()
            .expect("qualifying group has at least one member");

        milestones.push(MilestoneEntry {
            work_stream: members[0].work_stream.clone(),
            name: label.to_string(),
            date,
        });
    }

    milestones
}
