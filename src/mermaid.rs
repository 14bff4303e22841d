use crate::status::Status;
use crate::timeline::ScheduleEntry;

const FALLBACK_SECTION: &str = "General Tasks";

/// Generate Mermaid Gantt chart syntax from the assembled schedule.
///
/// Entries are expected in assembler order; each run of consecutive entries
/// with the same work stream becomes one section. Entries with an empty name
/// cannot be rendered and are skipped with a warning. An empty schedule
/// yields an empty string.
pub fn generate_gantt(entries: &[ScheduleEntry], project_title: &str) -> String {
    if entries.is_empty() {
        tracing::warn!("no schedule entries; cannot generate Mermaid chart");
        return String::new();
    }

    let mut lines = vec![
        "gantt".to_string(),
        format!("    title {project_title}"),
        "    dateFormat  YYYY-MM-DD".to_string(),
    ];

    let mut current_section: Option<&str> = None;
    for entry in entries {
        if current_section != Some(entry.work_stream.as_str()) {
            let section_name = if entry.work_stream.trim().is_empty() {
                FALLBACK_SECTION
            } else {
                entry.work_stream.as_str()
            };
            lines.push(format!("    section {section_name}"));
            current_section = Some(entry.work_stream.as_str());
        }

        let name = entry.name.trim();
        if name.is_empty() {
            tracing::warn!(date = %entry.date_key, "skipping entry with empty name");
            continue;
        }

        match entry.status {
            Status::Milestone => {
                lines.push(format!("    {name} :milestone, {}, 0d", entry.date_key));
            }
            status => {
                lines.push(format!(
                    "    {name} :{status}, {}, {}d",
                    entry.date_key, entry.duration_days
                ));
            }
        }
    }

    lines.join("\n")
}
