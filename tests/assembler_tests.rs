use timeline_tool::record::RawRecord;
use timeline_tool::status::Status;
use timeline_tool::timeline::process_timeline;

fn task(stream: &str, name: &str, start: &str, end: &str, percent: &str) -> RawRecord {
    let mut raw = RawRecord::new(stream, name, start);
    raw.end = end.into();
    raw.percent_complete = percent.into();
    raw
}

#[test]
fn end_to_end_scenario() {
    let mut task_b = RawRecord::new("WS1", "Task B", "2024-01-04"); // Thursday
    task_b.working_days = "3".into();
    task_b.percent_complete = "100".into();

    let records = vec![
        task("WS1", "Task A", "2024-01-01", "2024-01-03", "0"),
        task_b,
    ];

    let result = process_timeline(&records);
    assert!(result.warnings.is_empty());
    assert_eq!(result.entries.len(), 2);

    let a = &result.entries[0];
    assert_eq!(a.name, "Task A");
    assert_eq!(a.date_key, "2024-01-01");
    assert_eq!(a.duration_days, 3);
    assert_eq!(a.status, Status::Active);

    let b = &result.entries[1];
    assert_eq!(b.name, "Task B");
    assert_eq!(b.date_key, "2024-01-04");
    assert_eq!(b.duration_days, 5); // Thu -> Mon via business days
    assert_eq!(b.status, Status::Done);
}

#[test]
fn entries_sort_by_stream_then_date() {
    let records = vec![
        task("WS2", "Late", "2024-02-01", "2024-02-02", ""),
        task("WS1", "Second", "2024-01-10", "2024-01-12", ""),
        task("WS1", "First", "2024-01-01", "2024-01-05", ""),
    ];

    let result = process_timeline(&records);
    let names: Vec<&str> = result.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Late"]);
}

#[test]
fn ties_keep_original_relative_order() {
    let records = vec![
        task("WS1", "Alpha", "2024-01-01", "2024-01-02", ""),
        task("WS1", "Beta", "2024-01-01", "2024-01-03", ""),
        task("WS1", "Gamma", "2024-01-01", "2024-01-04", ""),
    ];

    let result = process_timeline(&records);
    let names: Vec<&str> = result.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
}

#[test]
fn milestones_interleave_chronologically() {
    let mut milestone = RawRecord::new("WS1", "Checkpoint", "2024-01-08");
    milestone.is_milestone = "true".into();

    let records = vec![
        task("WS1", "Task A", "2024-01-01", "2024-01-05", "100"),
        milestone,
        task("WS1", "Task B", "2024-01-10", "2024-01-12", "0"),
    ];

    let result = process_timeline(&records);
    let names: Vec<&str> = result.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Task A", "Checkpoint", "Task B"]);
    assert_eq!(result.entries[1].status, Status::Milestone);
    assert_eq!(result.entries[1].duration_days, 0);
}

#[test]
fn explicit_milestone_rows_produce_no_task_bar() {
    let mut milestone = task("WS1", "Release", "2024-01-01", "2024-01-20", "100");
    milestone.is_milestone = "true".into();

    let result = process_timeline(&[milestone]);
    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.entries[0].status, Status::Milestone);
    assert_eq!(result.entries[0].duration_days, 0);
}

#[test]
fn dropped_rows_shrink_the_output() {
    let records = vec![
        task("WS1", "Good", "2024-01-01", "2024-01-02", ""),
        task("WS1", "Bad", "garbage", "2024-01-02", ""),
        task("WS1", "Also Good", "2024-01-03", "2024-01-04", ""),
    ];

    let result = process_timeline(&records);
    assert_eq!(result.entries.len(), 2);
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn empty_input_is_empty_output() {
    let result = process_timeline(&[]);
    assert!(result.entries.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn all_rows_dropped_is_empty_output_not_error() {
    let records = vec![
        task("WS1", "Bad 1", "nope", "", ""),
        task("WS1", "Bad 2", "", "", ""),
    ];

    let result = process_timeline(&records);
    assert!(result.entries.is_empty());
    assert_eq!(result.warnings.len(), 2);
}

#[test]
fn processing_is_deterministic() {
    let records = vec![
        task("WS2", "B", "2024-01-02", "2024-01-03", "100"),
        task("WS1", "A", "2024-01-01", "2024-01-05", "50"),
        {
            let mut m = RawRecord::new("WS1", "M", "2024-01-04");
            m.is_milestone = "true".into();
            m
        },
    ];

    let first = process_timeline(&records);
    let second = process_timeline(&records);
    assert_eq!(first.entries, second.entries);
    assert_eq!(first.warnings, second.warnings);
}

#[test]
fn completed_group_emits_tasks_and_milestone() {
    let mut a = task("WS1", "Task A", "2024-01-01", "2024-01-05", "100");
    a.milestone_group = "G1".into();
    let mut b = task("WS1", "Task B", "2024-01-03", "2024-01-08", "100");
    b.milestone_group = "G1".into();

    let result = process_timeline(&[a, b]);
    let names: Vec<&str> = result.entries.iter().map(|e| e.name.as_str()).collect();
    // Both task bars stay, plus the synthesized group milestone at the max end.
    assert_eq!(names, vec!["Task A", "Task B", "G1"]);
    assert_eq!(result.entries[2].date_key, "2024-01-08");
    assert_eq!(result.entries[2].status, Status::Milestone);
}

#[test]
fn incomplete_group_emits_tasks_unchanged() {
    let mut a = task("WS1", "Task A", "2024-01-01", "2024-01-05", "100");
    a.milestone_group = "G1".into();
    let mut b = task("WS1", "Task B", "2024-01-03", "2024-01-08", "50");
    b.milestone_group = "G1".into();

    let result = process_timeline(&[a, b]);
    let names: Vec<&str> = result.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Task A", "Task B"]);
}
