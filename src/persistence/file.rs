use super::{PersistenceError, PersistenceResult};
use crate::record::RawRecord;
use crate::timeline::ScheduleEntry;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Columns that must be present in the input header; every other column is
/// optional and treated like an all-empty one when absent.
const REQUIRED_COLUMNS: [&str; 2] = ["WorkPackage", "Start"];

/// Load raw timeline records from a CSV file.
///
/// A file with headers but no data rows loads as an empty vec; the engine
/// treats that as "nothing to render" rather than a failure.
pub fn load_records_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<RawRecord>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|header| header.trim() == *column))
        .collect();
    if !missing.is_empty() {
        return Err(PersistenceError::InvalidData(format!(
            "missing required columns: {}",
            missing.join(", ")
        )));
    }

    let mut records = Vec::new();
    for record in reader.deserialize::<RawRecord>() {
        records.push(record?);
    }
    Ok(records)
}

/// Save assembled schedule entries as pretty-printed JSON.
pub fn save_entries_to_json<P: AsRef<Path>>(
    entries: &[ScheduleEntry],
    path: P,
) -> PersistenceResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, entries)?;
    Ok(())
}

/// Write generated Mermaid syntax to a `.mmd` file.
pub fn save_mermaid_to_file<P: AsRef<Path>>(mermaid: &str, path: P) -> PersistenceResult<()> {
    let mut file = File::create(path)?;
    file.write_all(mermaid.as_bytes())?;
    if !mermaid.ends_with('\n') {
        file.write_all(b"\n")?;
    }
    Ok(())
}
