pub mod calendar;
pub mod mermaid;
pub mod persistence;
pub mod record;
pub mod status;
pub mod timeline;

pub use calendar::WorkCalendar;
pub use mermaid::generate_gantt;
pub use persistence::{
    load_records_from_csv, save_entries_to_json, save_mermaid_to_file, PersistenceError,
};
pub use record::RawRecord;
pub use status::Status;
pub use timeline::{process_timeline, ScheduleEntry, TimelineResult, Warning};
