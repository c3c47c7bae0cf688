//! studyplan-ingest: read task exports (CSV sheets, backend JSON) into
//! records that can be planned.

pub mod parsers;
pub mod types;

pub use parsers::{load_tasks, parse_tasks_csv, parse_tasks_csv_reader, parse_tasks_json};
pub use types::TaskRecord;
