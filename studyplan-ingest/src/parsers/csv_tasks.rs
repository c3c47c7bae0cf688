//! Task sheets exported as CSV.
//!
//! Expected header (case-insensitive, any order, extra columns ignored):
//! title,subject,assignment_type,due_date[,description][,status]
//!
//! `type` and `due` are accepted as short column names.

use anyhow::{Context, Result, bail};
use csv::StringRecord;
use std::io::Read;
use std::path::Path;

use crate::types::TaskRecord;

struct Columns {
    title: usize,
    subject: Option<usize>,
    assignment_type: Option<usize>,
    due_date: Option<usize>,
    description: Option<usize>,
    status: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.contains(&header_name(h).as_str()))
        };

        let Some(title) = find(&["title"]) else {
            bail!("CSV header has no 'title' column");
        };

        Ok(Self {
            title,
            subject: find(&["subject"]),
            assignment_type: find(&["assignment_type", "type"]),
            due_date: find(&["due_date", "due"]),
            description: find(&["description"]),
            status: find(&["status"]),
        })
    }
}

/// Spreadsheet exports often start with a byte order mark.
fn header_name(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_ascii_lowercase()
}

fn cell(record: &StringRecord, idx: Option<usize>) -> String {
    idx.and_then(|i| record.get(i))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

/// Parse a task CSV file.
pub fn parse_tasks_csv(path: impl AsRef<Path>) -> Result<Vec<TaskRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_tasks_csv_reader(file).with_context(|| format!("parsing {}", path.display()))
}

/// Parse task CSV from any reader. Rows without a title are skipped.
pub fn parse_tasks_csv_reader<R: Read>(reader: R) -> Result<Vec<TaskRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;
    let mut out = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let title = cell(&record, Some(columns.title));
        if title.is_empty() {
            // +2: one for the header, one for 1-based rows
            tracing::warn!(row = i + 2, "skipping task row without a title");
            continue;
        }

        out.push(TaskRecord {
            id: None,
            title,
            subject: cell(&record, columns.subject),
            description: cell(&record, columns.description),
            due_date: non_empty(cell(&record, columns.due_date)),
            assignment_type: cell(&record, columns.assignment_type),
            priority: None,
            status: non_empty(cell(&record, columns.status)),
        });
    }

    Ok(out)
}
