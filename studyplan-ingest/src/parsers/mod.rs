//! Task export parsers.

mod backend_json;
mod csv_tasks;

pub use backend_json::parse_tasks_json;
pub use csv_tasks::{parse_tasks_csv, parse_tasks_csv_reader};

use anyhow::{Context, Result, bail};
use std::path::Path;

use crate::types::TaskRecord;

/// Load tasks from a `.csv` or `.json` file, chosen by extension.
pub fn load_tasks(path: impl AsRef<Path>) -> Result<Vec<TaskRecord>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("csv") => parse_tasks_csv(path),
        Some("json") => {
            let s = std::fs::read_to_string(path)
                .with_context(|| format!("read {}", path.display()))?;
            parse_tasks_json(&s).with_context(|| format!("parsing {}", path.display()))
        }
        _ => bail!(
            "unsupported task file {} (expected .csv or .json)",
            path.display()
        ),
    }
}
