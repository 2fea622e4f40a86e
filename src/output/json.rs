//! JSON output formatter.
//!
//! Emits the raw entry fields as an array of
//! `{"title": ..., "details": {"VariableType": ..., "Address": ...}}`
//! objects. No address or type resolution is applied.

use std::path::Path;

use serde::Serialize;

use super::formatter::OutputFormatter;
use crate::table::Entry;

#[derive(Serialize)]
struct Record<'a> {
    title: &'a str,
    details: Details<'a>,
}

#[derive(Serialize)]
struct Details<'a> {
    #[serde(rename = "VariableType")]
    variable_type: &'a str,
    #[serde(rename = "Address")]
    address: &'a str,
}

impl<'a> From<&'a Entry> for Record<'a> {
    fn from(entry: &'a Entry) -> Self {
        Record {
            title: &entry.title,
            details: Details {
                variable_type: &entry.variable_type,
                address: &entry.address,
            },
        }
    }
}

/// Formatter that outputs entries as pretty-printed JSON.
///
/// Indentation is two spaces and non-ASCII text is written as-is.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, entries: &[Entry]) -> String {
        let records: Vec<Record> = entries.iter().map(Record::from).collect();

        serde_json::to_string_pretty(&records).expect("JSON serialization should not fail")
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn summary(&self, entry_count: usize, path: &Path) -> String {
        format!("Wrote {} entries to {} (JSON)", entry_count, path.display())
    }
}
