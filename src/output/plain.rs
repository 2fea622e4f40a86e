//! Plain text output formatter.
//!
//! Each entry becomes a block of its title, the indented type and address,
//! and a blank separator line.

use std::path::Path;

use super::formatter::OutputFormatter;
use crate::table::Entry;

/// Formatter that outputs a human-readable text report.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format(&self, entries: &[Entry]) -> String {
        let mut lines = Vec::with_capacity(entries.len() * 4);

        for entry in entries {
            lines.push(entry.title.clone());
            lines.push(format!("  VariableType: {}", entry.variable_type));
            lines.push(format!("  Address: {}", entry.address));
            lines.push(String::new());
        }

        lines.join("\n")
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn summary(&self, entry_count: usize, path: &Path) -> String {
        format!("Wrote {} entries to {} (TXT)", entry_count, path.display())
    }
}
