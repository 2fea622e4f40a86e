//! Output formatter trait and factory.
//!
//! Every output format implements `OutputFormatter`. Formatters are
//! stateless: they read the entry list and return the complete file content.

use std::path::Path;

use crate::cli::OutputFormat;
use crate::table::Entry;

/// Trait for rendering cheat entries into output file content.
pub trait OutputFormatter {
    /// Renders all entries, in order, into a single string.
    fn format(&self, entries: &[Entry]) -> String;

    /// Returns the file extension for this format.
    fn extension(&self) -> &'static str;

    /// Whether the output file must carry [`extension`](Self::extension),
    /// replacing whatever extension the user supplied.
    fn forces_extension(&self) -> bool {
        false
    }

    /// One-line summary logged after the file was written.
    fn summary(&self, entry_count: usize, path: &Path) -> String;
}

/// Creates the appropriate formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    use super::json::JsonFormatter;
    use super::plain::PlainFormatter;
    use super::pymem::PymemFormatter;

    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Txt => Box::new(PlainFormatter),
        OutputFormat::Pymem => Box::new(PymemFormatter),
    }
}
