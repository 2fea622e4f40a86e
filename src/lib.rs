//! Converts Cheat Engine tables into JSON, text reports and pymem scripts.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod resolve;
pub mod table;

use config::Config;
use output::{OutputWriter, Written};
use table::TableParser;

/// Parses the configured table and writes it in the configured format.
pub fn convert(config: &Config) -> error::Result<Written> {
    let entries = TableParser::parse_file(&config.input)?;

    log::debug!(
        "Rendering {} entries as {:?}",
        entries.len(),
        config.format
    );

    let written = OutputWriter::new(config.format).write(&entries, &config.output)?;
    Ok(written)
}
