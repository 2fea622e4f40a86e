use std::fs;
use std::path::Path;

use log::debug;
use thiserror::Error;

use super::model::Entry;
use super::tree::{parse_document, Element};

/// Container element that normally wraps all entries of a table.
const ENTRIES_CONTAINER: &str = "CheatEntries";
const ENTRY_ELEMENT: &str = "CheatEntry";

/// Child elements tried in order when resolving an entry's title.
const TITLE_FIELDS: [&str; 3] = ["Description", "Name", "text"];

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Cannot read cheat table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cheat table is not valid UTF-8: {0}")]
    Encoding(String),

    #[error("XML error at byte {position}: {message}")]
    Xml { position: u64, message: String },

    #[error("Malformed XML: {0}")]
    Malformed(String),

    #[error("Document has no root element")]
    MissingRoot,
}

/// Parses cheat tables into ordered [`Entry`] lists.
pub struct TableParser;

impl TableParser {
    /// Reads and parses the table at `path`.
    pub fn parse_file(path: &Path) -> Result<Vec<Entry>, ParseError> {
        let bytes = fs::read(path)?;
        let xml = String::from_utf8(bytes).map_err(|e| ParseError::Encoding(e.to_string()))?;

        debug!("Read {} bytes from {}", xml.len(), path.display());

        Self::parse_str(&xml)
    }

    /// Parses a table held in memory.
    pub fn parse_str(xml: &str) -> Result<Vec<Entry>, ParseError> {
        let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
        let root = parse_document(xml)?;

        let entries: Vec<Entry> = Self::find_entries(&root)
            .into_iter()
            .map(Self::to_entry)
            .collect();

        debug!("Parsed {} cheat entries", entries.len());

        Ok(entries)
    }

    /// Locates entry elements.
    ///
    /// Entries are searched below the `CheatEntries` container when the root
    /// has one. Tables without the container (older or hand-edited files) are
    /// searched as a whole. Nested entries are included either way.
    fn find_entries(root: &Element) -> Vec<&Element> {
        match root.child(ENTRIES_CONTAINER) {
            Some(container) => {
                debug!("Searching entries below <{}>", ENTRIES_CONTAINER);
                container.descendants_named(ENTRY_ELEMENT)
            }
            None => {
                debug!(
                    "No <{}> container, searching the whole document",
                    ENTRIES_CONTAINER
                );
                root.descendants_named(ENTRY_ELEMENT)
            }
        }
    }

    fn to_entry(element: &Element) -> Entry {
        let title = TITLE_FIELDS
            .iter()
            .map(|field| clean_text(element.child_text(field)))
            .find(|text| !text.is_empty())
            .unwrap_or_default();

        Entry {
            title,
            variable_type: clean_text(element.child_text("VariableType")),
            address: clean_text(element.child_text("Address")),
        }
    }
}

/// Trims whitespace and removes one pair of matching enclosing quotes.
///
/// Only a single layer is removed, and only when both ends carry the same
/// quote character. The text inside the quotes is trimmed again.
pub fn clean_text(text: &str) -> String {
    let trimmed = text.trim();

    for quote in ['"', '\''] {
        if trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            // A lone quote character has nothing inside it.
            let inner = trimmed.get(1..trimmed.len() - 1).unwrap_or("");
            return inner.trim().to_string();
        }
    }

    trimmed.to_string()
}
