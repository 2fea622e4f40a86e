//! Output generation module for ctconv.
//!
//! This module renders parsed cheat entries into one of the supported
//! formats (JSON, plain text, pymem script) and writes the result to disk.

pub mod formatter;
pub mod json;
pub mod plain;
pub mod pymem;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cli::OutputFormat;
use crate::table::Entry;
use formatter::{create_formatter, OutputFormatter};

/// Errors that can occur during output generation.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Result of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    /// Path actually written, after extension rules were applied.
    pub path: PathBuf,
    /// Line logged for the user.
    pub summary: String,
}

/// Renders entries and writes them to a file.
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Renders `entries` and writes them to `requested`.
    ///
    /// Missing parent directories are created. For formats that force their
    /// extension the final path may differ from `requested`; it is returned
    /// in [`Written::path`].
    pub fn write(&self, entries: &[Entry], requested: &Path) -> Result<Written, OutputError> {
        let formatter = create_formatter(self.format);
        let path = Self::final_path(requested, &*formatter)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let content = formatter.format(entries);
        fs::write(&path, content)?;

        log::debug!("Written: {}", path.display());

        Ok(Written {
            summary: formatter.summary(entries.len(), &path),
            path,
        })
    }

    /// Applies the formatter's extension rule to the requested path.
    fn final_path(
        requested: &Path,
        formatter: &dyn OutputFormatter,
    ) -> Result<PathBuf, OutputError> {
        if requested.file_name().is_none() {
            return Err(OutputError::InvalidPath(format!(
                "'{}' does not name a file",
                requested.display()
            )));
        }

        let mut path = requested.to_path_buf();

        if formatter.forces_extension() {
            let has_extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(formatter.extension()));

            if !has_extension {
                path.set_extension(formatter.extension());
            }
        }

        Ok(path)
    }
}
