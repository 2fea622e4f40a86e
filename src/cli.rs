use std::path::PathBuf;

use clap::Parser;

/// Cheat Table converter
///
/// Converts a Cheat Engine table (.CT) into JSON, a plain text report, or a
/// pymem script that keeps reading the same addresses from a live process.
///
/// Values not given as options are asked for interactively.
#[derive(Parser, Debug)]
#[command(name = "ctconv")]
#[command(version)]
#[command(about, long_about)]
pub struct Cli {
    /// Suppress colored output
    #[arg(short = 'n', long = "no-color")]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long = "verbose")]
    pub verbose: bool,

    /// Cheat table to convert
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// File to write the converted output to
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format: json, txt, pymem
    #[arg(short = 'f', long = "format", ignore_case = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Txt,
    Pymem,
}

impl OutputFormat {
    /// Parses a format name typed at the prompt, ignoring case and
    /// surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as clap::ValueEnum>::from_str(name.trim(), true).ok()
    }
}
