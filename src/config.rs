use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cli::{Cli, OutputFormat};
use crate::error::CtconvError;
use crate::prompt::Prompter;

const INPUT_PROMPT: &str = "Enter input .ct file path: ";
const OUTPUT_PROMPT: &str = "Enter output file path: ";
const FORMAT_PROMPT: &str = "Output format (json/txt/pymem): ";

#[derive(Debug)]
pub struct Config {
    pub no_color: bool,
    pub verbose: bool,
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
}

/// Conditions that end the run early without writing anything.
///
/// These are reported to the user but are not failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AbortReason {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Invalid format '{0}'. Choose json, txt, or pymem.")]
    InvalidFormat(String),
}

/// Outcome of resolving the configuration.
#[derive(Debug)]
pub enum Resolution {
    Ready(Config),
    Abort(AbortReason),
}

impl Config {
    /// Builds the configuration from command line options, prompting for
    /// every value that was not given.
    ///
    /// The input path is checked right after it is known, so a missing table
    /// ends the run before the remaining questions are asked.
    pub fn resolve<R: BufRead, W: Write>(
        cli: Cli,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Resolution, CtconvError> {
        let input = match cli.input {
            Some(path) => path,
            None => Self::prompt_path(prompter, INPUT_PROMPT)?,
        };

        if !input.is_file() {
            return Ok(Resolution::Abort(AbortReason::InputNotFound(input)));
        }

        let output = match cli.output {
            Some(path) => path,
            None => Self::prompt_path(prompter, OUTPUT_PROMPT)?,
        };

        if output.as_os_str().is_empty() {
            return Err(CtconvError::Config("Output path is required".to_string()));
        }

        let format = match cli.format {
            Some(format) => format,
            None => {
                let answer = prompter.ask(FORMAT_PROMPT)?;
                match OutputFormat::from_name(&answer) {
                    Some(format) => format,
                    None => {
                        return Ok(Resolution::Abort(AbortReason::InvalidFormat(
                            answer.trim().to_lowercase(),
                        )));
                    }
                }
            }
        };

        Ok(Resolution::Ready(Self {
            no_color: cli.no_color,
            verbose: cli.verbose,
            input,
            output,
            format,
        }))
    }

    fn prompt_path<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        question: &str,
    ) -> Result<PathBuf, CtconvError> {
        let answer = prompter.ask(question)?;
        Ok(clean_path(&answer).to_path_buf())
    }
}

/// Strips the quotes and spaces that terminals add around dragged-in paths.
fn clean_path(answer: &str) -> &Path {
    Path::new(answer.trim_matches(|c| c == '"' || c == ' '))
}
