use thiserror::Error;

use crate::output::OutputError;
use crate::table::ParseError;

#[derive(Error, Debug)]
pub enum CtconvError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

pub type Result<T> = std::result::Result<T, CtconvError>;
