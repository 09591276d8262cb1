use thiserror::Error;

use crate::arguments::ArgumentError;
use crate::output::OutputError;

#[derive(Error, Debug)]
pub enum RawArgsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Argument(#[from] ArgumentError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

pub type Result<T> = std::result::Result<T, RawArgsError>;
