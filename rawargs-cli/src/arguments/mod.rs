//! Raw command-line argument classification and typed access.
//!
//! A single left-to-right scan splits the invocation tokens into named
//! arguments (`-x value`, `--name`, `--name=value`) and positional arguments.
//! The resulting [`ParsedArguments`] table is read through [`Argument`]
//! handles, which convert the raw strings into typed values with a default
//! fallback and optional clamping.

pub mod argument;
pub mod clamp;
pub mod file;
pub mod parser;
pub mod value;

pub use argument::{Argument, BoolPolicy};
pub use clamp::{Clamp, Numeric};
pub use file::FileOrDefault;
pub use parser::{
    init_process_arguments, process_arguments, ParseOptions, ParsedArguments, PendingShortPolicy,
};
pub use value::{Value, ValueKind};

use std::path::PathBuf;
use thiserror::Error;

/// Error types for argument access.
#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("Malformed {kind} value: '{value}'")]
    MalformedNumber { value: String, kind: ValueKind },

    #[error("Cannot open file {}: {source}", path.display())]
    FileOpenFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid type: {0}")]
    InvalidType(String),

    #[error("Process arguments were already initialized")]
    AlreadyInitialized,
}
