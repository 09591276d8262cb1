//! Report generation for the `rawargs` binary.
//!
//! A [`Report`] captures how a token list was classified plus the results of
//! any typed queries, and is rendered as plain text or JSON.

pub mod formatter;
pub mod json;
pub mod plain;

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use crate::arguments::{Argument, ParsedArguments, Value};
use crate::cli::OutputFormat;
use crate::config::Query;
use formatter::create_formatter;

/// Errors that can occur during output generation.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A named argument as seen by the parser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedEntry {
    pub key: String,
    /// `None` for a flag that appeared without a value.
    pub value: Option<String>,
}

/// Outcome of one typed query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryEntry {
    pub query: String,
    pub set: bool,
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub named: Vec<NamedEntry>,
    pub positional: Vec<String>,
    pub queries: Vec<QueryEntry>,
}

impl Report {
    pub fn build(arguments: &ParsedArguments, queries: &[Query]) -> Self {
        let named = arguments
            .named_keys()
            .into_iter()
            .map(|key| NamedEntry {
                key: key.to_string(),
                value: match arguments.named(key, key) {
                    Argument::Value(value) => Some(value.to_string()),
                    Argument::Flag | Argument::Absent => None,
                },
            })
            .collect();

        let queries = queries
            .iter()
            .map(|query| {
                let argument = query.lookup(arguments);
                let (value, error) = match argument.try_value(query.kind) {
                    Ok(value) => (value, None),
                    Err(e) => {
                        log::debug!("Query {} failed: {}", query, e);
                        (None, Some(e.to_string()))
                    }
                };

                QueryEntry {
                    query: query.to_string(),
                    set: argument.is_set(),
                    value,
                    error,
                }
            })
            .collect();

        Self {
            named,
            positional: arguments.positionals().map(str::to_string).collect(),
            queries,
        }
    }
}

/// Writes reports in the configured format.
pub struct OutputWriter {
    format: OutputFormat,
    no_color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat, no_color: bool) -> Self {
        Self { format, no_color }
    }

    pub fn write<W: Write>(&self, report: &Report, out: &mut W) -> Result<(), OutputError> {
        let formatter = create_formatter(self.format, !self.no_color);

        writeln!(out, "{}", formatter.format(report))?;
        out.flush()?;

        Ok(())
    }
}
