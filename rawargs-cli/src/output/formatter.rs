//! Output formatter trait and factory.
//!
//! This module defines the `OutputFormatter` trait that all formatters implement,
//! and provides a factory function to create the appropriate formatter based on
//! the output format configuration.

use crate::cli::OutputFormat;

use super::Report;

/// Trait for rendering a classification report into an output string.
pub trait OutputFormatter {
    fn format(&self, report: &Report) -> String;
}

/// Creates the appropriate formatter for the given output format.
///
/// `colored` only affects formats that support highlighting.
pub fn create_formatter(format: OutputFormat, colored: bool) -> Box<dyn OutputFormatter> {
    use super::json::JsonFormatter;
    use super::plain::PlainFormatter;

    match format {
        OutputFormat::Plain => Box::new(PlainFormatter { colored }),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
