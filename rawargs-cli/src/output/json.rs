//! JSON output formatter.

use super::formatter::OutputFormatter;
use super::Report;

/// Formatter that serializes the report as pretty-printed JSON.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> String {
        serde_json::to_string_pretty(report).expect("JSON serialization should not fail")
    }
}
