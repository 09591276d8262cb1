//! Plain text output formatter.
//!
//! Prints one section per part of the report, with one entry per line.
//! Section headers are highlighted unless colors are disabled.

use colored::Colorize;

use super::formatter::OutputFormatter;
use super::Report;

pub struct PlainFormatter {
    pub colored: bool,
}

impl PlainFormatter {
    fn header(&self, title: &str) -> String {
        let header = format!("----------- {} -----------", title);
        if self.colored {
            header.cyan().bold().to_string()
        } else {
            header
        }
    }
}

impl OutputFormatter for PlainFormatter {
    fn format(&self, report: &Report) -> String {
        let mut lines = vec![self.header("named")];
        for entry in &report.named {
            match &entry.value {
                Some(value) => lines.push(format!("{} = {}", entry.key, value)),
                None => lines.push(entry.key.clone()),
            }
        }

        lines.push(self.header("positional"));
        for (index, value) in report.positional.iter().enumerate() {
            lines.push(format!("{}: {}", index, value));
        }

        if !report.queries.is_empty() {
            lines.push(self.header("queries"));
            for entry in &report.queries {
                let line = match (&entry.value, &entry.error) {
                    (_, Some(error)) => format!("{} error: {}", entry.query, error),
                    (Some(value), None) => format!("{} = {}", entry.query, value),
                    (None, None) => format!("{} (not set)", entry.query),
                };
                lines.push(line);
            }
        }

        lines.join("\n")
    }
}
