use clap::Parser;

/// Raw argument inspector
///
/// Classifies a token list the way the rawargs library does: `-x value` and
/// `--name[=value]` become named arguments, everything else becomes a
/// positional argument in order of appearance.
///
/// Pass the tokens to inspect after `--`, e.g. `rawargs -q n:i32 -- -n 5 file`.
#[derive(Parser, Debug)]
#[command(name = "rawargs")]
#[command(version)]
#[command(about, long_about)]
pub struct Cli {
    /// Suppress colored output
    #[arg(short = 'n', long = "no-color")]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long = "verbose")]
    pub verbose: bool,

    /// Output format: plain, json
    #[arg(short = 'f', long = "output-format", default_value = "plain")]
    pub output_format: OutputFormat,

    /// Short flag that never takes the following token as its value (repeatable)
    #[arg(short = 's', long = "switch", value_name = "NAME")]
    pub switches: Vec<String>,

    /// Discard a short flag still waiting for its value when another flag follows
    #[arg(long = "drop-pending")]
    pub drop_pending: bool,

    /// Typed lookup to report: `name`, `short/long` or `#index`, optionally
    /// followed by `:kind` (string, bool, i8..i64, u8..u64, f32, f64)
    #[arg(short = 'q', long = "query", value_name = "KEY[:KIND]")]
    pub queries: Vec<String>,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    /// Tokens to classify
    #[arg(last = true, value_name = "TOKENS")]
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}
