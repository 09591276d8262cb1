use std::fmt;

use crate::arguments::{Argument, ParseOptions, ParsedArguments, PendingShortPolicy, ValueKind};
use crate::cli::{Cli, OutputFormat};
use crate::error::RawArgsError;

/// Which argument a query reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryTarget {
    Named { short: String, long: String },
    Positional(usize),
}

/// A typed lookup requested with `--query`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub target: QueryTarget,
    pub kind: ValueKind,
}

impl Query {
    /// Parses `KEY[:KIND]` where KEY is `name`, `short/long` or `#index`.
    pub fn parse(spec: &str) -> Result<Self, RawArgsError> {
        let (key, kind) = match spec.rsplit_once(':') {
            Some((key, kind)) => (key, kind.parse::<ValueKind>()?),
            None => (spec, ValueKind::String),
        };

        let target = if let Some(index) = key.strip_prefix('#') {
            let index = index.parse::<usize>().map_err(|_| {
                RawArgsError::Config(format!("Invalid positional index in query: {}", spec))
            })?;
            QueryTarget::Positional(index)
        } else {
            let (short, long) = key.split_once('/').unwrap_or((key, key));
            if short.is_empty() && long.is_empty() {
                return Err(RawArgsError::Config(format!(
                    "Query has no argument name: {}",
                    spec
                )));
            }
            QueryTarget::Named {
                short: short.to_string(),
                long: long.to_string(),
            }
        };

        Ok(Self { target, kind })
    }

    pub fn lookup<'a>(&self, arguments: &'a ParsedArguments) -> Argument<'a> {
        match &self.target {
            QueryTarget::Named { short, long } => arguments.named(short, long),
            QueryTarget::Positional(index) => arguments.positional(*index),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            QueryTarget::Named { short, long } if short == long => write!(f, "{}", short)?,
            QueryTarget::Named { short, long } => write!(f, "{}/{}", short, long)?,
            QueryTarget::Positional(index) => write!(f, "#{}", index)?,
        }
        write!(f, ":{}", self.kind)
    }
}

#[derive(Debug)]
pub struct Config {
    pub no_color: bool,
    pub output_format: OutputFormat,
    pub output: Option<String>,
    pub parse_options: ParseOptions,
    pub queries: Vec<Query>,
    pub tokens: Vec<String>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, RawArgsError> {
        let mut parse_options = ParseOptions::new();

        for switch in cli.switches {
            let name = switch.trim_start_matches('-');
            if name.is_empty() {
                return Err(RawArgsError::Config(format!(
                    "Switch name must not be empty: '{}'",
                    switch
                )));
            }
            parse_options = parse_options.switch(name);
        }

        if cli.drop_pending {
            parse_options = parse_options.pending_short(PendingShortPolicy::Drop);
        }

        let queries = cli
            .queries
            .iter()
            .map(|spec| Query::parse(spec))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            no_color: cli.no_color,
            output_format: cli.output_format,
            output: cli.output,
            parse_options,
            queries,
            tokens: cli.tokens,
        })
    }
}
