//! Single-pass tokenizer that splits raw tokens into named and positional arguments.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use log::{debug, trace};

use super::argument::Argument;
use super::ArgumentError;

static PROCESS_ARGUMENTS: OnceLock<ParsedArguments> = OnceLock::new();

/// What happens to a short flag still waiting for its value when another flag arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PendingShortPolicy {
    /// Record the waiting short flag as valueless.
    #[default]
    Keep,
    /// Discard the waiting short flag entirely.
    Drop,
}

/// Options controlling a parse pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    switches: HashSet<String>,
    pending_short: PendingShortPolicy,
}

impl ParseOptions {
    /// Options with no switches and [`PendingShortPolicy::Keep`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a short flag that never takes the following token as its value.
    pub fn switch(mut self, name: impl Into<String>) -> Self {
        self.switches.insert(name.into());
        self
    }

    /// Sets how a short flag still waiting for its value is resolved.
    pub fn pending_short(mut self, policy: PendingShortPolicy) -> Self {
        self.pending_short = policy;
        self
    }

    /// True if `name` was registered with [`ParseOptions::switch`].
    pub fn is_switch(&self, name: &str) -> bool {
        self.switches.contains(name)
    }

    pub fn pending_short_policy(&self) -> PendingShortPolicy {
        self.pending_short
    }
}

/// The classified argument table produced by one parse pass.
///
/// Named keys are unique and the last occurrence of a key wins. A named entry
/// holding `None` is a flag that was present without a value, which is distinct
/// from a key that never appeared. Positional entries keep their encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    named: HashMap<String, Option<String>>,
    positional: Vec<String>,
    options: ParseOptions,
}

impl ParsedArguments {
    /// Parses `args` with default options. `args` must not contain the program name.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::parse_with(args, ParseOptions::default())
    }

    /// Parses `args` using the given options.
    pub fn parse_with<I, S>(args: I, options: ParseOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Self {
            named: HashMap::new(),
            positional: Vec::new(),
            options,
        };
        parsed.scan(args);
        parsed
    }

    /// Parses the current process arguments, skipping the program name.
    ///
    /// Tokens that are not valid UTF-8 are converted lossily.
    pub fn from_env() -> Self {
        Self::from_env_with(ParseOptions::default())
    }

    /// Like [`ParsedArguments::from_env`], using the given options.
    pub fn from_env_with(options: ParseOptions) -> Self {
        let args = std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned());
        Self::parse_with(args, options)
    }

    /// Discards all previous entries and parses `args` with the stored options.
    pub fn reparse<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.named.clear();
        self.positional.clear();
        self.scan(args);
    }

    fn scan<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pending: Option<String> = None;

        for token in args {
            let token: String = token.into();
            trace!("Token: {:?}", token);

            if token.len() > 1 && token.starts_with('-') {
                self.resolve_pending(pending.take());

                if let Some(long) = token.strip_prefix("--") {
                    match long.split_once('=') {
                        Some(("", _)) => debug!("Ignoring long flag without a name: {}", token),
                        Some((key, value)) => self.insert(key, Some(value.to_string())),
                        None => self.insert(long, None),
                    }
                } else {
                    let name = &token[1..];
                    if self.options.is_switch(name) {
                        self.insert(name, None);
                    } else {
                        pending = Some(name.to_string());
                    }
                }
            } else if let Some(name) = pending.take() {
                self.named.insert(name, Some(token));
            } else {
                self.positional.push(token);
            }
        }

        if let Some(name) = pending {
            self.insert(&name, None);
        }

        debug!(
            "Parsed {} named and {} positional arguments",
            self.named.len(),
            self.positional.len()
        );
    }

    fn resolve_pending(&mut self, pending: Option<String>) {
        let Some(name) = pending else {
            return;
        };

        match self.options.pending_short {
            PendingShortPolicy::Keep => self.insert(&name, None),
            PendingShortPolicy::Drop => debug!("Dropping short flag without value: -{}", name),
        }
    }

    fn insert(&mut self, key: &str, value: Option<String>) {
        self.named.insert(key.to_string(), value);
    }

    /// Looks up a named argument, trying `short` first and then `long`.
    pub fn named(&self, short: &str, long: &str) -> Argument<'_> {
        let entry = match self.named.get(short) {
            Some(entry) => Some(entry),
            None if long != short => self.named.get(long),
            None => None,
        };

        match entry {
            None => Argument::Absent,
            Some(None) => Argument::Flag,
            Some(Some(value)) => Argument::Value(value.as_str()),
        }
    }

    /// Looks up a positional argument by its zero-based index.
    pub fn positional(&self, index: usize) -> Argument<'_> {
        match self.positional.get(index) {
            Some(value) => Argument::Value(value.as_str()),
            None => Argument::Absent,
        }
    }

    /// True if either key appeared, with or without a value.
    pub fn is_set(&self, short: &str, long: &str) -> bool {
        self.named(short, long).is_set()
    }

    /// Named keys in sorted order.
    pub fn named_keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.named.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Positional values in encounter order.
    pub fn positionals(&self) -> impl Iterator<Item = &str> {
        self.positional.iter().map(String::as_str)
    }

    /// Number of positional arguments.
    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    /// True if no named or positional argument was recorded.
    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.positional.is_empty()
    }

    /// Options used by this table, including on [`ParsedArguments::reparse`].
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }
}

/// Returns the process-wide argument table, parsing the environment on first use.
///
/// The table is immutable once initialized, so concurrent readers need no locking.
pub fn process_arguments() -> &'static ParsedArguments {
    PROCESS_ARGUMENTS.get_or_init(ParsedArguments::from_env)
}

/// Initializes the process-wide argument table from explicit tokens.
///
/// Must run before the first call to [`process_arguments`]; fails with
/// [`ArgumentError::AlreadyInitialized`] otherwise.
pub fn init_process_arguments<I, S>(args: I, options: ParseOptions) -> Result<(), ArgumentError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    PROCESS_ARGUMENTS
        .set(ParsedArguments::parse_with(args, options))
        .map_err(|_| ArgumentError::AlreadyInitialized)
}
