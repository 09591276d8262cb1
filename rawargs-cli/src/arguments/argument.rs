//! Typed access to a single looked-up argument.

use super::clamp::{Clamp, Numeric};
use super::ArgumentError;

/// Rule used to turn a raw value into a boolean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoolPolicy {
    /// Any value other than exactly `"false"` or `"0"` is true.
    #[default]
    Strict,
    /// With a `false` default only `"true"` or `"1"` are true; with a `true`
    /// default this behaves like [`BoolPolicy::Strict`].
    Affirmative,
}

/// Result of looking up a named or positional argument.
///
/// `Flag` is a named argument that appeared without a value. It is set, and
/// its raw value reads as the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument<'a> {
    Absent,
    Flag,
    Value(&'a str),
}

impl<'a> From<Option<&'a str>> for Argument<'a> {
    fn from(value: Option<&'a str>) -> Self {
        match value {
            Some(value) => Argument::Value(value),
            None => Argument::Absent,
        }
    }
}

/// Parses `raw` as `T` in base 10.
///
/// Unsigned kinds reject a leading `+`, and float kinds reject `NaN`, which
/// no clamp range could contain.
pub(crate) fn parse_raw<T: Numeric>(raw: &str) -> Result<T, ArgumentError> {
    let malformed = || ArgumentError::MalformedNumber {
        value: raw.to_string(),
        kind: T::KIND,
    };

    if T::KIND.is_unsigned() && raw.starts_with('+') {
        return Err(malformed());
    }

    let value = raw.parse::<T>().map_err(|_| malformed())?;
    if value.is_nan() {
        return Err(malformed());
    }

    Ok(value)
}

impl<'a> Argument<'a> {
    /// True if the argument appeared during parsing, with or without a value.
    pub fn is_set(&self) -> bool {
        !matches!(self, Argument::Absent)
    }

    /// The raw value; `None` when absent, empty for a valueless flag.
    pub fn raw(&self) -> Option<&'a str> {
        match *self {
            Argument::Absent => None,
            Argument::Flag => Some(""),
            Argument::Value(raw) => Some(raw),
        }
    }

    /// The raw value, or `default` when absent.
    pub fn as_str(&self, default: &'a str) -> &'a str {
        self.raw().unwrap_or(default)
    }

    /// Owned version of [`Argument::as_str`].
    pub fn as_string(&self, default: &str) -> String {
        self.as_str(default).to_string()
    }

    /// Reads the value with [`BoolPolicy::Strict`].
    pub fn as_bool(&self, default: bool) -> bool {
        self.as_bool_with(default, BoolPolicy::Strict)
    }

    /// Reads the value as a boolean under `policy`, returning `default` when absent.
    pub fn as_bool_with(&self, default: bool, policy: BoolPolicy) -> bool {
        let Some(raw) = self.raw() else {
            return default;
        };

        match policy {
            BoolPolicy::Affirmative if !default => raw == "true" || raw == "1",
            _ => raw != "false" && raw != "0",
        }
    }

    /// Parses the value as `T` and clamps it, returning `default` when the
    /// argument is absent or malformed.
    pub fn as_number<T: Numeric>(&self, default: T, clamp: Clamp<T>) -> T {
        self.try_as(default, clamp).unwrap_or(default)
    }

    /// Like [`Argument::as_number`], but reports malformed values.
    ///
    /// An absent argument yields `Ok(default)`; a valueless flag has nothing to
    /// parse and yields [`ArgumentError::MalformedNumber`].
    pub fn try_as<T: Numeric>(&self, default: T, clamp: Clamp<T>) -> Result<T, ArgumentError> {
        match self.raw() {
            None => Ok(default),
            Some(raw) => parse_raw::<T>(raw).map(|value| clamp.apply(value)),
        }
    }

    /// Platform-width signed integer; `isize` matches the pointer-sized `int`
    /// of the 64-bit targets this is normally built for.
    pub fn as_int(&self, default: isize, clamp: Clamp<isize>) -> isize {
        self.as_number(default, clamp)
    }

    /// 64-bit signed integer; see [`Argument::as_number`].
    pub fn as_i64(&self, default: i64, clamp: Clamp<i64>) -> i64 {
        self.as_number(default, clamp)
    }

    /// 64-bit unsigned integer. Negative values and a leading `+` are malformed.
    pub fn as_u64(&self, default: u64, clamp: Clamp<u64>) -> u64 {
        self.as_number(default, clamp)
    }

    /// 64-bit float. `NaN` is malformed; infinities are accepted and clamped.
    pub fn as_f64(&self, default: f64, clamp: Clamp<f64>) -> f64 {
        self.as_number(default, clamp)
    }
}
