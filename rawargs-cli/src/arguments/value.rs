//! Closed set of value kinds for conversions selected at runtime.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::argument::{parse_raw, Argument};
use super::clamp::Numeric;
use super::ArgumentError;

/// The primitive kinds an argument can be converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Bool => "bool",
            ValueKind::I8 => "i8",
            ValueKind::I16 => "i16",
            ValueKind::I32 => "i32",
            ValueKind::I64 => "i64",
            ValueKind::Isize => "isize",
            ValueKind::U8 => "u8",
            ValueKind::U16 => "u16",
            ValueKind::U32 => "u32",
            ValueKind::U64 => "u64",
            ValueKind::Usize => "usize",
            ValueKind::F32 => "f32",
            ValueKind::F64 => "f64",
        }
    }
}

impl ValueKind {
    pub fn is_unsigned(&self) -> bool {
        matches!(
            self,
            ValueKind::U8 | ValueKind::U16 | ValueKind::U32 | ValueKind::U64 | ValueKind::Usize
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "string" | "str" => ValueKind::String,
            "bool" => ValueKind::Bool,
            "i8" => ValueKind::I8,
            "i16" => ValueKind::I16,
            "i32" => ValueKind::I32,
            "i64" | "int" => ValueKind::I64,
            "isize" => ValueKind::Isize,
            "u8" => ValueKind::U8,
            "u16" => ValueKind::U16,
            "u32" => ValueKind::U32,
            "u64" | "uint" => ValueKind::U64,
            "usize" => ValueKind::Usize,
            "f32" => ValueKind::F32,
            "f64" | "float" => ValueKind::F64,
            other => return Err(ArgumentError::InvalidType(other.to_string())),
        };
        Ok(kind)
    }
}

/// A converted argument value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Bool(_) => ValueKind::Bool,
            Value::I8(_) => ValueKind::I8,
            Value::I16(_) => ValueKind::I16,
            Value::I32(_) => ValueKind::I32,
            Value::I64(_) => ValueKind::I64,
            Value::Isize(_) => ValueKind::Isize,
            Value::U8(_) => ValueKind::U8,
            Value::U16(_) => ValueKind::U16,
            Value::U32(_) => ValueKind::U32,
            Value::U64(_) => ValueKind::U64,
            Value::Usize(_) => ValueKind::Usize,
            Value::F32(_) => ValueKind::F32,
            Value::F64(_) => ValueKind::F64,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(v) => f.write_str(v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::I8(v) => write!(f, "{}", v),
            Value::I16(v) => write!(f, "{}", v),
            Value::I32(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::Isize(v) => write!(f, "{}", v),
            Value::U8(v) => write!(f, "{}", v),
            Value::U16(v) => write!(f, "{}", v),
            Value::U32(v) => write!(f, "{}", v),
            Value::U64(v) => write!(f, "{}", v),
            Value::Usize(v) => write!(f, "{}", v),
            Value::F32(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
        }
    }
}

fn numeric<T: Numeric>(raw: &str) -> Result<Value, ArgumentError> {
    parse_raw::<T>(raw).map(Numeric::into_value)
}

impl Argument<'_> {
    /// Converts the argument into `kind`.
    ///
    /// Returns `Ok(None)` when the argument is absent. A valueless flag converts
    /// to an empty string or `true`, and fails for numeric kinds.
    pub fn try_value(&self, kind: ValueKind) -> Result<Option<Value>, ArgumentError> {
        let raw = match self {
            Argument::Absent => return Ok(None),
            Argument::Flag => "",
            Argument::Value(raw) => *raw,
        };

        let value = match kind {
            ValueKind::String => Value::String(raw.to_string()),
            ValueKind::Bool => Value::Bool(self.as_bool(false)),
            ValueKind::I8 => numeric::<i8>(raw)?,
            ValueKind::I16 => numeric::<i16>(raw)?,
            ValueKind::I32 => numeric::<i32>(raw)?,
            ValueKind::I64 => numeric::<i64>(raw)?,
            ValueKind::Isize => numeric::<isize>(raw)?,
            ValueKind::U8 => numeric::<u8>(raw)?,
            ValueKind::U16 => numeric::<u16>(raw)?,
            ValueKind::U32 => numeric::<u32>(raw)?,
            ValueKind::U64 => numeric::<u64>(raw)?,
            ValueKind::Usize => numeric::<usize>(raw)?,
            ValueKind::F32 => numeric::<f32>(raw)?,
            ValueKind::F64 => numeric::<f64>(raw)?,
        };

        Ok(Some(value))
    }

    /// Converts the argument into the kind of `default`, falling back to
    /// `default` when the argument is absent or malformed.
    pub fn value_or(&self, default: Value) -> Value {
        match self.try_value(default.kind()) {
            Ok(Some(value)) => value,
            Ok(None) | Err(_) => default,
        }
    }
}
