//! Optional range clamping for parsed numeric values.

use std::str::FromStr;

use super::value::{Value, ValueKind};

/// Numeric types that typed accessors can parse and clamp.
pub trait Numeric: Copy + PartialOrd + FromStr {
    const ZERO: Self;
    const KIND: ValueKind;

    fn into_value(self) -> Value;

    /// True only for a float NaN, the one value that is not equal to itself.
    #[allow(clippy::eq_op)]
    fn is_nan(self) -> bool {
        self != self
    }
}

macro_rules! impl_numeric {
    ($($ty:ty => $kind:ident, $zero:expr;)*) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = $zero;
                const KIND: ValueKind = ValueKind::$kind;

                fn into_value(self) -> Value {
                    Value::$kind(self)
                }
            }
        )*
    };
}

impl_numeric! {
    i8 => I8, 0;
    i16 => I16, 0;
    i32 => I32, 0;
    i64 => I64, 0;
    isize => Isize, 0;
    u8 => U8, 0;
    u16 => U16, 0;
    u32 => U32, 0;
    u64 => U64, 0;
    usize => Usize, 0;
    f32 => F32, 0.0;
    f64 => F64, 0.0;
}

/// Inclusive bounds applied to a parsed value. A missing bound leaves that side open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamp<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T: Numeric> Clamp<T> {
    pub fn new(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn none() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    pub fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Builds bounds where a zero `min` or `max` means "no bound on that side".
    ///
    /// Note that this makes a real bound of zero impossible to express.
    pub fn zero_unbounded(min: T, max: T) -> Self {
        Self {
            min: (min != T::ZERO).then_some(min),
            max: (max != T::ZERO).then_some(max),
        }
    }

    pub fn apply(&self, value: T) -> T {
        if let Some(min) = self.min {
            if value < min {
                return min;
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return max;
            }
        }

        value
    }
}

impl<T: Numeric> Default for Clamp<T> {
    fn default() -> Self {
        Self::none()
    }
}
