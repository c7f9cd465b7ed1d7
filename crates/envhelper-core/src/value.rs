//! Textual parse rules for the types an environment variable can hold.

use std::fmt;

use crate::error::ParseError;

/// A type that can be read out of an environment variable.
///
/// `Display` renders defaults in log lines; `Clone` lets a memoized value be
/// handed out more than once.
pub trait EnvValue: Clone + fmt::Display + Send + Sync + 'static {
    /// Short type name used in diagnostics.
    const TYPE_NAME: &'static str;

    fn parse_env(raw: &str) -> Result<Self, ParseError>;
}

/// Raised when a `char` is requested from an empty variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot take a character from an empty value")]
pub struct EmptyValue;

macro_rules! from_str_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EnvValue for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn parse_env(raw: &str) -> Result<Self, ParseError> {
                    raw.parse::<$ty>().map_err(Into::into)
                }
            }
        )*
    };
}

from_str_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
);

impl EnvValue for char {
    const TYPE_NAME: &'static str = "char";

    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        raw.chars().next().ok_or_else(|| EmptyValue.into())
    }
}

impl EnvValue for String {
    const TYPE_NAME: &'static str = "String";

    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        Ok(raw.to_owned())
    }
}
