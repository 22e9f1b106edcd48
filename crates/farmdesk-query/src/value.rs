//! Runtime field values.
//!
//! The [`Value`] enum is what an accessor returns for a record field. Search
//! and filtering both work on a value's *string form*, see
//! [`Value::string_form`].

use std::borrow::Cow;
use std::fmt;

/// Field value borrowed from a record.
///
/// # Example
///
/// ```
/// use farmdesk_query::{Value, Number};
///
/// struct Farm {
///     name: String,
///     workers: u32,
/// }
///
/// fn accessor<'a>(farm: &'a Farm, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::Text(&farm.name),
///         "workers" => Value::Number(Number::U64(farm.workers as u64)),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Text value (borrowed).
    Text(&'a str),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// Date value (milliseconds since Unix epoch).
    Date(Timestamp),
    /// Field not present or not queryable.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Extracts the text value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Text(s) => Some(*s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the date value, if present.
    pub fn as_date(&self) -> Option<Timestamp> {
        match self {
            Value::Date(t) => Some(*t),
            _ => None,
        }
    }

    /// Returns the string form used for search and filter comparison.
    ///
    /// Text is returned as-is without allocating. Numbers use their decimal
    /// form, booleans `true`/`false`, and dates their millisecond count.
    /// `None` has no string form and therefore never matches anything.
    pub fn string_form(&self) -> Option<Cow<'a, str>> {
        match self {
            Value::Text(s) => Some(Cow::Borrowed(*s)),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Value::Date(t) => Some(Cow::Owned(t.as_millis().to_string())),
            Value::None => None,
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Timestamp> for Value<'_> {
    fn from(t: Timestamp) -> Self {
        Value::Date(t)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::None)
    }
}

/// Numeric value.
///
/// Stored in one of three variants so that integer fields keep their exact
/// decimal form when searched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            Number::F64(n) => write!(f, "{n}"),
        }
    }
}

macro_rules! number_from {
    ($variant:ident, $target:ty; $($src:ty),*) => {
        $(
            impl From<$src> for Number {
                fn from(n: $src) -> Self {
                    Number::$variant(n as $target)
                }
            }

            impl From<$src> for Value<'_> {
                fn from(n: $src) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

number_from!(I64, i64; i8, i16, i32, i64, isize);
number_from!(U64, u64; u8, u16, u32, u64, usize);
number_from!(F64, f64; f32, f64);

/// Date represented as milliseconds since Unix epoch.
///
/// ```
/// use farmdesk_query::Timestamp;
///
/// assert!(Timestamp(1000) < Timestamp(2000));
/// assert_eq!(Timestamp::from_secs(2).as_millis(), 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a timestamp from milliseconds since Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Creates a timestamp from seconds since Unix epoch.
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs * 1000)
    }

    /// Returns the timestamp as milliseconds since Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Returns the timestamp as whole seconds since Unix epoch.
    pub fn as_secs(self) -> i64 {
        self.0 / 1000
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Timestamp(millis)
    }
}
