//! Filter comparators.
//!
//! A [`Comparator`] is configured per filter field on a
//! [`ListEngine`](crate::ListEngine). At query time each filter's expected
//! value is compiled once into a [`Matcher`], which is then evaluated against
//! the string form of the record's field.

use regex::Regex;

use crate::error::Result;
use crate::value::Value;

/// How a filter's expected value is compared with a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Comparator {
    /// Case-sensitive equality.
    #[default]
    Exact,
    /// Equality after lowercasing both sides.
    ExactIgnoreCase,
    /// Case-sensitive substring.
    Contains,
    /// Substring after lowercasing both sides.
    ContainsIgnoreCase,
    /// The expected value is a regular expression the field must match.
    Pattern,
}

impl Comparator {
    /// Returns the display name of this comparator.
    pub fn as_str(self) -> &'static str {
        match self {
            Comparator::Exact => "exact",
            Comparator::ExactIgnoreCase => "exact-ignore-case",
            Comparator::Contains => "contains",
            Comparator::ContainsIgnoreCase => "contains-ignore-case",
            Comparator::Pattern => "pattern",
        }
    }

    /// Returns `true` if this comparator ignores case.
    pub fn ignores_case(self) -> bool {
        matches!(
            self,
            Comparator::ExactIgnoreCase | Comparator::ContainsIgnoreCase
        )
    }

    /// Compiles an expected value into a [`Matcher`].
    ///
    /// Fails only for [`Comparator::Pattern`] with an invalid expression.
    pub fn compile(self, expected: &str) -> Result<Matcher> {
        Ok(match self {
            Comparator::Exact => Matcher::Exact(expected.to_string()),
            Comparator::ExactIgnoreCase => Matcher::ExactIgnoreCase(expected.to_lowercase()),
            Comparator::Contains => Matcher::Contains(expected.to_string()),
            Comparator::ContainsIgnoreCase => {
                Matcher::ContainsIgnoreCase(expected.to_lowercase())
            }
            Comparator::Pattern => Matcher::Pattern(Regex::new(expected)?),
        })
    }
}

impl std::fmt::Display for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A compiled filter predicate over a single field value.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Field string form equals the value.
    Exact(String),
    /// Lowercased field string form equals the (already lowercased) value.
    ExactIgnoreCase(String),
    /// Field string form contains the value.
    Contains(String),
    /// Lowercased field string form contains the (already lowercased) value.
    ContainsIgnoreCase(String),
    /// Field string form matches the expression.
    Pattern(Regex),
}

impl Matcher {
    /// Evaluates this matcher against a field value.
    ///
    /// A missing field ([`Value::None`]) never matches.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        let Some(actual) = field_value.string_form() else {
            return false;
        };

        match self {
            Matcher::Exact(expected) => actual == expected.as_str(),
            Matcher::ExactIgnoreCase(expected) => actual.to_lowercase() == *expected,
            Matcher::Contains(expected) => actual.contains(expected.as_str()),
            Matcher::ContainsIgnoreCase(expected) => {
                actual.to_lowercase().contains(expected.as_str())
            }
            Matcher::Pattern(regex) => regex.is_match(&actual),
        }
    }
}
