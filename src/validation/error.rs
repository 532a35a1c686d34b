//! Validation failure types.

use std::fmt;
use thiserror::Error;

/// A single failed check: the field it ran on and the rule it violated.
///
/// Displays as the user-facing message, e.g. `alias must have at least 3 characters`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {rule}")]
pub struct ValidationError {
    pub field: String,
    pub rule: Rule,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, rule: Rule) -> Self {
        Self {
            field: field.into(),
            rule,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// The rule a field violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// The field is absent or null.
    Missing,
    /// The value has the wrong runtime type.
    TypeMismatch(Expected),
    /// The value does not match a required pattern.
    FormatInvalid(Format),
    /// Character count outside `min..=max`; `bound` says which side failed.
    LengthOutOfRange { min: usize, max: usize, bound: Bound },
    /// Numeric value outside `min..=max`; `bound` says which side failed.
    OutOfRange { min: i64, max: i64, bound: Bound },
    /// The checked fields could not be read into the requested type.
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Object,
    String,
    NumericString,
    Integer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Url,
    AlphanumericUnderscore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Missing => write!(f, "must be provided"),
            Rule::TypeMismatch(Expected::Object) => write!(f, "must be an object"),
            Rule::TypeMismatch(Expected::String) => write!(f, "must be a string"),
            Rule::TypeMismatch(Expected::NumericString) => write!(f, "must contain only numbers"),
            Rule::TypeMismatch(Expected::Integer) => write!(f, "must be an integer"),
            Rule::FormatInvalid(Format::Url) => write!(f, "must be a valid url"),
            Rule::FormatInvalid(Format::AlphanumericUnderscore) => {
                write!(f, "must contain only letters, numbers and underscores")
            }
            Rule::LengthOutOfRange {
                min,
                bound: Bound::Min,
                ..
            } => write!(f, "must have at least {min} characters"),
            Rule::LengthOutOfRange {
                max,
                bound: Bound::Max,
                ..
            } => write!(f, "must have at most {max} characters"),
            Rule::OutOfRange {
                min,
                bound: Bound::Min,
                ..
            } => write!(f, "must be at least {min}"),
            Rule::OutOfRange {
                max,
                bound: Bound::Max,
                ..
            } => write!(f, "must be at most {max}"),
            Rule::Malformed(reason) => write!(f, "is malformed: {reason}"),
        }
    }
}
