//! Fail-fast validation chain over loosely typed input.

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::LazyLock;

use super::error::{Bound, Expected, Format, Rule, ValidationError};

/// Optional `http://`/`https://` scheme and `www.`, then a host of two to four
/// dot-separated labels, an optional port, and an optional path/query/fragment.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:www\.)?[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?){1,3}(?::[0-9]{1,5})?(?:[/?#]\S*)?$",
    )
    .unwrap()
});

static ALNUM_UNDERSCORE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

static NUMERIC_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Builds a trusted value from raw input by running checks in declaration order.
///
/// The validator carries either the raw fields or the first failure. Once a
/// check fails, every later check (and transform) is skipped and the failure
/// is returned unchanged by [`Validator::as_value`].
///
/// ```ignore
/// let command: CreateUrlCommand = Validator::from_json(body)
///     .must_be_provided("original_url")
///     .must_be_string("original_url")
///     .must_be_url("original_url")
///     .as_value()?;
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    fields: Result<Map<String, Value>, ValidationError>,
}

impl Validator {
    /// Starts a chain over a decoded JSON body. Anything other than an object
    /// fails immediately.
    pub fn from_json(body: Value) -> Self {
        let fields = match body {
            Value::Object(map) => Ok(map),
            _ => Err(ValidationError::new(
                "body",
                Rule::TypeMismatch(Expected::Object),
            )),
        };
        Self { fields }
    }

    /// Starts a chain over string-keyed query parameters.
    pub fn from_query<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = params
            .into_iter()
            .map(|(key, value)| (key.into(), Value::String(value.into())))
            .collect();
        Self { fields: Ok(map) }
    }

    /// Returns true if `field` exists and is not null. Never fails the chain.
    pub fn is_present(&self, field: &str) -> bool {
        matches!(&self.fields, Ok(map) if map.get(field).is_some_and(|v| !v.is_null()))
    }

    pub fn must_be_provided(self, field: &str) -> Self {
        self.check(field, |value| {
            if value.is_null() {
                Err(Rule::Missing)
            } else {
                Ok(())
            }
        })
    }

    pub fn must_be_string(self, field: &str) -> Self {
        self.check(field, |value| as_str(value).map(|_| ()))
    }

    pub fn must_be_numeric_string(self, field: &str) -> Self {
        self.check(field, |value| match value.as_str() {
            Some(s) if NUMERIC_REGEX.is_match(s) => Ok(()),
            _ => Err(Rule::TypeMismatch(Expected::NumericString)),
        })
    }

    pub fn must_be_url(self, field: &str) -> Self {
        self.check(field, |value| {
            if URL_REGEX.is_match(as_str(value)?) {
                Ok(())
            } else {
                Err(Rule::FormatInvalid(Format::Url))
            }
        })
    }

    /// Checks the character count (not the byte length) against `min..=max`.
    pub fn must_have_length_between(self, field: &str, min: usize, max: usize) -> Self {
        self.check(field, |value| {
            let length = as_str(value)?.chars().count();
            if length < min {
                Err(Rule::LengthOutOfRange {
                    min,
                    max,
                    bound: Bound::Min,
                })
            } else if length > max {
                Err(Rule::LengthOutOfRange {
                    min,
                    max,
                    bound: Bound::Max,
                })
            } else {
                Ok(())
            }
        })
    }

    pub fn must_be_alphanumeric_underscore(self, field: &str) -> Self {
        self.check(field, |value| {
            if ALNUM_UNDERSCORE_REGEX.is_match(as_str(value)?) {
                Ok(())
            } else {
                Err(Rule::FormatInvalid(Format::AlphanumericUnderscore))
            }
        })
    }

    /// Checks an integer value against `min..=max`.
    pub fn must_be_in_range(self, field: &str, min: i64, max: i64) -> Self {
        self.check(field, |value| {
            let number = value
                .as_i64()
                .ok_or(Rule::TypeMismatch(Expected::Integer))?;
            if number < min {
                Err(Rule::OutOfRange {
                    min,
                    max,
                    bound: Bound::Min,
                })
            } else if number > max {
                Err(Rule::OutOfRange {
                    min,
                    max,
                    bound: Bound::Max,
                })
            } else {
                Ok(())
            }
        })
    }

    /// Replaces the value of `field` with `f(value)`. Absent fields are passed
    /// as null. Skipped once the chain has failed.
    pub fn transform<F>(self, field: &str, f: F) -> Self
    where
        F: FnOnce(Value) -> Value,
    {
        let fields = self.fields.map(|mut map| {
            let value = map.remove(field).unwrap_or(Value::Null);
            map.insert(field.to_owned(), f(value));
            map
        });
        Self { fields }
    }

    /// Extracts the refined value, or the first failure of the chain.
    ///
    /// Fields `T` declares as non-optional are the ones the chain guaranteed;
    /// unknown input keys are ignored.
    pub fn as_value<T: DeserializeOwned>(self) -> Result<T, ValidationError> {
        let map = self.fields?;
        serde_json::from_value(Value::Object(map))
            .map_err(|e| ValidationError::new("body", Rule::Malformed(e.to_string())))
    }

    fn check<F>(self, field: &str, rule: F) -> Self
    where
        F: FnOnce(&Value) -> Result<(), Rule>,
    {
        let fields = self.fields.and_then(|map| {
            rule(map.get(field).unwrap_or(&Value::Null))
                .map_err(|rule| ValidationError::new(field, rule))?;
            Ok(map)
        });
        Self { fields }
    }
}

/// Parses a numeric string into an integer value for [`Validator::transform`].
///
/// Values that do not fit in an `i64` are left untouched so a following
/// range check reports them.
pub fn parse_integer(value: Value) -> Value {
    match value.as_str().and_then(|s| s.parse::<i64>().ok()) {
        Some(number) => Value::from(number),
        None => value,
    }
}

fn as_str(value: &Value) -> Result<&str, Rule> {
    value.as_str().ok_or(Rule::TypeMismatch(Expected::String))
}
