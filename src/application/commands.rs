//! Validated commands built from raw request input.

use serde::Deserialize;
use serde_json::Value;

use crate::validation::{ValidationError, Validator, parse_integer};

/// Default number of items in a ranked listing.
pub const DEFAULT_LIST_LIMIT: u32 = 10;
pub const MIN_LIST_LIMIT: i64 = 1;
pub const MAX_LIST_LIMIT: i64 = 20;

pub const MIN_ALIAS_LENGTH: usize = 3;
pub const MAX_ALIAS_LENGTH: usize = 20;

/// Request to map a destination to an alias.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUrlCommand {
    pub original_url: String,
    /// Custom alias; a random one is generated when absent.
    pub alias: Option<String>,
}

impl CreateUrlCommand {
    /// Validates a decoded JSON body.
    ///
    /// `original_url` is checked first, so a body missing it reports that
    /// regardless of what else is wrong. `alias` is only checked when present.
    pub fn from_json(body: Value) -> Result<Self, ValidationError> {
        let validator = Validator::from_json(body)
            .must_be_provided("original_url")
            .must_be_string("original_url")
            .must_be_url("original_url");

        let validator = if validator.is_present("alias") {
            validator
                .must_be_string("alias")
                .must_have_length_between("alias", MIN_ALIAS_LENGTH, MAX_ALIAS_LENGTH)
                .must_be_alphanumeric_underscore("alias")
        } else {
            validator
        };

        validator.as_value()
    }
}

#[derive(Debug, Deserialize)]
struct LimitParam {
    limit: u32,
}

/// Request for the most accessed aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListTopQuery {
    pub limit: u32,
}

impl Default for ListTopQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl ListTopQuery {
    /// Validates query parameters; `limit` falls back to the default when absent.
    pub fn from_query<I, K, V>(params: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let validator = Validator::from_query(params);
        if !validator.is_present("limit") {
            return Ok(Self::default());
        }

        let LimitParam { limit } = validator
            .must_be_provided("limit")
            .must_be_numeric_string("limit")
            .transform("limit", parse_integer)
            .must_be_in_range("limit", MIN_LIST_LIMIT, MAX_LIST_LIMIT)
            .as_value()?;

        Ok(Self { limit })
    }
}
