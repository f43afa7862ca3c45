//! Conversion of raw option text into typed values.
//!
//! The conversion is always picked from the option's registered kind. The
//! shape of the raw text is never used to guess a type.

use crate::value::{OptionKind, OptionValue};

/// Raw text that does not fit the grammar of the requested kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{raw}' is not a valid {expected}")]
pub struct CoerceError {
    pub raw: String,
    pub expected: OptionKind,
}

impl CoerceError {
    fn new(raw: &str, expected: OptionKind) -> Self {
        Self {
            raw: raw.to_string(),
            expected,
        }
    }
}

/// Convert `raw` into a value of the given kind.
pub fn coerce(kind: OptionKind, raw: &str) -> Result<OptionValue, CoerceError> {
    match kind {
        OptionKind::Bool => coerce_bool(raw).map(OptionValue::Bool),
        OptionKind::Int => coerce_int(raw).map(OptionValue::Int),
        OptionKind::Str => Ok(OptionValue::Str(coerce_str(raw))),
        OptionKind::StrList => Ok(OptionValue::StrList(coerce_str_list(raw))),
    }
}

/// `true`/`1` and `false`/`0`, case-insensitive. Anything else is rejected.
pub fn coerce_bool(raw: &str) -> Result<bool, CoerceError> {
    let token = raw.trim();
    if token == "1" || token.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if token == "0" || token.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CoerceError::new(raw, OptionKind::Bool))
    }
}

pub fn coerce_int(raw: &str) -> Result<i64, CoerceError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CoerceError::new(raw, OptionKind::Int))
}

pub fn coerce_str(raw: &str) -> String {
    raw.trim().to_string()
}

/// Comma-separated list. Elements are trimmed, empty fragments dropped,
/// order and duplicates kept.
pub fn coerce_str_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(String::from)
        .collect()
}
