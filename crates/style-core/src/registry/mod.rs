//! Option registry - the closed set of formatting options
//!
//! Every option has exactly one kind and one PEP 8 default. Keys written by
//! users are canonicalized (trimmed, uppercased) once, here, before any
//! lookup. The rest of the crate only ever sees [`OptionName`] values handed
//! out by this module.

mod builtins;
mod types;

pub use builtins::{OPTION_COUNT, OPTION_SPECS};
pub use types::{DefaultValue, OptionSpec};

use crate::coerce;
use crate::value::{OptionKind, OptionValue};
use crate::{Error, Result};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

static INDEX: LazyLock<HashMap<&'static str, &'static OptionSpec>> =
    LazyLock::new(|| OPTION_SPECS.iter().map(|spec| (spec.name, spec)).collect());

/// Canonical form of a user-written key: surrounding whitespace removed,
/// ASCII uppercased.
pub fn canonicalize(key: &str) -> String {
    key.trim().to_ascii_uppercase()
}

/// Name of a registered option.
///
/// Only obtainable through the registry, so holding one proves the option
/// exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionName(&'static str);

impl OptionName {
    /// Look up a user-written key.
    pub fn parse(key: &str) -> Result<Self> {
        lookup(key).map(|spec| OptionName(spec.name))
    }

    pub(crate) fn from_spec(spec: &'static OptionSpec) -> Self {
        OptionName(spec.name)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn spec(&self) -> &'static OptionSpec {
        // Every OptionName was created from an INDEX entry.
        INDEX[self.0]
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for OptionName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// Find the registry entry for a user-written key.
pub fn lookup(key: &str) -> Result<&'static OptionSpec> {
    let canonical = canonicalize(key);
    INDEX
        .get(canonical.as_str())
        .copied()
        .ok_or_else(|| Error::UnknownOption {
            key: key.trim().to_string(),
        })
}

pub fn type_of(key: &str) -> Result<OptionKind> {
    lookup(key).map(OptionSpec::kind)
}

/// PEP 8 default for the option.
pub fn default_value(key: &str) -> Result<OptionValue> {
    lookup(key).map(|spec| spec.default.to_value())
}

pub fn option_help(key: &str) -> Result<&'static str> {
    lookup(key).map(|spec| spec.help)
}

/// All registered options in canonical-name order.
pub fn options() -> &'static [OptionSpec] {
    &OPTION_SPECS
}

/// Parse `key` and convert `raw` according to the option's registered kind.
pub fn coerce_option(key: &str, raw: &str) -> Result<(OptionName, OptionValue)> {
    let name = OptionName::parse(key)?;
    let spec = name.spec();
    let value = coerce::coerce(spec.kind(), raw).map_err(|e| Error::InvalidValue {
        option: spec.name.to_string(),
        value: e.raw,
        expected: e.expected,
    })?;
    Ok((name, value))
}
