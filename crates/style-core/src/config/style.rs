//! The resolved style configuration

use crate::registry::{self, OptionName};
use crate::value::OptionValue;
use serde::Serialize;
use std::collections::BTreeMap;

/// A complete mapping from every registered option to a concrete value.
///
/// There is no unset state: a `StyleConfig` starts from the registry
/// defaults and overrides only replace existing entries. Instances are
/// created by the resolver and the catalog and are read-only to everyone
/// else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleConfig {
    values: BTreeMap<OptionName, OptionValue>,
}

impl StyleConfig {
    /// Every option at its registry default.
    pub(crate) fn registry_defaults() -> Self {
        let values = registry::options()
            .iter()
            .map(|spec| (OptionName::from_spec(spec), spec.default.to_value()))
            .collect();
        Self { values }
    }

    /// Replace the value of one option. The value kind is guaranteed by the
    /// caller having coerced it through the registry.
    pub(crate) fn set(&mut self, name: OptionName, value: OptionValue) {
        debug_assert_eq!(name.spec().kind(), value.kind());
        self.values.insert(name, value);
    }

    /// Value of an option by (case-insensitive) name.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        let name = OptionName::parse(name).ok()?;
        self.values.get(&name)
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(OptionValue::as_int)
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(OptionValue::as_bool)
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(OptionValue::as_str)
    }

    pub fn list(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(OptionValue::as_list)
    }

    /// Options in canonical-name order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionName, &OptionValue)> {
        self.values.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Options whose values differ from `other`, in canonical order.
    pub fn diff(&self, other: &StyleConfig) -> Vec<OptionName> {
        self.values
            .iter()
            .filter(|(name, value)| other.values.get(*name) != Some(*value))
            .map(|(name, _)| *name)
            .collect()
    }
}
