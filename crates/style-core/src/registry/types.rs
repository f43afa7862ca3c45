//! Core types for the option registry

use crate::value::{OptionKind, OptionValue};

/// Default value of a registered option, in a form usable in a `const` table.
///
/// The variant also fixes the option's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
    Str(&'static str),
    StrList(&'static [&'static str]),
}

impl DefaultValue {
    pub fn kind(&self) -> OptionKind {
        match self {
            DefaultValue::Bool(_) => OptionKind::Bool,
            DefaultValue::Int(_) => OptionKind::Int,
            DefaultValue::Str(_) => OptionKind::Str,
            DefaultValue::StrList(_) => OptionKind::StrList,
        }
    }

    pub fn to_value(&self) -> OptionValue {
        match *self {
            DefaultValue::Bool(b) => OptionValue::Bool(b),
            DefaultValue::Int(i) => OptionValue::Int(i),
            DefaultValue::Str(s) => OptionValue::Str(s.to_string()),
            DefaultValue::StrList(items) => {
                OptionValue::StrList(items.iter().map(|s| s.to_string()).collect())
            }
        }
    }
}

/// A registered formatting option.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    /// Canonical name (uppercase, underscores)
    pub name: &'static str,
    /// PEP 8 default; its variant is the option's kind
    pub default: DefaultValue,
    pub help: &'static str,
}

impl OptionSpec {
    pub const fn new(name: &'static str, default: DefaultValue, help: &'static str) -> Self {
        Self {
            name,
            default,
            help,
        }
    }

    pub fn kind(&self) -> OptionKind {
        self.default.kind()
    }
}
