//! Named style catalog
//!
//! The catalog maps well-known style names (case-insensitive) to complete
//! [`StyleConfig`]s. It is built once, before first use, and never changes
//! afterwards; every lookup hands out a fresh copy.

mod builtins;

pub use builtins::{BUILTIN_COUNT, BUILTIN_STYLES, DEFAULT_STYLE, StyleDefinition};

use crate::config::{StyleConfig, apply_overrides};
use crate::{Error, Result};
use std::sync::LazyLock;

static BUILTIN_CATALOG: LazyLock<StyleCatalog> = LazyLock::new(|| {
    StyleCatalog::from_definitions(&BUILTIN_STYLES).expect("built-in style definitions are valid")
});

/// A fixed set of named, fully resolved styles.
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    /// In definition order; names stored lowercase
    entries: Vec<(String, StyleConfig)>,
    default_name: String,
}

impl StyleCatalog {
    /// The process-wide catalog of built-in styles.
    pub fn builtin() -> &'static StyleCatalog {
        &BUILTIN_CATALOG
    }

    /// Build a catalog by applying each definition's overrides on top of its
    /// base, in order. The first definition becomes the default unless
    /// [`DEFAULT_STYLE`] is among the definitions.
    pub fn from_definitions(definitions: &[StyleDefinition]) -> Result<Self> {
        let mut entries: Vec<(String, StyleConfig)> = Vec::with_capacity(definitions.len());

        for def in definitions {
            let base = match def.based_on {
                Some(base_name) => entries
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(base_name))
                    .map(|(_, config)| config.clone())
                    .ok_or_else(|| Error::UnknownStyleName {
                        name: base_name.to_string(),
                    })?,
                None => StyleConfig::registry_defaults(),
            };

            let overrides = def
                .overrides
                .iter()
                .map(|(key, raw)| (key.to_string(), raw.to_string()));
            let config = apply_overrides(base, overrides)?;

            tracing::trace!(style = def.name, "Built catalog entry");
            entries.push((def.name.to_ascii_lowercase(), config));
        }

        let default_name = entries
            .iter()
            .map(|(name, _)| name.as_str())
            .find(|name| *name == DEFAULT_STYLE)
            .or_else(|| entries.first().map(|(name, _)| name.as_str()))
            .unwrap_or(DEFAULT_STYLE)
            .to_string();

        Ok(Self {
            entries,
            default_name,
        })
    }

    fn find(&self, name: &str) -> Option<&StyleConfig> {
        let name = name.trim();
        self.entries
            .iter()
            .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
            .map(|(_, config)| config)
    }

    /// Check whether `name` is a catalog entry (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Look up a style by name (case-insensitive).
    pub fn lookup(&self, name: &str) -> Result<StyleConfig> {
        self.find(name).cloned().ok_or_else(|| Error::UnknownStyleName {
            name: name.trim().to_string(),
        })
    }

    /// The style used when no style source is given.
    pub fn default_style(&self) -> StyleConfig {
        self.find(&self.default_name)
            .cloned()
            .unwrap_or_else(StyleConfig::registry_defaults)
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    /// Style names in definition order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
