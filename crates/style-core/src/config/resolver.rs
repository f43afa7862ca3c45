//! Style resolution with single-level inheritance
//!
//! The `StyleResolver` turns a style source into a complete [`StyleConfig`]:
//!
//! 1. No source - the catalog default
//! 2. A catalog name - that catalog entry, unchanged
//! 3. Anything else - read the source, pick the base named by
//!    `based_on_style` (or the default), then apply every override on top
//!
//! `based_on_style` must name a catalog entry. Files cannot be based on
//! other files, so there are no chains to follow and no cycles to detect.

use crate::catalog::StyleCatalog;
use crate::registry;
use crate::source::{self, RawStyle, StyleSource};
use crate::Result;
use std::path::Path;

use super::style::StyleConfig;

/// Apply `(key, raw value)` overrides to `base`, in order.
///
/// Each key is looked up in the registry and its value converted according
/// to the option's kind. A later override of the same option replaces an
/// earlier one, and every override replaces the base value whole.
pub fn apply_overrides<I>(base: StyleConfig, overrides: I) -> Result<StyleConfig>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut config = base;
    for (key, raw) in overrides {
        let (name, value) = registry::coerce_option(&key, &raw)?;
        tracing::debug!(option = %name, %value, "Applying override");
        config.set(name, value);
    }
    Ok(config)
}

/// Resolves style sources against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver {
    catalog: &'static StyleCatalog,
}

impl Default for StyleResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleResolver {
    /// Resolver over the built-in catalog.
    pub fn new() -> Self {
        Self {
            catalog: StyleCatalog::builtin(),
        }
    }

    /// Resolve a textual style descriptor: `None`, a catalog name, inline
    /// style text, or a path to a style file.
    ///
    /// # Example
    ///
    /// ```
    /// use style_core::StyleResolver;
    ///
    /// let resolver = StyleResolver::new();
    /// let google = resolver.resolve(Some("Google")).unwrap();
    /// assert_eq!(google.int("INDENT_WIDTH"), Some(2));
    ///
    /// let custom = resolver
    ///     .resolve(Some("{based_on_style: google, indent_width: 4}"))
    ///     .unwrap();
    /// assert_eq!(custom.int("indent_width"), Some(4));
    /// ```
    pub fn resolve(&self, source: Option<&str>) -> Result<StyleConfig> {
        let source = StyleSource::classify(source, self.catalog);
        self.resolve_source(&source)
    }

    /// Resolve an already classified style source.
    pub fn resolve_source(&self, source: &StyleSource) -> Result<StyleConfig> {
        tracing::debug!(source = %source.describe(), "Resolving style");
        match source {
            StyleSource::Default => Ok(self.catalog.default_style()),
            StyleSource::Named(name) => self.catalog.lookup(name),
            StyleSource::Inline(_) | StyleSource::File(_) => {
                let raw = source::read(source)?;
                self.resolve_raw(raw)
            }
        }
    }

    /// Resolve a style file.
    pub fn resolve_file(&self, path: &Path) -> Result<StyleConfig> {
        self.resolve_source(&StyleSource::File(path.to_path_buf()))
    }

    /// Merge raw overrides onto their base style.
    pub fn resolve_raw(&self, raw: RawStyle) -> Result<StyleConfig> {
        let base = match raw.based_on.as_deref() {
            Some(name) => {
                tracing::debug!(based_on = name, "Using catalog base");
                self.catalog.lookup(name)?
            }
            None => self.catalog.default_style(),
        };
        apply_overrides(base, raw.overrides)
    }
}

/// Resolve a textual style descriptor with the built-in catalog.
pub fn resolve(source: Option<&str>) -> Result<StyleConfig> {
    StyleResolver::new().resolve(source)
}
