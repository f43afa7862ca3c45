//! Locating the style that applies to a directory
//!
//! Discovery walks from a directory up to the filesystem root. In each
//! directory it checks, in order:
//!
//! 1. `.style.yapf`
//! 2. `setup.cfg`, if it has a `[yapf]` section
//! 3. `pyproject.toml`, if it has a `[tool.yapf]` table
//!
//! The first hit wins. When nothing is found the global style file
//! (`<config_dir>/yapf/style`) is used if it exists, and otherwise the
//! catalog default applies.

use crate::Result;
use crate::config::{StyleConfig, StyleResolver};
use crate::source::{self, LOCAL_STYLE_FILE, PYPROJECT_FILE, SETUP_CFG_FILE, SETUP_CFG_SECTION};
use std::path::{Path, PathBuf};

/// File name of the per-user style inside the global config directory.
pub const GLOBAL_STYLE_FILE: &str = "style";

/// Finds style sources for directories.
#[derive(Debug, Clone, Default)]
pub struct StyleDiscovery {
    /// Override for the global config directory (used for testing).
    /// When `None`, `dirs::config_dir()/yapf` is used.
    global_config_dir_override: Option<PathBuf>,
}

impl StyleDiscovery {
    /// Discovery using the platform config directory:
    /// - Linux: `~/.config/yapf/`
    /// - macOS: `~/Library/Application Support/yapf/`
    /// - Windows: `%APPDATA%\yapf\`
    pub fn new() -> Self {
        Self {
            global_config_dir_override: None,
        }
    }

    /// Discovery with a custom global config directory.
    pub fn with_global_config_dir(global_config_dir: impl Into<PathBuf>) -> Self {
        Self {
            global_config_dir_override: Some(global_config_dir.into()),
        }
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join("yapf"))
    }

    /// Path of the style file that applies to `dir`, if any.
    pub fn find_for_dir(&self, dir: &Path) -> Option<PathBuf> {
        for current in dir.ancestors() {
            if let Some(found) = find_in(current) {
                tracing::debug!(path = ?found, "Discovered style file");
                return Some(found);
            }
        }

        let global = self.global_config_dir()?.join(GLOBAL_STYLE_FILE);
        if global.is_file() {
            tracing::debug!(path = ?global, "Using global style file");
            return Some(global);
        }

        tracing::debug!(?dir, "No style file found");
        None
    }

    /// Discover and resolve the style for `dir`.
    pub fn resolve_for_dir(&self, dir: &Path) -> Result<StyleConfig> {
        resolve_found(self.find_for_dir(dir).as_deref())
    }
}

/// Resolve the result of [`StyleDiscovery::find_for_dir`]. `None` is the
/// default style.
pub fn resolve_found(found: Option<&Path>) -> Result<StyleConfig> {
    let resolver = StyleResolver::new();
    match found {
        Some(path) => resolver.resolve_file(path),
        None => resolver.resolve(None),
    }
}

fn find_in(dir: &Path) -> Option<PathBuf> {
    let local = dir.join(LOCAL_STYLE_FILE);
    if local.is_file() {
        return Some(local);
    }

    let setup_cfg = dir.join(SETUP_CFG_FILE);
    if setup_cfg.is_file()
        && candidate_matches(&setup_cfg, |content| {
            source::has_section(content, SETUP_CFG_SECTION)
        })
    {
        return Some(setup_cfg);
    }

    let pyproject = dir.join(PYPROJECT_FILE);
    if pyproject.is_file() && candidate_matches(&pyproject, source::has_tool_table) {
        return Some(pyproject);
    }

    None
}

/// Whether a candidate file has a style section header. The section body is
/// not checked here; resolving the file reports any errors in it.
/// Unreadable candidates are skipped with a warning.
fn candidate_matches(path: &Path, has_section: impl Fn(&str) -> bool) -> bool {
    match source::read_bounded(path) {
        Ok(content) => has_section(&content),
        Err(e) => {
            tracing::warn!(?path, error = %e, "Skipping unreadable style candidate");
            false
        }
    }
}
