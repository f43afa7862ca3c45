//! Style source reading
//!
//! Turns a style source (a file, inline text or an inline dict) into a
//! [`RawStyle`]: the optional `based_on_style` reference plus the remaining
//! `key = value` pairs in the order they were written. No option names or
//! values are interpreted here; that is the resolver's job.
//!
//! # Recognized formats
//!
//! | Source | Format |
//! |--------|--------|
//! | `setup.cfg` | ini text, `[yapf]` section |
//! | `pyproject.toml` | TOML, `[tool.yapf]` table |
//! | any other file | ini text, `[style]` section |
//! | text starting with `{` | inline dict, `{key: value, ...}` |
//! | text with a newline or starting with `[` | ini text, `[style]` section |

mod ini;
mod inline;
mod pyproject;

pub use ini::{has_section, parse_section};
pub use inline::parse_inline_dict;
pub use pyproject::{has_tool_table, parse_tool_table};

use crate::catalog::StyleCatalog;
use crate::registry::canonicalize;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reserved key naming the style a source is based on.
pub const BASED_ON_STYLE: &str = "BASED_ON_STYLE";

/// Section read from plain style files and inline ini text.
pub const STYLE_SECTION: &str = "style";

/// Section read from `setup.cfg`.
pub const SETUP_CFG_SECTION: &str = "yapf";

pub const LOCAL_STYLE_FILE: &str = ".style.yapf";
pub const SETUP_CFG_FILE: &str = "setup.cfg";
pub const PYPROJECT_FILE: &str = "pyproject.toml";

/// Style files larger than this are rejected unread.
pub const MAX_SOURCE_SIZE: u64 = 1024 * 1024;

/// Where a style comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleSource {
    /// No source given; the catalog default applies
    Default,
    /// A catalog style name
    Named(String),
    /// Style text passed directly (inline dict or ini text)
    Inline(String),
    /// A style file on disk
    File(PathBuf),
}

impl StyleSource {
    /// Classify a textual style descriptor.
    ///
    /// In order: catalog name, inline dict (`{...}`), inline ini text
    /// (contains a newline or starts with `[`), file path. A bare word that
    /// names neither a catalog entry nor an existing file is kept as a name
    /// so that resolving it reports an unknown style.
    pub fn classify(source: Option<&str>, catalog: &StyleCatalog) -> Self {
        let Some(source) = source else {
            return StyleSource::Default;
        };

        let trimmed = source.trim();
        if catalog.contains(trimmed) {
            StyleSource::Named(trimmed.to_string())
        } else if trimmed.starts_with('{') || trimmed.starts_with('[') || source.contains('\n') {
            StyleSource::Inline(source.to_string())
        } else if looks_like_path(trimmed) || Path::new(trimmed).exists() {
            StyleSource::File(PathBuf::from(trimmed))
        } else {
            StyleSource::Named(trimmed.to_string())
        }
    }

    /// Human-readable description used in logs and errors.
    pub fn describe(&self) -> String {
        match self {
            StyleSource::Default => "<default>".to_string(),
            StyleSource::Named(name) => name.to_ascii_lowercase(),
            StyleSource::Inline(_) => "<inline>".to_string(),
            StyleSource::File(path) => path.display().to_string(),
        }
    }
}

fn looks_like_path(text: &str) -> bool {
    text.contains(['/', '\\', '.'])
}

/// Unresolved contents of a style source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawStyle {
    /// Value of `based_on_style`, if present (last occurrence wins)
    pub based_on: Option<String>,
    /// All other `(key, raw value)` pairs in encounter order
    pub overrides: Vec<(String, String)>,
}

impl RawStyle {
    /// Split `based_on_style` out of the entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut raw = RawStyle::default();
        for (key, value) in entries {
            if canonicalize(&key) == BASED_ON_STYLE {
                raw.based_on = Some(value.trim().to_string());
            } else {
                raw.overrides.push((key.trim().to_string(), value));
            }
        }
        raw
    }
}

/// Read a style source into raw overrides.
///
/// `Default` yields nothing. `Named` yields only a base reference; a bare
/// name never carries extra options.
pub fn read(source: &StyleSource) -> Result<RawStyle> {
    match source {
        StyleSource::Default => Ok(RawStyle::default()),
        StyleSource::Named(name) => Ok(RawStyle {
            based_on: Some(name.clone()),
            overrides: Vec::new(),
        }),
        StyleSource::Inline(text) => read_inline(text),
        StyleSource::File(path) => read_file(path),
    }
}

/// Parse style text given directly.
pub fn read_inline(text: &str) -> Result<RawStyle> {
    let origin = "<inline>";
    let entries = if text.trim_start().starts_with('{') {
        parse_inline_dict(text, origin)?
    } else {
        parse_section(text, STYLE_SECTION, origin)?
    };
    Ok(RawStyle::from_entries(entries))
}

/// Read and parse a style file. The format is chosen by file name.
pub fn read_file(path: &Path) -> Result<RawStyle> {
    let content = read_bounded(path)?;
    let origin = path.display().to_string();
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

    tracing::debug!(?path, "Reading style file");
    let entries = match file_name {
        SETUP_CFG_FILE => parse_section(&content, SETUP_CFG_SECTION, &origin)?,
        PYPROJECT_FILE => parse_tool_table(&content, &origin)?,
        _ => parse_section(&content, STYLE_SECTION, &origin)?,
    };
    Ok(RawStyle::from_entries(entries))
}

/// Read a file as text, refusing files over [`MAX_SOURCE_SIZE`].
pub(crate) fn read_bounded(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(Error::SourceTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_SOURCE_SIZE,
        });
    }
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
