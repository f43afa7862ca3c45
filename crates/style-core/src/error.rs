//! Error types for style-core

use std::path::PathBuf;

use crate::value::OptionKind;

/// Result type for style-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a style
///
/// None of these are recovered from locally. A style that fails to resolve
/// is reported to the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A bare style name or `based_on_style` value is not in the catalog
    #[error("Unknown style name: '{name}'")]
    UnknownStyleName { name: String },

    /// A key that is not a registered option
    #[error("Unknown style option: '{key}'")]
    UnknownOption { key: String },

    /// A raw value that does not satisfy its option's grammar
    #[error("Invalid value for {option}: '{value}' is not a valid {expected}")]
    InvalidValue {
        option: String,
        value: String,
        expected: OptionKind,
    },

    /// Structurally invalid style text
    #[error("Malformed style source {origin}{}: {message}", line_suffix(.line))]
    MalformedStyleSource {
        origin: String,
        line: Option<usize>,
        message: String,
    },

    /// The style file exceeds the readable size limit
    #[error("Style file too large: {path} is {size} bytes (max {max})")]
    SourceTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" (line {l})")).unwrap_or_default()
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(
        origin: impl Into<String>,
        line: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedStyleSource {
            origin: origin.into(),
            line,
            message: message.into(),
        }
    }
}
