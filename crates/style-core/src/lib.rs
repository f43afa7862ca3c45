//! Style configuration resolution for a Python code formatter.
//!
//! Given a style source (nothing, a built-in style name, inline style text,
//! or a style file) this crate produces a [`StyleConfig`]: a complete,
//! typed value for every registered formatting option.
//!
//! - **Option registry**: the fixed set of options with their kinds, defaults and help
//! - **Coercion**: raw text to typed values, driven by the option's kind
//! - **Catalog**: built-in styles (`pep8`, `google`, `chromium`, `facebook`)
//! - **Sources**: `[style]` files, `setup.cfg`, `pyproject.toml` and inline text
//! - **Resolution**: one catalog base plus ordered overrides
//! - **Discovery**: finding the style file that applies to a directory
//!
//! # Example
//!
//! ```
//! use style_core::resolve;
//!
//! let pep8 = resolve(None).unwrap();
//! assert_eq!(pep8.int("indent_width"), Some(4));
//!
//! let custom = resolve(Some("[style]\nbased_on_style = google\ntab_width = 20\n")).unwrap();
//! assert_eq!(custom.int("TAB_WIDTH"), Some(20));
//! assert_eq!(custom.bool("BLANK_LINE_BEFORE_NESTED_CLASS_OR_DEF"), Some(true));
//! ```

pub mod catalog;
pub mod coerce;
pub mod config;
pub mod discovery;
pub mod error;
pub mod registry;
pub mod source;
pub mod value;

pub use catalog::StyleCatalog;
pub use config::{StyleConfig, StyleResolver, apply_overrides, resolve};
pub use discovery::{StyleDiscovery, resolve_found};
pub use error::{Error, Result};
pub use registry::{OptionName, OptionSpec};
pub use source::{RawStyle, StyleSource};
pub use value::{OptionKind, OptionValue};
