//! `pyproject.toml` `[tool.yapf]` table

use super::ini::has_section;
use crate::{Error, Result};
use toml::{Table, Value};

const TOOL_TABLE: &str = "tool.yapf";

fn tool_table(doc: &Table) -> Option<&Table> {
    doc.get("tool")?.as_table()?.get("yapf")?.as_table()
}

/// Whether `content` has a `[tool.yapf]` table.
///
/// Text that is not valid TOML still counts when it has a `[tool.yapf]`
/// header, so the parse error surfaces when the file is read.
pub fn has_tool_table(content: &str) -> bool {
    match content.parse::<Table>() {
        Ok(doc) => tool_table(&doc).is_some(),
        Err(_) => has_section(content, TOOL_TABLE),
    }
}

/// Read the `[tool.yapf]` table as raw `(key, value)` text pairs, in the
/// order they were written.
///
/// Strings are used as-is, integers and booleans are rendered, and arrays of
/// strings are joined with `, ` so they read like a comma-separated list.
pub fn parse_tool_table(content: &str, origin: &str) -> Result<Vec<(String, String)>> {
    let doc: Table = content
        .parse()
        .map_err(|e: toml::de::Error| Error::malformed(origin, None, e.message().to_string()))?;

    let table = tool_table(&doc)
        .ok_or_else(|| Error::malformed(origin, None, "missing [tool.yapf] table"))?;

    table
        .iter()
        .map(|(key, value)| {
            let raw = render(value).ok_or_else(|| {
                Error::malformed(
                    origin,
                    None,
                    format!("unsupported value for '{key}': {value}"),
                )
            })?;
            Ok((key.clone(), raw))
        })
        .collect()
}

fn render(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts = items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()?;
            Some(parts.join(", "))
        }
        _ => None,
    }
}
