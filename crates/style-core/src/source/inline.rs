//! Inline dict form: `{based_on_style: pep8, indent_width: 2}`

use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// `key: value` or `key = value`; the value is a double-quoted string, a
/// single-quoted string, or a bare token.
static PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z0-9_]+)\s*[:=]\s*(?:"([^"]*)"|'([^']*)'|([A-Za-z0-9_.+\-]+))"#).unwrap()
});

/// Parse `{key: value, ...}` into `(key, value)` pairs in order.
///
/// Quotes around values are removed, so a quoted value may hold commas.
/// Anything between pairs other than commas and whitespace is rejected.
pub fn parse_inline_dict(text: &str, origin: &str) -> Result<Vec<(String, String)>> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| {
            Error::malformed(
                origin,
                None,
                format!("invalid style dict syntax: '{trimmed}'"),
            )
        })?;

    let mut entries = Vec::new();
    let mut last_end = 0;

    for caps in PAIR.captures_iter(body) {
        let Some(whole) = caps.get(0) else { continue };
        check_separator(&body[last_end..whole.start()], origin)?;
        last_end = whole.end();

        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str())
            .unwrap_or_default();
        entries.push((caps[1].to_string(), value.to_string()));
    }
    check_separator(&body[last_end..], origin)?;

    Ok(entries)
}

fn check_separator(gap: &str, origin: &str) -> Result<()> {
    if gap.chars().all(|c| c == ',' || c.is_whitespace()) {
        Ok(())
    } else {
        Err(Error::malformed(
            origin,
            None,
            format!("unexpected '{}' in style dict", gap.trim()),
        ))
    }
}
