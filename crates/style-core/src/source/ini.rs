//! Section-scoped `key = value` text

use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// `[name]`, optionally followed by a `#` or `;` comment.
static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\s*([^\]]*?)\s*\](?:\s*[#;].*)?$").unwrap());

static ENTRY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([^=:]*?)\s*[=:]\s*(.*)$").unwrap());

fn is_comment_or_blank(line: &str) -> bool {
    line.is_empty() || line.starts_with('#') || line.starts_with(';')
}

/// Whether `content` has a `[section]` header (case-insensitive).
///
/// Only headers are looked at; the rest of the file may be malformed.
pub fn has_section(content: &str, section: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !is_comment_or_blank(line))
        .filter_map(|line| SECTION_HEADER.captures(line))
        .any(|caps| caps[1].eq_ignore_ascii_case(section))
}

/// Collect the `(key, value)` pairs of one section, in order.
///
/// - blank lines and lines starting with `#` or `;` are skipped
/// - both `key = value` and `key: value` are accepted
/// - other sections are skipped
/// - section names match case-insensitively
///
/// Fails if the section is absent, if an entry appears before any section
/// header, or if a line in the section is not an entry.
pub fn parse_section(content: &str, section: &str, origin: &str) -> Result<Vec<(String, String)>> {
    let mut entries = Vec::new();
    let mut current: Option<String> = None;
    let mut found = false;

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();

        if is_comment_or_blank(trimmed) {
            continue;
        }

        if let Some(caps) = SECTION_HEADER.captures(trimmed) {
            let name = caps[1].to_string();
            if name.eq_ignore_ascii_case(section) {
                found = true;
            }
            tracing::trace!(section = %name, line = line_no, "Section header");
            current = Some(name);
            continue;
        }

        let Some(current_section) = current.as_deref() else {
            return Err(Error::malformed(
                origin,
                Some(line_no),
                format!("'{trimmed}' appears before any section header"),
            ));
        };

        if !current_section.eq_ignore_ascii_case(section) {
            continue;
        }

        let caps = ENTRY.captures(trimmed).ok_or_else(|| {
            Error::malformed(
                origin,
                Some(line_no),
                format!("expected 'key = value', found '{trimmed}'"),
            )
        })?;

        let key = caps[1].trim();
        if key.is_empty() {
            return Err(Error::malformed(origin, Some(line_no), "missing option name"));
        }

        tracing::trace!(key, line = line_no, "Style entry");
        entries.push((key.to_string(), caps[2].trim().to_string()));
    }

    if !found {
        return Err(Error::malformed(
            origin,
            None,
            format!("missing [{section}] section"),
        ));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_entries_in_order() {
        let text = "[style]\nbased_on_style = google\nSPLIT_BEFORE_NAMED_ASSIGNS = False\nsplit_before_logical_operator = true\n";
        let parsed = parse_section(text, "style", "test").unwrap();
        assert_eq!(
            parsed,
            entries(&[
                ("based_on_style", "google"),
                ("SPLIT_BEFORE_NAMED_ASSIGNS", "False"),
                ("split_before_logical_operator", "true"),
            ])
        );
    }

    #[test]
    fn whitespace_around_keys_and_values_is_insignificant() {
        let text = "  [ style ]  \n   tab_width   =   20   \nI18N_FUNCTION_CALL=N_, V_, T_\n";
        let parsed = parse_section(text, "style", "test").unwrap();
        assert_eq!(
            parsed,
            entries(&[("tab_width", "20"), ("I18N_FUNCTION_CALL", "N_, V_, T_")])
        );
    }

    #[test]
    fn colon_separator_and_comments() {
        let text = "# leading comment\n[style]\n; another\nindent_width: 2\n\n";
        let parsed = parse_section(text, "style", "test").unwrap();
        assert_eq!(parsed, entries(&[("indent_width", "2")]));
    }

    #[test]
    fn value_may_contain_separators() {
        let text = "[style]\ni18n_comment = #\\..*=:\n";
        let parsed = parse_section(text, "style", "test").unwrap();
        assert_eq!(parsed, entries(&[("i18n_comment", "#\\..*=:")]));
    }

    #[test]
    fn other_sections_are_skipped() {
        let text = "[metadata]\nname = demo\n[yapf]\ncolumn_limit = 100\n[flake8]\nmax-line-length = 100\n";
        let parsed = parse_section(text, "yapf", "setup.cfg").unwrap();
        assert_eq!(parsed, entries(&[("column_limit", "100")]));
    }

    #[test]
    fn duplicates_are_all_kept_in_order() {
        let text = "[style]\ntab_width = 1\ntab_width = 2\n";
        let parsed = parse_section(text, "style", "test").unwrap();
        assert_eq!(parsed, entries(&[("tab_width", "1"), ("tab_width", "2")]));
    }

    #[test]
    fn empty_section_is_valid() {
        assert!(parse_section("[style]\n", "style", "test").unwrap().is_empty());
    }

    #[test]
    fn missing_section_is_malformed() {
        let err = parse_section("[other]\na = 1\n", "style", "test").unwrap_err();
        assert!(err.to_string().contains("missing [style] section"));
    }

    #[test]
    fn entry_before_header_is_malformed() {
        let err = parse_section("tab_width = 2\n[style]\n", "style", "test").unwrap_err();
        assert!(matches!(err, Error::MalformedStyleSource { line: Some(1), .. }));
    }

    #[test]
    fn line_without_separator_is_malformed() {
        let err = parse_section("[style]\njust_a_word\n", "style", "test").unwrap_err();
        assert!(matches!(err, Error::MalformedStyleSource { line: Some(2), .. }));
    }

    #[test]
    fn header_may_carry_trailing_comment() {
        let text = "[style] ; project style\nindent_width = 2\n[other]  # ignored\nx = 1\n";
        let parsed = parse_section(text, "style", "test").unwrap();
        assert_eq!(parsed, entries(&[("indent_width", "2")]));
    }

    #[test]
    fn has_section_ignores_broken_lines() {
        let text = "[metadata]\nname = demo\n[YAPF]\nthis line is broken\n";
        assert!(has_section(text, "yapf"));
        assert!(!has_section(text, "style"));
        assert!(!has_section("# [yapf]\n", "yapf"));
    }

    #[test]
    fn empty_key_is_malformed() {
        let err = parse_section("[style]\n = 2\n", "style", "test").unwrap_err();
        assert!(err.to_string().contains("missing option name"));
    }
}
