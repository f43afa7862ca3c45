//! End-to-end resolution of style files written to disk
//!
//! Each test writes a style file, resolves it by path and checks the result
//! against the built-in style it is based on.

use pretty_assertions::assert_eq;
use std::io::Write;
use style_core::{Error, StyleConfig, resolve};
use tempfile::NamedTempFile;

fn style_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn resolve_file(file: &NamedTempFile) -> style_core::Result<StyleConfig> {
    resolve(file.path().to_str())
}

/// Changed option names relative to a built-in style.
fn changes_from(cfg: &StyleConfig, base: &str) -> Vec<&'static str> {
    let base = resolve(Some(base)).unwrap();
    cfg.diff(&base).iter().map(|name| name.as_str()).collect()
}

#[test]
fn test_file_without_base_is_pep8() {
    let file = style_file("[style]\ntab_width = 20\n");
    let cfg = resolve_file(&file).unwrap();

    assert_eq!(cfg.int("TAB_WIDTH"), Some(20));
    assert_eq!(changes_from(&cfg, "pep8"), vec!["TAB_WIDTH"]);
}

#[test]
fn test_file_based_on_pep8() {
    let file = style_file("[style]\nbased_on_style = pep8\ntab_width = 40\n");
    let cfg = resolve_file(&file).unwrap();

    assert_eq!(cfg.int("TAB_WIDTH"), Some(40));
    assert_eq!(changes_from(&cfg, "pep8"), vec!["TAB_WIDTH"]);
}

#[test]
fn test_file_based_on_google() {
    let file = style_file("[style]\nbased_on_style = google\nsplit_penalty_matching_bracket = 33\n");
    let cfg = resolve_file(&file).unwrap();

    assert_eq!(cfg.int("SPLIT_PENALTY_MATCHING_BRACKET"), Some(33));
    assert_eq!(
        changes_from(&cfg, "google"),
        vec!["SPLIT_PENALTY_MATCHING_BRACKET"]
    );
}

#[test]
fn test_file_bool_values() {
    let file = style_file(
        "[style]\n\
         based_on_style = google\n\
         SPLIT_BEFORE_NAMED_ASSIGNS = False\n\
         split_before_logical_operator = true\n",
    );
    let cfg = resolve_file(&file).unwrap();

    assert_eq!(cfg.bool("SPLIT_BEFORE_NAMED_ASSIGNS"), Some(false));
    assert_eq!(cfg.bool("SPLIT_BEFORE_LOGICAL_OPERATOR"), Some(true));
    assert_eq!(
        changes_from(&cfg, "google"),
        vec!["SPLIT_BEFORE_LOGICAL_OPERATOR", "SPLIT_BEFORE_NAMED_ASSIGNS"]
    );
}

#[test]
fn test_file_string_list_value() {
    let file = style_file("[style]\nbased_on_style = google\nI18N_FUNCTION_CALL = N_, V_, T_\n");
    let cfg = resolve_file(&file).unwrap();

    assert_eq!(
        cfg.list("I18N_FUNCTION_CALL"),
        Some(&["N_".to_string(), "V_".to_string(), "T_".to_string()][..])
    );
}

#[test]
fn test_file_resolution_is_repeatable() {
    let file = style_file("[style]\nbased_on_style = chromium\ncolumn_limit = 100\n");
    assert_eq!(resolve_file(&file).unwrap(), resolve_file(&file).unwrap());
}

#[test]
fn test_file_errors_report_origin() {
    let file = style_file("[style]\nindent_width 2\n");
    let err = resolve_file(&file).unwrap_err();

    assert!(matches!(err, Error::MalformedStyleSource { line: Some(2), .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn test_resolved_config_serializes_every_option() {
    let file = style_file("[style]\nbased_on_style = facebook\n");
    let cfg = resolve_file(&file).unwrap();

    let json = serde_json::to_value(&cfg).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), cfg.len());
    assert_eq!(object["DEDENT_CLOSING_BRACKETS"], true);
    assert_eq!(object["COLUMN_LIMIT"], 80);
}
