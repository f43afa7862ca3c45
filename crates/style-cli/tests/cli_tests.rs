//! Integration tests for the pystyle binary

use assert_cmd::Command;
use predicates::prelude::*;
use style_test_utils::TestProject;

/// Get a Command for the pystyle binary, isolated from the caller's
/// environment and global style.
fn pystyle_cmd(project: &TestProject) -> Command {
    let mut cmd = Command::cargo_bin("pystyle").expect("Failed to find pystyle binary");
    cmd.env_remove("PYSTYLE_STYLE")
        .env_remove("RUST_LOG")
        .env("PYSTYLE_GLOBAL_CONFIG_DIR", project.global_dir())
        .current_dir(project.root());
    cmd
}

// ============================================================================
// resolve
// ============================================================================

#[test]
fn test_resolve_builtin_style() {
    let project = TestProject::new();
    pystyle_cmd(&project)
        .args(["resolve", "--style", "Google"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INDENT_WIDTH = 2"))
        .stdout(predicate::str::contains("BLANK_LINE_BEFORE_NESTED_CLASS_OR_DEF = true"));
}

#[test]
fn test_resolve_defaults_to_pep8_without_style_files() {
    let project = TestProject::new();
    pystyle_cmd(&project)
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains("pep8"))
        .stdout(predicate::str::contains("INDENT_WIDTH = 4"))
        .stdout(predicate::str::contains("0 option(s) differ from pep8"));
}

#[test]
fn test_resolve_discovers_style_file() {
    let project = TestProject::new();
    project.write_style_file("[style]\nbased_on_style = google\ncolumn_limit = 120\n");
    let nested = project.subdir("src/pkg");

    pystyle_cmd(&project)
        .args(["resolve", "--dir"])
        .arg(&nested)
        .assert()
        .success()
        .stdout(predicate::str::contains(".style.yapf"))
        .stdout(predicate::str::contains("COLUMN_LIMIT = 120"));
}

#[test]
fn test_resolve_uses_global_style() {
    let project = TestProject::new();
    project.write_global_style("[style]\nbased_on_style = facebook\n");

    pystyle_cmd(&project)
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains("DEDENT_CLOSING_BRACKETS = true"));
}

#[test]
fn test_resolve_style_from_env() {
    let project = TestProject::new();
    pystyle_cmd(&project)
        .env("PYSTYLE_STYLE", "{based_on_style: pep8, tab_width: 20}")
        .args(["resolve", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""TAB_WIDTH": 20"#));
}

#[test]
fn test_resolve_json_is_parseable() {
    let project = TestProject::new();
    let output = pystyle_cmd(&project)
        .args(["resolve", "--style", "chromium", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["INDENT_WIDTH"], 2);
    assert_eq!(json["JOIN_MULTIPLE_LINES"], false);
    assert_eq!(json["I18N_FUNCTION_CALL"], serde_json::json!(["N_", "_"]));
}

#[test]
fn test_resolve_unknown_style_fails() {
    let project = TestProject::new();
    pystyle_cmd(&project)
        .args(["resolve", "--style", "not_a_style"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown style name: 'not_a_style'"));
}

#[test]
fn test_resolve_invalid_value_fails() {
    let project = TestProject::new();
    let path = project.write_style_file("[style]\nindent_width = wide\n");

    pystyle_cmd(&project)
        .args(["resolve", "--style"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for INDENT_WIDTH"));
}

#[test]
fn test_resolve_reports_broken_discovered_setup_cfg() {
    let project = TestProject::new();
    project.write_setup_cfg("[yapf]\nbased_on_style = google\nthis line is broken\n");
    project.write_global_style("[style]\nbased_on_style = facebook\n");

    pystyle_cmd(&project)
        .arg("resolve")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("setup.cfg (line 3)"));
}

#[test]
fn test_resolve_prints_the_file_it_resolved() {
    let project = TestProject::new();
    project.write_setup_cfg("[metadata]\nname = demo\n");
    project.write_pyproject("[tool.yapf]\ncolumn_limit = 101\n");

    pystyle_cmd(&project)
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains("pyproject.toml"))
        .stdout(predicate::str::contains("COLUMN_LIMIT = 101"));
}

#[test]
fn test_resolve_missing_dir_fails() {
    let project = TestProject::new();
    pystyle_cmd(&project)
        .args(["resolve", "--dir", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

// ============================================================================
// list-styles / list-options / option-help
// ============================================================================

#[test]
fn test_list_styles() {
    let project = TestProject::new();
    pystyle_cmd(&project)
        .arg("list-styles")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Styles"))
        .stdout(predicate::str::contains("pep8"))
        .stdout(predicate::str::contains("google"))
        .stdout(predicate::str::contains("chromium"))
        .stdout(predicate::str::contains("facebook"))
        .stdout(predicate::str::contains("(default)"));
}

#[test]
fn test_list_options_for_style() {
    let project = TestProject::new();
    pystyle_cmd(&project)
        .args(["list-options", "--style", "google"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I18N_FUNCTION_CALL"))
        .stdout(predicate::str::contains("= N_, _"))
        .stdout(predicate::str::contains("32 options"));
}

#[test]
fn test_option_help() {
    let project = TestProject::new();
    pystyle_cmd(&project)
        .args(["option-help", "column_limit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("COLUMN_LIMIT"))
        .stdout(predicate::str::contains("integer"))
        .stdout(predicate::str::contains("79"));
}

#[test]
fn test_option_help_unknown_option() {
    let project = TestProject::new();
    pystyle_cmd(&project)
        .args(["option-help", "not_an_option"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown style option"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let project = TestProject::new();
    let output = pystyle_cmd(&project)
        .args(["-v", "resolve", "--style", "pep8", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(serde_json::from_slice::<serde_json::Value>(&output.stdout).is_ok());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Resolving style"));
}
