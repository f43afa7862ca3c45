//! Style discovery in realistic project layouts

use pretty_assertions::assert_eq;
use style_core::{StyleDiscovery, resolve};
use style_test_utils::TestProject;

fn discovery(project: &TestProject) -> StyleDiscovery {
    StyleDiscovery::with_global_config_dir(project.global_dir())
}

#[test]
fn test_nearest_style_wins_over_parent() {
    let project = TestProject::new();
    project.write_setup_cfg("[yapf]\nbased_on_style = google\n");
    project.write("pkg/.style.yapf", "[style]\nbased_on_style = facebook\n");
    let module_dir = project.subdir("pkg/sub");

    let found = discovery(&project).find_for_dir(&module_dir);
    assert_eq!(found, Some(project.root().join("pkg/.style.yapf")));

    let cfg = discovery(&project).resolve_for_dir(&module_dir).unwrap();
    assert_eq!(cfg, resolve(Some("facebook")).unwrap());
}

#[test]
fn test_precedence_within_one_directory() {
    let project = TestProject::new();
    project.write_pyproject("[tool.yapf]\nbased_on_style = \"chromium\"\n");
    project.write_setup_cfg("[yapf]\nbased_on_style = google\n");

    let cfg = discovery(&project).resolve_for_dir(project.root()).unwrap();
    assert_eq!(cfg, resolve(Some("google")).unwrap());

    project.write_style_file("[style]\nbased_on_style = facebook\n");
    let cfg = discovery(&project).resolve_for_dir(project.root()).unwrap();
    assert_eq!(cfg, resolve(Some("facebook")).unwrap());
}

#[test]
fn test_unrelated_config_files_are_skipped() {
    let project = TestProject::new();
    project.write_setup_cfg("[flake8]\nmax-line-length = 100\n");
    project.write_pyproject("[tool.black]\nline-length = 100\n");

    assert_eq!(discovery(&project).find_for_dir(project.root()), None);
    assert_eq!(
        discovery(&project).resolve_for_dir(project.root()).unwrap(),
        resolve(None).unwrap()
    );
}

#[test]
fn test_project_style_beats_global_style() {
    let project = TestProject::new();
    project.write_global_style("[style]\nbased_on_style = chromium\n");
    project.write_pyproject("[tool.yapf]\ncolumn_limit = 99\n");

    let cfg = discovery(&project).resolve_for_dir(project.root()).unwrap();
    assert_eq!(cfg.int("COLUMN_LIMIT"), Some(99));
    assert_eq!(cfg.int("INDENT_WIDTH"), Some(4));
}

#[test]
fn test_broken_discovered_file_is_reported() {
    let project = TestProject::new();
    project.write_style_file("[style]\nno_such_option = 1\n");

    let err = discovery(&project)
        .resolve_for_dir(project.root())
        .unwrap_err();
    assert!(err.to_string().contains("no_such_option"));
}
