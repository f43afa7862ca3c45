//! [`TestProject`] builder for style discovery and resolution scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory with helpers for writing style sources.
///
/// A second temporary directory stands in for the user's global config
/// directory so tests never read the real one.
///
/// # Example
///
/// ```rust,no_run
/// use style_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write_style_file("[style]\nbased_on_style = google\n");
/// let nested = project.subdir("pkg/module");
/// assert!(nested.starts_with(project.root()));
/// ```
pub struct TestProject {
    temp_dir: TempDir,
    global_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty project and an empty global config directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
            global_dir: TempDir::new().unwrap(),
        }
    }

    /// Root path of the project.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Stand-in for the user's global config directory.
    pub fn global_dir(&self) -> &Path {
        self.global_dir.path()
    }

    /// Write `content` to `rel` (relative to the root), creating parent
    /// directories. Returns the full path.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write `.style.yapf` at the root.
    pub fn write_style_file(&self, content: &str) -> PathBuf {
        self.write(".style.yapf", content)
    }

    /// Write `setup.cfg` at the root.
    pub fn write_setup_cfg(&self, content: &str) -> PathBuf {
        self.write("setup.cfg", content)
    }

    /// Write `pyproject.toml` at the root.
    pub fn write_pyproject(&self, content: &str) -> PathBuf {
        self.write("pyproject.toml", content)
    }

    /// Write the global `style` file.
    pub fn write_global_style(&self, content: &str) -> PathBuf {
        let path = self.global_dir().join("style");
        fs::write(&path, content).unwrap();
        path
    }

    /// Create (if needed) and return a directory below the root.
    pub fn subdir(&self, rel: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Assert that the file at `rel` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, rel: &str, content: &str) {
        let full_path = self.root().join(rel);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_creates_parent_directories() {
        let project = TestProject::new();
        let path = project.write("a/b/.style.yapf", "[style]\n");
        assert!(path.is_file());
        project.assert_file_contains("a/b/.style.yapf", "[style]");
    }

    #[test]
    fn global_dir_is_separate_from_root() {
        let project = TestProject::new();
        let global = project.write_global_style("[style]\n");
        assert!(!global.starts_with(project.root()));
    }
}
