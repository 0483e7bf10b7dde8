//! Shared test helpers for the dossier crates

mod fixtures;

pub use fixtures::{sample_knowledge_doc, sample_report_json, write_fixture};

use tempfile::TempDir;

/// Scratch directory under `<cwd>/.tmp/`, removed on drop
///
/// Keeps report outputs and knowledge files written by tests inside the crate
/// being tested instead of the system temp dir.
///
/// # Panics
///
/// Panics if `.tmp/` or the scratch directory cannot be created.
///
/// ```rust
/// use dossier_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// std::fs::write(temp.path().join("cloudy.md"), "## 1. 项目规范\n").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let cwd = std::env::current_dir().expect("Failed to get current directory");
    let scratch_root = cwd.join(".tmp");
    std::fs::create_dir_all(&scratch_root).expect("Failed to create .tmp directory");
    TempDir::new_in(&scratch_root).expect("Failed to create scratch directory in .tmp/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_dir_lives_under_tmp() {
        let temp = temp_dir_in_workspace();
        assert!(temp.path().is_dir());
        assert_eq!(
            temp.path().parent().and_then(|p| p.file_name()),
            Some(std::ffi::OsStr::new(".tmp"))
        );
    }

    #[test]
    fn test_scratch_dir_removed_on_drop() {
        let temp = temp_dir_in_workspace();
        let path = write_fixture(temp.path(), "cloudy.md", sample_knowledge_doc());
        let dir = temp.path().to_path_buf();
        assert!(path.exists());

        drop(temp);
        assert!(!dir.exists(), "{} should be gone", dir.display());
    }

    #[test]
    fn test_scratch_dirs_are_distinct() {
        let a = temp_dir_in_workspace();
        let b = temp_dir_in_workspace();
        assert_ne!(a.path(), b.path());
    }
}
