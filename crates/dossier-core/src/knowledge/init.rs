//! Knowledge file bootstrap

use crate::error::{DossierError, Result};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Skeleton written by `init_knowledge_file`
pub const BUILTIN_KNOWLEDGE_TEMPLATE: &str = include_str!("../../assets/knowledge_template.md");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Created(PathBuf),
    /// File was already there and has not been touched
    AlreadyExists(PathBuf),
}

impl InitOutcome {
    pub fn path(&self) -> &Path {
        match self {
            InitOutcome::Created(path) | InitOutcome::AlreadyExists(path) => path,
        }
    }
}

/// Create `dir/file_name` from the built-in skeleton
///
/// Never overwrites an existing file.
///
/// # Errors
///
/// `MissingInput` if `dir` does not exist, `IoError` for other write failures.
pub fn init_knowledge_file(dir: &Path, file_name: &str) -> Result<InitOutcome> {
    if !dir.is_dir() {
        return Err(DossierError::MissingInput {
            path: dir.to_path_buf(),
        });
    }

    let path = dir.join(file_name);
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!(path = %path.display(), "knowledge file already exists");
            return Ok(InitOutcome::AlreadyExists(path));
        }
        Err(e) => return Err(e.into()),
    };

    file.write_all(BUILTIN_KNOWLEDGE_TEMPLATE.as_bytes())?;
    tracing::debug!(path = %path.display(), "created knowledge file");
    Ok(InitOutcome::Created(path))
}
