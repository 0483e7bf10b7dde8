//! Knowledge file on disk

use super::patch::{locate, splice};
use super::scan::InsertionPoint;
use crate::error::{DossierError, Result};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Line terminator detected when the file was read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// First terminator in `text` decides; LF when there is none
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(pos) if text[..pos].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// A markdown knowledge file split into lines
///
/// Lines are held without terminators. Writing back restores the detected
/// line ending and the final newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeDocument {
    path: PathBuf,
    lines: Vec<String>,
    line_ending: LineEnding,
    trailing_newline: bool,
}

impl KnowledgeDocument {
    /// Read a knowledge file
    ///
    /// # Errors
    ///
    /// `MissingInput` if the file does not exist or cannot be read,
    /// `MalformedInput` if it is not UTF-8.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::InvalidData => DossierError::MalformedInput {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
            _ => DossierError::MissingInput {
                path: path.to_path_buf(),
            },
        })?;

        tracing::debug!(path = %path.display(), bytes = text.len(), "read knowledge file");
        Ok(Self::parse(path, &text))
    }

    /// Build a document from text already in memory
    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Self {
        let line_ending = LineEnding::detect(text);
        let trailing_newline = text.ends_with('\n');
        let body = text
            .strip_suffix('\n')
            .map(|b| b.strip_suffix('\r').unwrap_or(b))
            .unwrap_or(text);

        let lines = if text.is_empty() {
            Vec::new()
        } else {
            body.split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
                .collect()
        };

        Self {
            path: path.into(),
            lines,
            line_ending,
            trailing_newline,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Append `content` to the end of `section`
    ///
    /// # Errors
    ///
    /// `SectionNotFound` if no heading matches; the document is left as is.
    pub fn patch_section(&mut self, section: &str, content: &str) -> Result<InsertionPoint> {
        let point = locate(&self.lines, section)?;
        let at_eof = point.boundary == self.lines.len();

        self.lines = splice(&self.lines, point, content);
        if at_eof {
            self.trailing_newline = true;
        }

        tracing::debug!(
            section,
            heading = point.heading,
            boundary = point.boundary,
            "patched section"
        );
        Ok(point)
    }

    /// Write back to the path the document was opened from
    pub fn save(&self) -> Result<()> {
        self.write_to(&self.path)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path.as_ref(), self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for KnowledgeDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ending = self.line_ending.as_str();
        f.write_str(&self.lines.join(ending))?;
        if self.trailing_newline && !self.lines.is_empty() {
            f.write_str(ending)?;
        }
        Ok(())
    }
}
