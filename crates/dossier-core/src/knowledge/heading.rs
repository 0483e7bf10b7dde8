//! Heading line recognition

use crate::error::{DossierError, Result};
use regex::Regex;

/// Prefix shared by every section heading
pub const HEADING_MARKER: &str = "## ";

/// True if `line` opens a section (any title)
///
/// Only the literal `## ` prefix counts as a boundary. [`HeadingMatcher`]
/// accepts any whitespace after `##`, so a `##\t标题` line can be patched as
/// a target but does not end the section above it.
pub fn is_heading(line: &str) -> bool {
    line.starts_with(HEADING_MARKER)
}

/// Matches the heading of one named section
///
/// Accepts `## Title` and `## 3. Title`. The match is anchored at the start of
/// the line and is a prefix match: text after the title is ignored.
#[derive(Debug, Clone)]
pub struct HeadingMatcher {
    section: String,
    pattern: Regex,
}

impl HeadingMatcher {
    pub fn new(section: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"^##\s+(\d+\.\s+)?{}", regex::escape(section)))
            .map_err(|e| DossierError::SectionPatternInvalid(e.to_string()))?;

        Ok(Self {
            section: section.to_string(),
            pattern,
        })
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}
