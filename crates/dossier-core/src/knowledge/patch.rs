//! Section insertion on an in-memory line list

use super::heading::HeadingMatcher;
use super::scan::{find_insertion_point, InsertionPoint};
use crate::error::{DossierError, Result};

/// Find the insertion point of `section` in `lines`
///
/// # Errors
///
/// `SectionNotFound` if no heading matches.
pub fn locate<S: AsRef<str>>(lines: &[S], section: &str) -> Result<InsertionPoint> {
    let matcher = HeadingMatcher::new(section)?;
    find_insertion_point(lines, &matcher).ok_or_else(|| DossierError::SectionNotFound {
        section: section.to_string(),
    })
}

/// Split `content` into the lines to insert
///
/// Trailing line breaks are dropped, so `"x"` and `"x\n"` insert the same
/// single line. Empty content inserts one empty line.
pub fn content_lines(content: &str) -> Vec<String> {
    content
        .trim_end_matches(['\n', '\r'])
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Insert `content` at the end of `section`, returning the new line list
///
/// Content lands right before the next `## ` heading, or at the end of the
/// document when the section is last. A blank separator line goes in first if
/// the line above the insertion point is not blank. Patching is not
/// idempotent: the same content patched twice appears twice.
///
/// # Errors
///
/// `SectionNotFound` if no heading matches. `lines` is never modified.
pub fn patch<S: AsRef<str>>(lines: &[S], section: &str, content: &str) -> Result<Vec<String>> {
    let point = locate(lines, section)?;
    Ok(splice(lines, point, content))
}

pub(crate) fn splice<S: AsRef<str>>(
    lines: &[S],
    point: InsertionPoint,
    content: &str,
) -> Vec<String> {
    let mut block = Vec::new();
    let above = lines[point.boundary - 1].as_ref();
    if !above.trim().is_empty() {
        block.push(String::new());
    }
    block.extend(content_lines(content));

    let mut patched: Vec<String> = Vec::with_capacity(lines.len() + block.len());
    patched.extend(lines[..point.boundary].iter().map(|l| l.as_ref().to_string()));
    patched.extend(block);
    patched.extend(lines[point.boundary..].iter().map(|l| l.as_ref().to_string()));
    patched
}
