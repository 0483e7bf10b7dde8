//! Single-pass scan for a section's insertion boundary

use super::heading::{is_heading, HeadingMatcher};
use std::ops::ControlFlow;

/// Where a section starts and where new content goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionPoint {
    /// Index of the matched heading line
    pub heading: usize,
    /// Index of the next heading, or the line count when the section runs to EOF
    pub boundary: usize,
}

/// Scan state machine
///
/// ```text
/// Searching ──target heading──> InsertionPointFound ──any heading──> [boundary]
///     │                                │
///     └──EOF──> not found              └──EOF──> [boundary = len]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Looking for the target heading
    Searching,
    /// Inside the target section, looking for the next heading
    InsertionPointFound { heading: usize },
}

impl ScanState {
    /// Feed one line; `Break` carries the finished insertion point
    pub fn advance(
        self,
        index: usize,
        line: &str,
        matcher: &HeadingMatcher,
    ) -> ControlFlow<InsertionPoint, ScanState> {
        match self {
            ScanState::Searching if matcher.is_match(line) => {
                ControlFlow::Continue(ScanState::InsertionPointFound { heading: index })
            }
            ScanState::Searching => ControlFlow::Continue(ScanState::Searching),
            ScanState::InsertionPointFound { heading } if is_heading(line) => {
                ControlFlow::Break(InsertionPoint {
                    heading,
                    boundary: index,
                })
            }
            found @ ScanState::InsertionPointFound { .. } => ControlFlow::Continue(found),
        }
    }

    /// Resolve the state at end of document
    pub fn finish(self, line_count: usize) -> Option<InsertionPoint> {
        match self {
            ScanState::Searching => None,
            ScanState::InsertionPointFound { heading } => Some(InsertionPoint {
                heading,
                boundary: line_count,
            }),
        }
    }
}

/// Locate the first section whose heading matches
pub fn find_insertion_point<S: AsRef<str>>(
    lines: &[S],
    matcher: &HeadingMatcher,
) -> Option<InsertionPoint> {
    let mut state = ScanState::Searching;
    for (index, line) in lines.iter().enumerate() {
        match state.advance(index, line.as_ref(), matcher) {
            ControlFlow::Continue(next) => state = next,
            ControlFlow::Break(point) => return Some(point),
        }
    }
    state.finish(lines.len())
}
