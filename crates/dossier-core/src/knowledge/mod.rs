//! Markdown knowledge file maintenance
//!
//! A knowledge file is a markdown document split into `## ` sections. Content
//! is appended to the end of a named section, right before the next `## `
//! heading:
//!
//! ```text
//! ## 1. 项目规范          <- matched by "项目规范"
//! - 已有规则
//!                         <- blank separator (inserted if missing)
//! - 新规则                <- inserted content
//! ## 2. 下一节            <- boundary
//! ```

mod document;
mod heading;
mod init;
mod patch;
mod scan;

pub use document::{KnowledgeDocument, LineEnding};
pub use heading::{is_heading, HeadingMatcher, HEADING_MARKER};
pub use init::{init_knowledge_file, InitOutcome, BUILTIN_KNOWLEDGE_TEMPLATE};
pub use patch::{content_lines, locate, patch};
pub use scan::{find_insertion_point, InsertionPoint, ScanState};
