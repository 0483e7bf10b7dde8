//! Template error types

use std::fmt;

/// Template diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder survived rendering
    UnresolvedPlaceholder {
        /// The key inside the braces
        key: String,
        /// Line number in the rendered text
        line: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnresolvedPlaceholder { key, line } => {
                write!(
                    f,
                    "Unresolved placeholder '{{{{ {} }}}}' at line {}",
                    key, line
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}
