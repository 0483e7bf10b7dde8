use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DossierError {
    // Input errors
    #[error("MISSING_INPUT: '{}' not found or unreadable", path.display())]
    MissingInput { path: PathBuf },

    #[error("MALFORMED_INPUT: failed to decode '{}': {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    // Knowledge file errors
    #[error("SECTION_NOT_FOUND: section '{section}' not found")]
    SectionNotFound { section: String },

    #[error("SECTION_PATTERN_INVALID: {0}")]
    SectionPatternInvalid(String),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID: failed to parse dossier.toml: {0}")]
    ConfigInvalid(String),

    // Template errors
    #[error("TEMPLATE_ERROR: {0}")]
    Template(#[from] crate::template::TemplateError),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DossierError>;
