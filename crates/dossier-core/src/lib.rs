// Core modules
pub mod config;
pub mod error;
pub mod knowledge;
pub mod report;
pub mod template;

// Re-export commonly used types
pub use error::{DossierError, Result};
