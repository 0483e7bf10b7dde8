//! Template module - Pure text substitution template engine
//!
//! This module substitutes `{{ key }}` tokens in report templates with
//! pre-built text.
//!
//! ## Philosophy
//!
//! - **Flat substitution**: no expressions, loops or conditionals
//! - **Single pass**: substituted text is never rescanned, so a value that
//!   itself contains `{{ ... }}` is emitted verbatim
//! - **Unknown keys pass through**: a token with no bound value is left as-is
//!   and can be reported with [`scan_placeholders`] / [`ensure_resolved`]
//!
//! ## Syntax
//!
//! - Placeholders: `{{key}}` or `{{ key }}` (spaces optional)
//! - Placeholders end at the first `}}` on the same line

pub mod engine;
pub mod error;

pub use engine::{
    ensure_resolved, render, scan_placeholders, Placeholder, TemplateContext, TemplateEngine,
};
pub use error::TemplateError;
