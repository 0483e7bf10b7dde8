//! Tests for template engine
//!
//! Organized into focused submodules.

use super::*;

// Test helper functions
mod helpers;

// TokenStream tests
mod tokenstream;


// Diagnostics for placeholders left in output
mod unresolved;
