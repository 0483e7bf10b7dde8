//! Advisory board report rendering
//!
//! A [`ReportData`] record is turned into HTML in two steps:
//!
//! 1. list-shaped fields become markup fragments ([`build_fragments`])
//! 2. fragments and scalar fields are substituted into a template ([`render`])
//!
//! Rendering is total over any decodable record: absent fields fall back to
//! empty text or to the [`ReportDefaults`] table.

pub mod classify;
pub mod defaults;
pub mod fragments;
pub mod model;
pub mod render;

pub use classify::{classify, icon_for, NameRule, NAME_RULES};
pub use defaults::ReportDefaults;
pub use fragments::FRAGMENT_NAMES;
pub use model::ReportData;
pub use render::{
    build_fragments, load_report_data, load_template, render, scalars, Renderer,
    BUILTIN_TEMPLATE, SCALAR_NAMES,
};
