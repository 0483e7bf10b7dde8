//! Report rendering - fragments and scalars substituted into a template

use crate::config::consts::report::DATE_FORMAT;
use crate::error::{DossierError, Result};
use crate::report::defaults::ReportDefaults;
use crate::report::fragments;
use crate::report::model::ReportData;
use crate::template::{TemplateContext, TemplateEngine};
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

/// Report template compiled into the binary
pub const BUILTIN_TEMPLATE: &str = include_str!("../../assets/report_template.html");

/// Scalar placeholder names
pub mod scalar_names {
    pub const TOPIC: &str = "topic";
    pub const SUB_TOPIC: &str = "sub_topic";
    pub const DATE: &str = "date";
    pub const PROBLEM_QUOTE: &str = "problem_quote";
    pub const CORE_TAKEAWAY: &str = "core_takeaway";
    pub const USER_NAME: &str = "user_name";
    pub const CLOSING_MESSAGE: &str = "closing_message";
}

/// Every scalar placeholder
pub const SCALAR_NAMES: [&str; 7] = [
    scalar_names::TOPIC,
    scalar_names::SUB_TOPIC,
    scalar_names::DATE,
    scalar_names::PROBLEM_QUOTE,
    scalar_names::CORE_TAKEAWAY,
    scalar_names::USER_NAME,
    scalar_names::CLOSING_MESSAGE,
];

/// Scalar values for `record`, with fallbacks applied
///
/// `today` fills `{{ date }}` when the record has none.
pub fn scalars(
    record: &ReportData,
    defaults: &ReportDefaults,
    today: NaiveDate,
) -> BTreeMap<&'static str, String> {
    let or_default = |value: &Option<String>, fallback: &str| {
        value.clone().unwrap_or_else(|| fallback.to_string())
    };

    BTreeMap::from([
        (scalar_names::TOPIC, or_default(&record.topic, &defaults.topic)),
        (scalar_names::SUB_TOPIC, or_default(&record.sub_topic, "")),
        (
            scalar_names::DATE,
            record
                .date
                .clone()
                .unwrap_or_else(|| today.format(DATE_FORMAT).to_string()),
        ),
        (
            scalar_names::PROBLEM_QUOTE,
            record.problem_overview.quote.clone(),
        ),
        (
            scalar_names::CORE_TAKEAWAY,
            record.action_plan.core_takeaway.clone(),
        ),
        (
            scalar_names::USER_NAME,
            or_default(&record.user_name, &defaults.user_name),
        ),
        (
            scalar_names::CLOSING_MESSAGE,
            or_default(&record.closing_message, &defaults.closing_message),
        ),
    ])
}

/// Renders report records against a template
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    defaults: ReportDefaults,
    date: Option<NaiveDate>,
}

impl Renderer {
    pub fn new(defaults: ReportDefaults) -> Self {
        Self {
            defaults,
            date: None,
        }
    }

    /// Pin the fallback date instead of using today's local date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn build_fragments(&self, record: &ReportData) -> BTreeMap<&'static str, String> {
        fragments::build_fragments(record, &self.defaults)
    }

    /// Template context with every fragment and scalar bound
    pub fn context(&self, record: &ReportData) -> TemplateContext {
        let today = self.date.unwrap_or_else(|| Local::now().date_naive());
        self.build_fragments(record)
            .into_iter()
            .chain(scalars(record, &self.defaults, today))
            .collect()
    }

    /// Render `record` into `template`
    ///
    /// Fragment and scalar placeholders are replaced in one pass, so each
    /// occurrence is substituted exactly once. Unknown placeholders are kept.
    pub fn render(&self, record: &ReportData, template: &str) -> String {
        let context = self.context(record);
        tracing::debug!(
            bindings = context.len(),
            template_bytes = template.len(),
            "rendering report"
        );
        TemplateEngine::new().render(template, &context)
    }
}

/// Render with built-in defaults and today's date
pub fn render(record: &ReportData, template: &str) -> String {
    Renderer::default().render(record, template)
}

/// Build every fragment with built-in defaults
pub fn build_fragments(record: &ReportData) -> BTreeMap<&'static str, String> {
    Renderer::default().build_fragments(record)
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        tracing::debug!("failed to read {}: {}", path.display(), e);
        match e.kind() {
            ErrorKind::InvalidData => DossierError::MalformedInput {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
            _ => DossierError::MissingInput {
                path: path.to_path_buf(),
            },
        }
    })
}

/// Read and decode a JSON report record
pub fn load_report_data(path: impl AsRef<Path>) -> Result<ReportData> {
    let path = path.as_ref();
    let json = read_input(path)?;
    ReportData::from_json_str(&json).map_err(|e| DossierError::MalformedInput {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Read a template file
pub fn load_template(path: impl AsRef<Path>) -> Result<String> {
    read_input(path.as_ref())
}
