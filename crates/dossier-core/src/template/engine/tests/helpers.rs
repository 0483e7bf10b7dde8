//! Shared test helpers for template engine tests

use crate::template::engine::TemplateContext;

/// Context with a couple of scalar bindings
pub(super) fn simple_context() -> TemplateContext {
    [("topic", "Quarterly Review"), ("user_name", "Alice")]
        .into_iter()
        .collect()
}

/// Context binding a multi-line markup fragment
pub(super) fn fragment_context() -> TemplateContext {
    [
        ("topic", "Quarterly Review"),
        ("goals_html", "<li>A</li>\n<li>B</li>"),
    ]
    .into_iter()
    .collect()
}
