//! Fallback text for absent record fields

use serde::{Deserialize, Serialize};

/// Immutable table of fallback labels, passed to the renderer
///
/// Deserializable from `[report.defaults]` in dossier.toml; keys left out keep
/// their built-in value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportDefaults {
    /// `{{ topic }}`
    pub topic: String,
    /// `{{ user_name }}`
    pub user_name: String,
    /// `{{ closing_message }}`
    pub closing_message: String,
    /// Card title of an insight without one
    pub insight_title: String,
    /// Display name of an advisor page without one
    pub advisor_name: String,
    /// Subtitle of an advisor page without one
    pub advisor_title: String,
    /// Deadline label of an action item without one
    pub deadline: String,
}

impl Default for ReportDefaults {
    fn default() -> Self {
        Self {
            topic: "私董会报告".to_string(),
            user_name: "案主".to_string(),
            closing_message: "感谢您的参与".to_string(),
            insight_title: "洞察".to_string(),
            advisor_name: "幕僚".to_string(),
            advisor_title: "私董会幕僚".to_string(),
            deadline: "立即执行".to_string(),
        }
    }
}
