//! Report data record
//!
//! Every field is optional in the JSON input. Missing lists are empty, missing
//! text is empty, and the handful of fields with a designated fallback are
//! `Option<String>` so the renderer can tell "absent" from "empty".

use serde::{Deserialize, Serialize};

/// Top-level report record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportData {
    pub topic: Option<String>,
    pub sub_topic: Option<String>,
    pub date: Option<String>,
    pub user_name: Option<String>,
    pub closing_message: Option<String>,
    pub advisors: Vec<Advisor>,
    pub problem_overview: ProblemOverview,
    pub key_insights: Vec<Insight>,
    pub advisor_suggestions: Vec<AdvisorSuggestion>,
    pub reflections: Vec<Reflection>,
    pub action_plan: ActionPlan,
    pub golden_sentences: Vec<GoldenSentence>,
}

impl ReportData {
    /// Decode a record from JSON text
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Advisor {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemOverview {
    /// Paragraphs separated by `\n`
    pub background: String,
    pub goals: Vec<String>,
    pub quote: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insight {
    pub title: Option<String>,
    pub content: String,
}

/// One advisor's page: framing, experience and numbered suggestions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorSuggestion {
    pub name: Option<String>,
    pub title: Option<String>,
    pub quote: String,
    pub definition: String,
    pub experience: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reflection {
    pub name: String,
    /// Free text with embedded line breaks
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionPlan {
    pub action_items: Vec<ActionItem>,
    pub timeline: Vec<Milestone>,
    pub core_takeaway: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionItem {
    pub item: String,
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Milestone {
    pub milestone: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoldenSentence {
    pub advisor: String,
    pub sentence: String,
}
