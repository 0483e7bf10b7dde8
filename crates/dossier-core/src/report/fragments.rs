//! HTML fragment builders
//!
//! Each list-shaped part of the record becomes one markup fragment, keyed by
//! the placeholder name it fills in the report template. Record text is
//! inserted as-is; it is trusted markup.

use crate::report::classify::{classify, icon_for};
use crate::report::defaults::ReportDefaults;
use crate::report::model::{
    ActionItem, Advisor, AdvisorSuggestion, GoldenSentence, Insight, Milestone, Reflection,
    ReportData,
};
use std::collections::BTreeMap;

/// Fragment placeholder names
pub mod names {
    pub const ADVISORS: &str = "advisors_html";
    pub const PROBLEM_BACKGROUND: &str = "problem_background_html";
    pub const GOALS: &str = "goals_html";
    pub const INSIGHTS: &str = "insights_html";
    pub const ADVISOR_PAGES: &str = "advisor_pages_html";
    pub const REFLECTIONS: &str = "reflections_html";
    pub const ACTION_ITEMS: &str = "action_items_html";
    pub const TIMELINE: &str = "timeline_html";
    pub const GOLDEN_SENTENCES: &str = "golden_sentences_html";
}

/// Every fragment placeholder, in build order
pub const FRAGMENT_NAMES: [&str; 9] = [
    names::ADVISORS,
    names::PROBLEM_BACKGROUND,
    names::GOALS,
    names::INSIGHTS,
    names::ADVISOR_PAGES,
    names::REFLECTIONS,
    names::ACTION_ITEMS,
    names::TIMELINE,
    names::GOLDEN_SENTENCES,
];

/// Insight card icons, assigned by position modulo length
pub const INSIGHT_ICONS: [&str; 4] = ["💡", "🔍", "⚡", "🌟"];

/// Bullet glyph in front of each goal
pub const GOAL_BULLET: &str = "◆";

/// Suffix appended to a name in reflection card headings
pub const REFLECTION_SUFFIX: &str = "的反思";

/// Build every fragment for `record`
pub fn build_fragments(
    record: &ReportData,
    defaults: &ReportDefaults,
) -> BTreeMap<&'static str, String> {
    let overview = &record.problem_overview;
    let plan = &record.action_plan;

    BTreeMap::from([
        (names::ADVISORS, advisors_html(&record.advisors)),
        (
            names::PROBLEM_BACKGROUND,
            problem_background_html(&overview.background),
        ),
        (names::GOALS, goals_html(&overview.goals)),
        (names::INSIGHTS, insights_html(&record.key_insights, defaults)),
        (
            names::ADVISOR_PAGES,
            advisor_pages_html(&record.advisor_suggestions, defaults),
        ),
        (names::REFLECTIONS, reflections_html(&record.reflections)),
        (
            names::ACTION_ITEMS,
            action_items_html(&plan.action_items, defaults),
        ),
        (names::TIMELINE, timeline_html(&plan.timeline)),
        (
            names::GOLDEN_SENTENCES,
            golden_sentences_html(&record.golden_sentences),
        ),
    ])
}

/// Cover-page advisor markers
pub fn advisors_html(advisors: &[Advisor]) -> String {
    let mut html = String::new();
    for advisor in advisors {
        let name = &advisor.name;
        let color = classify(name);
        html.push_str(&format!(
            r#"
            <div class="flex items-center gap-2">
                <div class="w-2 h-2 rounded-full bg-{color}-600"></div>
                <span class="text-sm text-gray-600">{name}</span>
            </div>
"#
        ));
    }
    html
}

/// One paragraph per non-blank line of the background text
pub fn problem_background_html(background: &str) -> String {
    background
        .split('\n')
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| format!(r#"<p class="mb-6">{paragraph}</p>"#))
        .collect()
}

pub fn goals_html(goals: &[String]) -> String {
    let mut html = String::new();
    for goal in goals {
        html.push_str(&format!(
            r#"
            <li class="flex items-start gap-3">
                <span class="text-green-600 mt-1">{GOAL_BULLET}</span>
                <span>{goal}</span>
            </li>
"#
        ));
    }
    html
}

pub fn insights_html(insights: &[Insight], defaults: &ReportDefaults) -> String {
    let mut html = String::new();
    for (index, insight) in insights.iter().enumerate() {
        let icon = INSIGHT_ICONS[index % INSIGHT_ICONS.len()];
        let title = insight.title.as_deref().unwrap_or(&defaults.insight_title);
        let content = &insight.content;
        html.push_str(&format!(
            r#"
        <div class="p-6 bg-white rounded-lg shadow-sm border border-gray-100">
            <div class="flex items-center gap-3 mb-4">
                <span class="text-2xl">{icon}</span>
                <h3 class="text-lg font-semibold text-gray-800">{title}</h3>
            </div>
            <p class="text-gray-600 breathing-space">{content}</p>
        </div>
"#
        ));
    }
    html
}

/// Numbered suggestion rows with badges in the advisor's color
fn suggestions_html(suggestions: &[String], color: &str) -> String {
    let mut html = String::new();
    for (index, suggestion) in suggestions.iter().enumerate() {
        let number = index + 1;
        html.push_str(&format!(
            r#"
            <div class="flex items-start gap-3">
                <span class="bg-{color}-600 text-white text-xs px-2 py-1 rounded font-medium">{number}</span>
                <p class="text-gray-600">{suggestion}</p>
            </div>
"#
        ));
    }
    html
}

/// Full-page article per advisor
pub fn advisor_pages_html(pages: &[AdvisorSuggestion], defaults: &ReportDefaults) -> String {
    let mut html = String::new();
    for page in pages {
        let name = page.name.as_deref().unwrap_or(&defaults.advisor_name);
        let title = page.title.as_deref().unwrap_or(&defaults.advisor_title);
        let color = classify(name);
        let icon = icon_for(name);
        let quote = &page.quote;
        let definition = &page.definition;
        let experience = &page.experience;
        let suggestions = suggestions_html(&page.suggestions, color);

        html.push_str(&format!(
            r#"
        <!-- 幕僚建议页 - {name} -->
        <article class="magazine-page shadow-2xl mx-auto mb-12 p-16">
            <header class="mb-8 pb-6 border-b-2 border-{color}-600">
                <div class="flex items-center gap-4">
                    <div class="w-12 h-12 rounded-full bg-{color}-100 flex items-center justify-center">
                        <span class="text-2xl">{icon}</span>
                    </div>
                    <div>
                        <h2 class="text-2xl font-bold text-gray-800">{name}</h2>
                        <p class="text-sm text-gray-500">{title}</p>
                    </div>
                </div>
            </header>

            <!-- 名言金句 -->
            <blockquote class="border-l-4 border-{color}-600 pl-6 my-8 bg-{color}-50 py-4 rounded-r-lg">
                <p class="text-xl font-medium italic text-gray-700">
                    「{quote}」
                </p>
            </blockquote>

            <!-- 问题定性 -->
            <div class="my-8">
                <h3 class="text-lg font-semibold text-gray-700 mb-3 flex items-center gap-2">
                    <span class="text-{color}-600">◎</span> 问题定性
                </h3>
                <p class="text-gray-600 breathing-space pl-6">
                    {definition}
                </p>
            </div>

            <!-- 经历分享 -->
            <div class="my-8 p-6 bg-gray-50 rounded-lg">
                <h3 class="text-lg font-semibold text-gray-700 mb-3">📖 经历分享</h3>
                <p class="text-gray-600 breathing-space">
                    {experience}
                </p>
            </div>

            <!-- 具体建议 -->
            <div class="my-8">
                <h3 class="text-lg font-semibold text-gray-700 mb-4 flex items-center gap-2">
                    <span class="text-{color}-600">◎</span> 具体建议
                </h3>
                <div class="space-y-3 pl-6">
                    {suggestions}
                </div>
            </div>
        </article>
"#
        ));
    }
    html
}

/// Replace raw line breaks with `<br>`; HTML collapses plain newlines
fn with_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "<br>")
}

pub fn reflections_html(reflections: &[Reflection]) -> String {
    let mut html = String::new();
    for reflection in reflections {
        let name = &reflection.name;
        let color = classify(name);
        let content = with_line_breaks(&reflection.content);
        html.push_str(&format!(
            r#"
        <div class="p-6 bg-white rounded-lg shadow-sm border-l-4 border-{color}-600">
            <h3 class="text-lg font-bold text-gray-800 mb-2">{name}{REFLECTION_SUFFIX}</h3>
            <div class="text-gray-600 breathing-space space-y-2">
               {content}
            </div>
        </div>
"#
        ));
    }
    html
}

/// Checkbox row shared by action items and timeline entries
fn checklist_row(label: &str, deadline: &str) -> String {
    format!(
        r#"
        <div class="flex items-center gap-4 p-4 bg-white rounded-lg border border-gray-200">
            <div class="w-6 h-6 rounded border-2 border-gray-300"></div>
            <div class="flex-1">
                <p class="text-gray-700 font-medium">{label}</p>
                <p class="text-sm text-gray-500">截止日期：{deadline}</p>
            </div>
        </div>
"#
    )
}

pub fn action_items_html(items: &[ActionItem], defaults: &ReportDefaults) -> String {
    items
        .iter()
        .map(|item| {
            let deadline = item.deadline.as_deref().unwrap_or(&defaults.deadline);
            checklist_row(&item.item, deadline)
        })
        .collect()
}

pub fn timeline_html(timeline: &[Milestone]) -> String {
    timeline
        .iter()
        .map(|entry| checklist_row(&entry.milestone, &entry.date))
        .collect()
}

pub fn golden_sentences_html(sentences: &[GoldenSentence]) -> String {
    let mut html = String::new();
    for entry in sentences {
        let name = &entry.advisor;
        let color = classify(name);
        let sentence = &entry.sentence;
        html.push_str(&format!(
            r#"
        <div class="text-center">
            <p class="text-2xl font-serif italic text-gray-700 mb-4">"{sentence}"</p>
            <div class="inline-block px-3 py-1 bg-{color}-100 text-{color}-700 text-sm rounded-full">
                {name}
            </div>
        </div>
"#
        ));
    }
    html
}
