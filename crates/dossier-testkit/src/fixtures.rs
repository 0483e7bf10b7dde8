//! Sample inputs shared by core and CLI tests

use serde_json::json;
use std::path::{Path, PathBuf};

/// A complete session record: every section populated
pub fn sample_report_json() -> String {
    let record = json!({
        "topic": "海外扩张的节奏",
        "sub_topic": "2026 年第四季度私董会",
        "date": "2026年10月16日",
        "user_name": "林女士",
        "closing_message": "愿每一次决策都更从容",
        "advisors": [
            { "name": "巴菲特" },
            { "name": "Elon Musk" },
            { "name": "张老师" }
        ],
        "problem_overview": {
            "background": "公司在国内市场增长放缓。\n团队希望在明年进入东南亚。",
            "goals": ["验证市场需求", "控制现金消耗"],
            "quote": "我们是不是太着急了？"
        },
        "key_insights": [
            { "title": "节奏", "content": "先做小范围试点。" },
            { "content": "现金流是第一约束。" }
        ],
        "advisor_suggestions": [
            {
                "name": "巴菲特",
                "title": "价值投资者",
                "quote": "只在能力圈内行动。",
                "definition": "扩张是资本配置问题。",
                "experience": "伯克希尔很少进入陌生行业。\n耐心是优势。",
                "suggestions": ["算清单位经济模型", "保留安全边际"]
            },
            {
                "name": "Elon Musk",
                "quote": "从第一性原理出发。",
                "definition": "扩张是工程问题。",
                "experience": "先造出最小可用版本。",
                "suggestions": ["两周内上线试点"]
            }
        ],
        "reflections": [
            { "name": "林女士", "content": "我低估了现金风险。\n试点更稳妥。" }
        ],
        "action_plan": {
            "action_items": [
                { "item": "完成单位经济模型", "deadline": "11月1日" },
                { "item": "联系本地合作伙伴" }
            ],
            "timeline": [
                { "milestone": "试点上线", "date": "2026-12" },
                { "milestone": "复盘", "date": "2027-03" }
            ],
            "core_takeaway": "慢就是快"
        },
        "golden_sentences": [
            { "advisor": "巴菲特", "sentence": "别人贪婪时我恐惧。" },
            { "advisor": "Elon Musk", "sentence": "失败是一个选项。" }
        ]
    });

    serde_json::to_string_pretty(&record).expect("sample record serializes")
}

/// A knowledge file with two numbered sections
pub fn sample_knowledge_doc() -> &'static str {
    "# 项目知识库\n\
     \n\
     ## 1. 项目规范\n\
     - 提交前运行测试\n\
     \n\
     ## 2. 下一节\n\
     内容\n"
}

/// Write `contents` to `dir/name` and return the full path
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents)
        .unwrap_or_else(|e| panic!("Failed to write fixture {}: {}", path.display(), e));
    path
}
