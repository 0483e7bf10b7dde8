//! Name classification: advisor name -> accent color and icon
//!
//! The rules are a declarative, ordered table. Each rule lists the name
//! variants (Chinese and English) of one advisor persona; the first rule with
//! a variant contained in the name wins.

/// One advisor persona in the classification table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRule {
    /// Substrings that identify the persona
    pub aliases: &'static [&'static str],
    /// Tailwind color family used for accents (`bg-{color}-600`, ...)
    pub color: &'static str,
    /// Glyph shown next to the persona's name
    pub icon: &'static str,
}

impl NameRule {
    /// True if any alias occurs in `name`
    pub fn matches(&self, name: &str) -> bool {
        self.aliases.iter().any(|alias| name.contains(alias))
    }
}

/// Built-in classification table, in priority order
pub const NAME_RULES: &[NameRule] = &[
    NameRule {
        aliases: &["巴菲特", "Buffett"],
        color: "green",
        icon: "🎩",
    },
    NameRule {
        aliases: &["盖茨", "Gates"],
        color: "blue",
        icon: "💻",
    },
    NameRule {
        aliases: &["马斯克", "Musk"],
        color: "red",
        icon: "🚀",
    },
    NameRule {
        aliases: &["乔布斯", "Jobs"],
        color: "purple",
        icon: "🍎",
    },
];

/// Color for names no rule recognizes
pub const DEFAULT_COLOR: &str = "gray";

/// Icon for names no rule recognizes
pub const DEFAULT_ICON: &str = "👤";

/// First rule in `rules` that matches `name`
pub fn match_rule<'r>(rules: &'r [NameRule], name: &str) -> Option<&'r NameRule> {
    rules.iter().find(|rule| rule.matches(name))
}

/// Accent color for `name` against the built-in table
pub fn classify(name: &str) -> &'static str {
    match_rule(NAME_RULES, name).map_or(DEFAULT_COLOR, |rule| rule.color)
}

/// Icon for `name` against the built-in table
pub fn icon_for(name: &str) -> &'static str {
    match_rule(NAME_RULES, name).map_or(DEFAULT_ICON, |rule| rule.icon)
}
