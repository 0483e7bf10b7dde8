//! Constants shared across the workspace

/// File names looked up by default
pub mod files {
    /// Optional configuration file in the working directory
    pub const CONFIG_FILE: &str = "dossier.toml";

    /// Project knowledge file created by `init` and patched by `patch`
    pub const KNOWLEDGE_FILE: &str = "cloudy.md";
}

/// Report rendering constants
pub mod report {
    /// chrono format for the default `{{ date }}`
    pub const DATE_FORMAT: &str = "%Y年%m月%d日";
}
