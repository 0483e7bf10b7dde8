use crate::config::consts::files;
use crate::error::{DossierError, Result};
use crate::report::ReportDefaults;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// dossier.toml schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Template used instead of the built-in one
    #[serde(default)]
    pub template: Option<PathBuf>,
    /// Fallback text for absent record fields
    #[serde(default)]
    pub defaults: ReportDefaults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    #[serde(default = "default_knowledge_file")]
    pub file: String,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            file: default_knowledge_file(),
        }
    }
}

fn default_knowledge_file() -> String {
    files::KNOWLEDGE_FILE.to_string()
}

impl Config {
    /// Read dossier.toml
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| DossierError::ConfigParseError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| DossierError::ConfigInvalid(e.to_string()))
    }

    /// Read dossier.toml if it exists, defaults otherwise
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::debug!("loading config from {}", path.display());
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}
