//! dossier.toml configuration

pub mod consts;
pub mod model;

pub use model::{Config, KnowledgeConfig, ReportConfig};
