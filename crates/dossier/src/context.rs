//! Global context for CLI commands

use anyhow::Result;
use dossier_core::config::Config;
use std::path::{Path, PathBuf};

/// Loaded configuration plus global flags
pub struct Context {
    pub config: Config,
    /// Directory relative config paths resolve against
    pub base_dir: PathBuf,
    pub verbose: bool,
}

impl Context {
    /// Load `config_path` if present, defaults otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed
    pub fn new(config_path: &Path, verbose: bool) -> Result<Self> {
        let config = Config::load_or_default(config_path)?;
        let base_dir = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            config,
            base_dir,
            verbose,
        })
    }

    /// Resolve a path taken from the config file
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_testkit::{temp_dir_in_workspace, write_fixture};

    #[test]
    fn test_missing_config_uses_defaults() {
        let temp = temp_dir_in_workspace();
        let ctx = Context::new(&temp.path().join("dossier.toml"), false).unwrap();
        assert_eq!(ctx.config, Config::default());
        assert_eq!(ctx.base_dir, temp.path().to_path_buf());
    }

    #[test]
    fn test_relative_paths_resolve_against_config_dir() {
        let temp = temp_dir_in_workspace();
        let path = write_fixture(
            temp.path(),
            "dossier.toml",
            "[report]\ntemplate = \"tpl/report.html\"\n",
        );
        let ctx = Context::new(&path, true).unwrap();
        let template = ctx.config.report.template.clone().unwrap();
        assert_eq!(ctx.resolve(&template), temp.path().join("tpl/report.html"));
        assert!(ctx.verbose);
    }

    #[test]
    fn test_bare_file_name_resolves_to_cwd() {
        let ctx = Context::new(Path::new("no-such-dossier.toml"), false).unwrap();
        assert_eq!(ctx.resolve(Path::new("a.html")), PathBuf::from("./a.html"));
    }

    #[test]
    fn test_invalid_config_is_error() {
        let temp = temp_dir_in_workspace();
        let path = write_fixture(temp.path(), "dossier.toml", "[report\n");
        assert!(Context::new(&path, false).is_err());
    }
}
