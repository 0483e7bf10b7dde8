//! Init command - bootstrap the knowledge file

use crate::context::Context;
use anyhow::Result;
use colored::Colorize;
use dossier_core::knowledge::{InitOutcome, init_knowledge_file};
use std::path::{Path, PathBuf};

/// Create the knowledge file in `dir`; an existing file is left alone
pub fn run(config_path: &Path, dir: PathBuf, verbose: bool) -> Result<()> {
    let ctx = Context::new(config_path, verbose)?;

    if ctx.verbose {
        println!(
            "{} Initializing {} in {}",
            "→".cyan(),
            ctx.config.knowledge.file,
            dir.display()
        );
    }

    match init_knowledge_file(&dir, &ctx.config.knowledge.file)? {
        InitOutcome::Created(path) => {
            println!("{} Created {}", "✓".green().bold(), path.display());
        }
        InitOutcome::AlreadyExists(path) => {
            tracing::warn!(path = %path.display(), "knowledge file already exists");
            println!(
                "{} {} already exists, left unchanged",
                "!".yellow(),
                path.display()
            );
        }
    }

    Ok(())
}
