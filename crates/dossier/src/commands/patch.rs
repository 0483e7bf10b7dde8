//! Patch command - append content to a knowledge file section

use crate::context::Context;
use anyhow::Result;
use colored::Colorize;
use dossier_core::knowledge::KnowledgeDocument;
use std::path::{Path, PathBuf};

pub fn run(
    config_path: &Path,
    section: &str,
    content: &str,
    file: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(config_path, verbose)?;
    let path = file.unwrap_or_else(|| ctx.resolve(Path::new(&ctx.config.knowledge.file)));

    if ctx.verbose {
        println!(
            "{} Patching section '{}' in {}",
            "→".cyan(),
            section,
            path.display()
        );
    }

    let mut document = KnowledgeDocument::open(&path)?;
    let point = document.patch_section(section, content)?;
    document.save()?;

    if ctx.verbose {
        println!(
            "{} Inserted at line {} (section heading at line {})",
            "→".cyan(),
            point.boundary + 1,
            point.heading + 1
        );
    }
    println!(
        "{} Updated section '{}' in {}",
        "✓".green().bold(),
        section,
        path.display()
    );

    Ok(())
}
