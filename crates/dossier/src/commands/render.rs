//! Render command - session record to HTML report

use crate::context::Context;
use anyhow::{Context as _, Result};
use colored::Colorize;
use dossier_core::DossierError;
use dossier_core::report::{BUILTIN_TEMPLATE, Renderer, load_report_data, load_template};
use dossier_core::template::{ensure_resolved, scan_placeholders};
use std::fs;
use std::path::{Path, PathBuf};

/// Render `data` into `output`
///
/// Template precedence: `--template`, then `report.template` from the config,
/// then the built-in template. Under `strict`, nothing is written if a
/// placeholder survives rendering.
pub fn run(
    config_path: &Path,
    data: PathBuf,
    output: PathBuf,
    template: Option<PathBuf>,
    strict: bool,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(config_path, verbose)?;

    let record = load_report_data(&data)?;

    let template_path = template.or_else(|| {
        ctx.config
            .report
            .template
            .as_deref()
            .map(|path| ctx.resolve(path))
    });
    let template_text = match &template_path {
        Some(path) => {
            if ctx.verbose {
                println!("{} Using template {}", "→".cyan(), path.display());
            }
            load_template(path)?
        }
        None => BUILTIN_TEMPLATE.to_string(),
    };

    let html = Renderer::new(ctx.config.report.defaults.clone()).render(&record, &template_text);

    let unresolved = scan_placeholders(&html);
    for placeholder in &unresolved {
        tracing::warn!(
            key = %placeholder.key,
            line = placeholder.line,
            "unresolved placeholder"
        );
    }
    if strict {
        ensure_resolved(&html).map_err(DossierError::from)?;
    }

    fs::write(&output, html)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;

    println!(
        "{} Rendered report to {}",
        "✓".green().bold(),
        output.display()
    );
    if !unresolved.is_empty() {
        println!(
            "{} {} placeholder(s) left unresolved",
            "!".yellow(),
            unresolved.len()
        );
    }

    Ok(())
}
