//! CLI command structure using clap

use clap::{Parser, Subcommand};
use dossier_core::config::consts::files;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dossier")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (used only if it exists)
    #[arg(long, global = true, value_name = "PATH", default_value = files::CONFIG_FILE)]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a session record into an HTML report
    Render {
        /// JSON session record
        #[arg(short, long)]
        data: PathBuf,

        /// HTML file to write
        #[arg(short, long)]
        output: PathBuf,

        /// Template to use instead of the configured or built-in one
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Fail if any placeholder is left unresolved
        #[arg(long)]
        strict: bool,
    },

    /// Append content to a section of the knowledge file
    Patch {
        /// Section title, with or without its number
        #[arg(short, long)]
        section: String,

        /// Text to insert
        #[arg(short, long, allow_hyphen_values = true)]
        content: String,

        /// Knowledge file (defaults to the configured one)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Create the knowledge file from the built-in skeleton
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}
