//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio portfolio site data pipeline CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Posts directory path (relative to project root)
    #[arg(short, long)]
    pub posts: Option<PathBuf>,

    /// Public assets directory path (relative to project root)
    #[arg(short, long)]
    pub assets: Option<PathBuf>,

    /// Config file name (default: site.toml)
    #[arg(short = 'C', long, default_value = "site.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load all content and write the JSON data files
    Build {
        /// Clean output directory completely before building
        #[arg(long)]
        clean: bool,
    },

    /// Load all content and report problems without writing output
    Check,
}
