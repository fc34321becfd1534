//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use crate::domain::ApiVersion;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// ConductR bundle client
///
/// List, inspect and load bundles on a ConductR cluster.
#[derive(Parser, Debug)]
#[command(name = "conduct")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print more information, including raw server responses
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Print only essential information
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print full bundle ids instead of abbreviated ones
    #[arg(long, global = true)]
    pub long_ids: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CONDUCTR_CONFIG")]
    pub config: Option<String>,

    /// ConductR control server address
    #[arg(long, global = true, env = "CONDUCTR_IP")]
    pub ip: Option<String>,

    /// ConductR control server port
    #[arg(long, global = true, env = "CONDUCTR_PORT")]
    pub port: Option<u16>,

    /// ConductR control protocol version (1 or 2)
    #[arg(long, global = true, env = "CONDUCTR_API_VERSION")]
    pub api_version: Option<ApiVersion>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show bundles loaded on the cluster
    Info(InfoArgs),

    /// Load a bundle, optionally with a configuration overlay
    Load(LoadArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the info command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Bundle id or name, full or abbreviated; all bundles when omitted
    pub bundle: Option<String>,
}

/// Arguments for the load command
#[derive(Parser, Debug)]
pub struct LoadArgs {
    /// Bundle file path or URL
    pub bundle: String,

    /// Configuration bundle file path or URL
    pub configuration: Option<String>,

    /// Directory downloaded bundles are cached in
    #[arg(long, env = "CONDUCTR_RESOLVE_CACHE_DIR")]
    pub resolve_cache_dir: Option<PathBuf>,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
