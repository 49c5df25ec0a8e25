//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Expand every annotated item and report diagnostics
//! - `expand`: Print a file with its annotated items expanded
//! - `keys`: List the localization keys generated across the project
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by project-wide commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project directory to scan (defaults to the current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExpandCommand {
    /// Rust source file to expand
    pub file: PathBuf,

    /// Write the expanded source to this path instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Attribute names to expand (defaults to the configured ones)
    #[arg(long = "attribute")]
    pub attributes: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum KeysFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = KeysFormat::Text)]
    pub format: KeysFormat,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Expand every #[localizable] item and report diagnostics
    Check(CheckCommand),
    /// Print a source file with its #[localizable] items expanded
    Expand(ExpandCommand),
    /// List the localization keys generated across the project
    Keys(KeysCommand),
    /// Initialize a new .localizablerc.json configuration file
    Init,
}
