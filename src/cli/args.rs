//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Compile locale files and write the typed dictionary module
//! - `check`: Verify the written module matches the locale files
//! - `init`: Initialize a dictgen configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::{Mode, OutputSchema};

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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by `generate` and `check`.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source locale (overrides config file)
    #[arg(long, env = "DICTGEN_SOURCE_LOCALE")]
    pub source_locale: Option<String>,

    /// Directory of <locale>.json files (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Generated file path (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output mode (overrides config file)
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Table schema for merged output (overrides config file)
    #[arg(long, value_enum)]
    pub schema: Option<OutputSchema>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the generated module to stdout instead of writing the file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile locale files into a typed dictionary module
    Generate(GenerateCommand),
    /// Fail if the generated module is missing or out of date
    Check(CheckCommand),
    /// Initialize a new .dictgenrc.json configuration file
    Init,
}
