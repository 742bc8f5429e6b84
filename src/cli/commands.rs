//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "resinfo",
    version,
    about = "Inspect Kubernetes-style API resource descriptors",
    long_about = None,
)]
pub struct Cli {
    /// Resource declarations file (TOML)
    #[arg(long, global = true, env = "RESINFO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
    Name,
}

#[derive(Subcommand)]
pub enum Command {
    /// List registered resource types
    #[command(alias = "ls")]
    List,

    /// Print every accepted resource name and alias, one per line
    Names,

    /// Show every identity view of one resource type
    #[command(alias = "describe")]
    Show(ShowArgs),

    /// Print the storage path of a resource or subresource
    Path(PathArgs),

    /// Print the not-found status for an instance
    NotFound(NotFoundArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Resource type (plural, singular, kind, alias or resource.group)
    pub resource_type: String,
}

#[derive(Args)]
pub struct PathArgs {
    /// Resource type
    pub resource_type: String,

    /// Subresource (e.g. status, scale)
    pub subresource: Option<String>,
}

#[derive(Args)]
pub struct NotFoundArgs {
    /// Resource type
    pub resource_type: String,

    /// Instance name
    pub name: String,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
