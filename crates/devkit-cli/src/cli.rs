use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use devkit_diff::DiffMode;

#[derive(Parser)]
#[command(
    name = "devkit",
    about = "Developer tools: text diffs and the tool server",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two files (or strings with --inline)
    Diff(DiffArgs),
    /// Start the HTTP tool server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    /// Old input: a file path, or `-` for stdin
    pub old: String,
    /// New input: a file path, or `-` for stdin
    pub new: String,
    /// Token granularity: chars, words, or lines
    #[arg(short, long, default_value = "lines", value_parser = parse_mode)]
    pub mode: DiffMode,
    /// Treat OLD and NEW as literal text instead of paths
    #[arg(long)]
    pub inline: bool,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on; overrides the config file
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_mode(raw: &str) -> Result<DiffMode, String> {
    raw.parse().map_err(|e: devkit_diff::DiffError| e.to_string())
}
