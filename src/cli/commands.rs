use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todo", about = concat!("[x] todo v", env!("CARGO_PKG_VERSION"), " - one list, no fuss"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: $XDG_CONFIG_HOME/todo/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Start with this task in the list (repeatable)
    #[arg(short = 't', long = "task", global = true)]
    pub tasks: Vec<String>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Append logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a script of list operations and print the resulting list
    Run(RunArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Script file; reads stdin when omitted or `-`
    pub script: Option<PathBuf>,
}
