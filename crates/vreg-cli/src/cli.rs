//! CLI definition using clap

use clap::{Parser, Subcommand};
use vreg_types::OutputFormat;

#[derive(Parser)]
#[command(name = "vehicle-registry")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "In-memory vehicle registry with an interactive console menu")]
#[command(long_about = None)]
pub struct Cli {
    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive registry menu
    Menu,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the separator line printed after each listed vehicle
        #[arg(long)]
        set_separator: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
