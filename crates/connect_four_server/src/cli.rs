//! Command-line interface for connect_four_server.

use clap::Parser;

/// Connect Four - play in the browser, alone against the computer or with a friend
#[derive(Parser, Debug)]
#[command(name = "connect_four_server")]
#[command(about = "Connect four game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(short, long, default_value = "connect_four.toml")]
    pub config: std::path::PathBuf,

    /// Host to bind to (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides the config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Computer thinking time in milliseconds (overrides the config file)
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,
}
