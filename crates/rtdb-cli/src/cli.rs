//! CLI argument definitions.

use clap::{Args, Parser};

use crate::commands::Command;

/// Typed single-shot reads against a Firebase Realtime Database.
#[derive(Parser, Debug)]
#[command(name = "rtdb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Where and how to reach the database.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Database URL (https://..., http://localhost for the emulator, or file:// for a JSON export)
    #[arg(
        long,
        env = "RTDB_DATABASE_URL",
        default_value = "http://localhost:9000",
        global = true
    )]
    pub database_url: String,

    /// ID token or database secret sent as the `auth` parameter
    #[arg(long, env = "RTDB_AUTH", hide_env_values = true, global = true)]
    pub auth: Option<String>,

    /// Emulator namespace sent as the `ns` parameter
    #[arg(long, env = "RTDB_NAMESPACE", global = true)]
    pub namespace: Option<String>,
}
