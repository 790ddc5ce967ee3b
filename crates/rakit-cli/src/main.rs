use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "rakit")]
#[command(about = "RetroAchievements metadata inspector")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all known consoles
    Consoles {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the memory map for a console (by id or name)
    Regions {
        console: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode a runtime error code
    Error { code: i32 },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("rakit=info".parse()?))
        .init();

    let args = Args::parse();

    info!("rakit starting...");

    match args.command {
        Command::Consoles { json } => commands::consoles::run(json),
        Command::Regions { console, json } => commands::regions::run(&console, json),
        Command::Error { code } => commands::error::run(code),
    }
}
