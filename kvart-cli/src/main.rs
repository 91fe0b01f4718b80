mod commands;
mod fetch;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kvart")]
#[command(about = "Rewrite a TimeEdit calendar feed into a readable one")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the feed, rewrite its events and write the output file
    Run {
        /// Config file to use instead of ~/.config/kvart/config.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Feed URL override
        #[arg(long)]
        url: Option<String>,

        /// Output file override
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Academic-quarter mode: "guarded-quarter" or "start-only"
        #[arg(long)]
        shift_mode: Option<String>,

        /// Keep only sessions for this group (e.g. "2")
        #[arg(long)]
        group: Option<String>,
    },
    /// Write a config file with the default rule tables, ready to edit
    Init {
        /// Where to write it instead of ~/.config/kvart/config.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            url,
            output,
            shift_mode,
            group,
        } => commands::run::run(config, url, output, shift_mode, group).await,
        Commands::Init { config } => commands::init::run(config),
    }
}
