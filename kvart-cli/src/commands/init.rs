use std::path::PathBuf;

use anyhow::Result;
use kvart_core::config::Config;
use owo_colors::OwoColorize;

pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let path = match config_path {
        Some(p) => p,
        None => Config::config_path()?,
    };

    if path.exists() {
        anyhow::bail!(
            "Config file already exists at {}\n\
            Edit it directly, or pass --config to write elsewhere.",
            path.display()
        );
    }

    Config::create_default_config(&path)?;
    println!("{} Wrote default config to {}", "✓".green(), path.display());

    Ok(())
}
