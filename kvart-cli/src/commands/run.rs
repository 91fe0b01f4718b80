use std::path::PathBuf;

use anyhow::{Context, Result};
use kvart_core::config::Config;
use kvart_core::rules::ShiftMode;
use kvart_core::{ics, rules};
use owo_colors::OwoColorize;

use crate::fetch;

pub async fn run(
    config_path: Option<PathBuf>,
    url: Option<String>,
    output: Option<PathBuf>,
    shift_mode: Option<String>,
    group: Option<String>,
) -> Result<()> {
    let mut config = Config::load(config_path.as_deref())?;

    // Flag overrides on top of the config file
    if let Some(url) = url {
        config.feed_url = url;
    }
    if let Some(output) = output {
        config.output_file = output;
    }
    if let Some(mode) = shift_mode {
        config.rules.shift_mode = mode
            .parse::<ShiftMode>()
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    if let Some(group) = group {
        config.rules.only_group = Some(group);
    }

    let raw = fetch::fetch_feed(&config.feed_url).await?;
    let feed = ics::parse_feed(&raw)?;
    let total = feed.events.len();

    let events = rules::transform_feed(&feed.events, &config.rules);
    let dropped = total - events.len();

    let output_ics = ics::generate_feed(&feed.properties, &events);
    std::fs::write(&config.output_file, output_ics)
        .with_context(|| format!("Failed to write {}", config.output_file.display()))?;

    println!(
        "{} Wrote {} events to {} ({} dropped)",
        "✓".green(),
        events.len(),
        config.output_file.display(),
        dropped
    );

    Ok(())
}
