//! Feed retrieval.

use anyhow::{Context, Result};

/// Fetch the raw feed. Any transport failure or non-success status is
/// fatal; there is no retry.
pub async fn fetch_feed(url: &str) -> Result<String> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("Failed to fetch feed from {url}"))?
        .error_for_status()
        .context("Feed request returned an error status")?;

    response.text().await.context("Failed to read feed body")
}
