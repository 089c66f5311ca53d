use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::api::{PasteSink, StatsSource};

use super::output::format_content;

pub struct ReportConfig {
    pub paste_id: String,
    /// Print the report instead of publishing it.
    pub dry_run: bool,
}

/// Fetches the stats, renders them and writes the result into the paste. Any failure stops the
/// run, nothing is retried.
#[instrument(skip_all, fields(paste_id = %config.paste_id))]
pub async fn publish_report(
    source: &impl StatsSource,
    sink: &impl PasteSink,
    config: &ReportConfig,
) -> Result<String> {
    let stats = source
        .fetch_recent_stats()
        .await
        .context("Failed to fetch coding stats")?;
    info!("Fetched stats for {} languages", stats.languages.len());

    let content = format_content(&stats);

    if config.dry_run {
        info!("Dry run, skipping paste update");
        return Ok(content);
    }

    let filename = sink
        .publish(&config.paste_id, &content)
        .await
        .with_context(|| format!("Failed to update paste {}", config.paste_id))?;
    info!("Published report into {filename}");
    Ok(content)
}
