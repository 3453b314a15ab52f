use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stockroom_catalog::{backup_then_save, load_catalog};
use stockroom_ingest::synthesize_metrics;

use super::resolve_config;
use crate::CliError;
use crate::cli_types::PathArgs;

/// Assign synthetic engagement metrics to every record.
pub(crate) fn run_metrics(config: Option<&Path>, paths: PathArgs) -> Result<(), CliError> {
    let config = resolve_config(config, paths)?;

    let mut records = load_catalog(&config.catalog)?;
    let stats = synthesize_metrics(&mut records, &mut rand::thread_rng());
    let backup = backup_then_save(&config.catalog, &records)?;

    log::info!("{}", "Metric pass complete".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Records:            {:>6}", stats.records);
    if stats.popularity_dropped > 0 {
        log::info!("  Popularity dropped: {:>6}", stats.popularity_dropped);
    }
    log::info!(
        "  {} Wrote {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        config.catalog.display(),
    );
    if let Some(backup) = backup {
        log::info!("    Previous catalog backed up to {}", backup.display());
    }

    Ok(())
}
