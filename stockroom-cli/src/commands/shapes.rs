use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stockroom_catalog::{backup_then_save, load_catalog};
use stockroom_ingest::{merge_shapes, read_sheet, shape_map};

use super::resolve_config;
use crate::CliError;
use crate::cli_types::PathArgs;

/// Merge frame shapes from the spreadsheet into the catalog.
pub(crate) fn run_shapes(config: Option<&Path>, paths: PathArgs) -> Result<(), CliError> {
    let config = resolve_config(config, paths)?;

    let rows = read_sheet(&config.sheet)?;
    let shapes = shape_map(&rows);
    if shapes.is_empty() {
        log::warn!("No usable shape rows in {}; catalog untouched", config.sheet.display());
        return Ok(());
    }

    let mut records = load_catalog(&config.catalog)?;
    let stats = merge_shapes(&mut records, &shapes);
    let backup = backup_then_save(&config.catalog, &records)?;

    log::info!("{}", "Shape merge complete".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Shape mappings: {:>6}", shapes.len());
    log::info!("  Records:        {:>6}", stats.records);
    log::info!("  Updated:        {:>6}", stats.updated);
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
