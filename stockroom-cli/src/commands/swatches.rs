use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stockroom_catalog::{backup_then_save, load_catalog};
use stockroom_ingest::apply_color_swatches;

use super::resolve_config;
use crate::CliError;
use crate::cli_types::PathArgs;

/// Map each record's color names to real hex swatches.
pub(crate) fn run_swatches(config: Option<&Path>, paths: PathArgs) -> Result<(), CliError> {
    let config = resolve_config(config, paths)?;

    let mut records = load_catalog(&config.catalog)?;
    let stats = apply_color_swatches(&mut records);
    let backup = backup_then_save(&config.catalog, &records)?;

    log::info!("{}", "Swatch pass complete".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Records updated: {:>6}", stats.updated);
    if stats.fallbacks > 0 {
        log::warn!(
            "{} {} color names had no swatch entry; wrote the fallback",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            stats.fallbacks,
        );
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
