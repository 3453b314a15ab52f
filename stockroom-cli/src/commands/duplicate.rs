use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stockroom_catalog::{backup_then_save, load_catalog};
use stockroom_ingest::duplicate_gender;

use super::resolve_config;
use crate::CliError;
use crate::cli_types::PathArgs;

/// Clone every record of the target gender and append the clones.
pub(crate) fn run_duplicate(
    config: Option<&Path>,
    paths: PathArgs,
    gender: &str,
) -> Result<(), CliError> {
    let config = resolve_config(config, paths)?;

    let mut records = load_catalog(&config.catalog)?;
    let stats = duplicate_gender(&mut records, gender, &mut rand::thread_rng());

    if stats.matched == 0 {
        log::warn!("No records with gender '{gender}'; catalog untouched");
        return Ok(());
    }
    let backup = backup_then_save(&config.catalog, &records)?;

    log::info!("{}", "Duplication complete".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  {gender} records found: {:>6}", stats.matched);
    log::info!("  Clones appended:     {:>6}", stats.cloned);
    log::info!("  Catalog size:        {:>6}", records.len());
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
