use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stockroom_catalog::backup_then_save;
use stockroom_ingest::{IngestProgress, build_catalog};

use super::resolve_config;
use crate::CliError;
use crate::cli_types::PathArgs;

struct SpinnerProgress {
    bar: ProgressBar,
}

impl IngestProgress for SpinnerProgress {
    fn on_row(&self, current: usize, total: usize, sku: &str) {
        self.bar.set_message(format!("[{current}/{total}] {sku}"));
        self.bar.tick();
    }

    fn on_complete(&self, _message: &str) {
        self.bar.finish_and_clear();
    }
}

/// Run the primary build pass and persist the result.
pub(crate) fn run_build(
    config: Option<&Path>,
    paths: PathArgs,
    quiet: bool,
) -> Result<(), CliError> {
    let config = resolve_config(config, paths)?;

    log::info!(
        "{}",
        format!("Building catalog from {}", config.sheet.display())
            .if_supports_color(Stdout, |t| t.bold()),
    );

    let bar = if quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .expect("static pattern")
                .tick_chars("/-\\|"),
        );
        bar
    };
    let progress = SpinnerProgress { bar };

    let outcome = build_catalog(
        &config.sheet,
        &config.images_src,
        &config.public_root,
        Some(&progress),
    )?;
    let backup = backup_then_save(&config.catalog, &outcome.records)?;

    let stats = &outcome.stats;
    log::info!("{}", "Build complete".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Rows read:           {:>6}", stats.rows_read);
    log::info!("  Records built:       {:>6}", stats.records_built);
    log::info!("  Images copied:       {:>6}", stats.images_copied);
    log::info!("  Skipped (no SKU):    {:>6}", stats.skipped_no_sku);
    log::info!("  Skipped (no images): {:>6}", stats.skipped_no_images);
    if stats.duplicate_skus > 0 {
        log::info!("  Duplicate SKUs:      {:>6}", stats.duplicate_skus);
    }
    if stats.copy_failures > 0 {
        log::warn!(
            "{} {} image copies failed; see warnings above",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            stats.copy_failures,
        );
    }

    crate::log_blank();
    log::info!(
        "  {} Wrote {} records to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        outcome.records.len(),
        config.catalog.display(),
    );
    log::info!("    Assets copied to {}", config.assets_dest().display());
    if let Some(backup) = backup {
        log::info!("    Previous catalog backed up to {}", backup.display());
    }

    Ok(())
}
