use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stockroom_catalog::save_artifact;
use stockroom_ingest::{collect_color_map, read_sheet};

use super::resolve_config;
use crate::CliError;
use crate::cli_types::PathArgs;

/// Export the color-code → framecolor map derived from the spreadsheet.
pub(crate) fn run_colormap(
    config: Option<&Path>,
    paths: PathArgs,
    out: &Path,
) -> Result<(), CliError> {
    let config = resolve_config(config, paths)?;

    let rows = read_sheet(&config.sheet)?;
    let map = collect_color_map(&rows);
    save_artifact(out, &map)?;

    log::info!("{}", "Color map exported".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Rows read:   {:>6}", rows.len());
    log::info!("  Color codes: {:>6}", map.len());
    log::info!(
        "  {} Wrote {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        out.display(),
    );

    Ok(())
}
