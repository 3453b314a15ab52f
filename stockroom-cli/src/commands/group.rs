use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stockroom_catalog::{load_catalog, save_artifact};
use stockroom_ingest::group_variants;

use super::resolve_config;
use crate::CliError;
use crate::cli_types::PathArgs;

/// Write the grouped-variants artifact next to the catalog.
pub(crate) fn run_group(
    config: Option<&Path>,
    paths: PathArgs,
    out: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = resolve_config(config, paths)?;

    let records = load_catalog(&config.catalog)?;
    let groups = group_variants(&records);
    let out = out.unwrap_or_else(|| grouped_path(&config.catalog));
    save_artifact(&out, &groups)?;

    log::info!("{}", "Variant grouping complete".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Products:        {:>6}", records.len());
    log::info!("  Grouped entries: {:>6}", groups.len());
    log::info!("  Merged away:     {:>6}", records.len() - groups.len());
    log::info!(
        "  {} Wrote {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        out.display(),
    );

    Ok(())
}

/// `data/products.json` → `data/products_grouped.json`.
fn grouped_path(catalog: &Path) -> PathBuf {
    let stem = catalog
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("catalog");
    let name = match catalog.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}_grouped.{ext}"),
        None => format!("{stem}_grouped"),
    };
    catalog.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_path_keeps_extension() {
        assert_eq!(
            grouped_path(Path::new("data/products.json")),
            PathBuf::from("data/products_grouped.json")
        );
    }
}
