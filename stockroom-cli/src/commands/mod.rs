pub(crate) mod build;
pub(crate) mod colormap;
pub(crate) mod duplicate;
pub(crate) mod group;
pub(crate) mod metrics;
pub(crate) mod shapes;
pub(crate) mod swatches;

use std::path::Path;

use stockroom_ingest::{PathOverrides, PipelineConfig};

use crate::CliError;
use crate::cli_types::PathArgs;

/// Resolve the pipeline config from the `--config` flag and per-path
/// overrides.
pub(crate) fn resolve_config(
    config: Option<&Path>,
    paths: PathArgs,
) -> Result<PipelineConfig, CliError> {
    let overrides = PathOverrides {
        sheet: paths.sheet,
        images_src: paths.images_src,
        public_root: paths.public_root,
        catalog: paths.catalog,
    };
    Ok(PipelineConfig::resolve(config, overrides)?)
}
