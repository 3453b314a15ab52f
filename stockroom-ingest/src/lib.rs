//! ETL passes for the product catalog pipeline.
//!
//! This crate owns all pipeline logic: parsing the product spreadsheet,
//! locating and copying per-SKU image assets, building catalog records,
//! merging frame shapes, and the augmentation passes (synthetic metrics,
//! gender duplication, color swatches, variant grouping). Persistence and
//! the backup discipline live in `stockroom-catalog`; each pass here is a
//! transform the CLI composes with it.

pub mod assets;
pub mod augment;
pub mod build;
pub mod config;
pub mod group;
pub mod progress;
pub mod shapes;
pub mod sheet;

pub use assets::{MAX_IMAGE_SLOTS, PUBLIC_IMAGE_PREFIX, SkuImages, copy_product_images};
pub use augment::{
    COLOR_SWATCHES, DuplicateStats, FALLBACK_SWATCH, MetricStats, SwatchStats,
    apply_color_swatches, duplicate_gender, swatch_for, synthesize_metrics,
};
pub use build::{BuildError, BuildOutcome, BuildStats, build_catalog};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, PathOverrides, PipelineConfig};
pub use group::group_variants;
pub use progress::{IngestProgress, LogProgress, SilentProgress};
pub use shapes::{ShapeStats, merge_shapes, shape_map};
pub use sheet::{SheetError, SheetRow, collect_color_map, parse_sheet, read_sheet};
