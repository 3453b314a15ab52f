//! Pipeline path configuration.
//!
//! Every pass takes its paths from a resolved [`PipelineConfig`]; nothing
//! reads configuration at a distance. Resolution is a per-field priority
//! chain:
//!
//! 1. CLI override (if given)
//! 2. `[paths]` table of `stockroom.toml` (or the `--config` file)
//! 3. Built-in default
//!
//! A missing default config file is fine; a `--config` file that can't be
//! read, or any config file that can't be parsed, is an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Config file looked for in the working directory when `--config` is not
/// given.
pub const DEFAULT_CONFIG_FILE: &str = "stockroom.toml";

const DEFAULT_SHEET: &str = "products.csv";
const DEFAULT_IMAGES_SRC: &str = "images";
const DEFAULT_PUBLIC_ROOT: &str = "public";
const DEFAULT_CATALOG: &str = "data/products.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Per-field CLI overrides, all optional.
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub sheet: Option<PathBuf>,
    pub images_src: Option<PathBuf>,
    pub public_root: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
}

/// Fully-resolved paths the passes run against.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// The product spreadsheet (CSV).
    pub sheet: PathBuf,
    /// Root of the per-SKU image source tree.
    pub images_src: PathBuf,
    /// Public web root; assets are copied under it.
    pub public_root: PathBuf,
    /// The catalog JSON file.
    pub catalog: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    paths: PathsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PathsSection {
    sheet: Option<PathBuf>,
    images_src: Option<PathBuf>,
    public_root: Option<PathBuf>,
    catalog: Option<PathBuf>,
}

impl PipelineConfig {
    /// Resolve the full configuration from an optional explicit config file
    /// and CLI overrides.
    pub fn resolve(
        config_path: Option<&Path>,
        overrides: PathOverrides,
    ) -> Result<Self, ConfigError> {
        let file = match config_path {
            Some(path) => read_config_file(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    read_config_file(default)?
                } else {
                    ConfigFile::default()
                }
            }
        };

        Ok(Self {
            sheet: overrides
                .sheet
                .or(file.paths.sheet)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SHEET)),
            images_src: overrides
                .images_src
                .or(file.paths.images_src)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_SRC)),
            public_root: overrides
                .public_root
                .or(file.paths.public_root)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_ROOT)),
            catalog: overrides
                .catalog
                .or(file.paths.catalog)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG)),
        })
    }

    /// The flat directory assets are copied into:
    /// `<public_root>/images/products`.
    pub fn assets_dest(&self) -> PathBuf {
        self.public_root.join("images").join("products")
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}
