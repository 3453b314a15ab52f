//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(about = "Build and maintain the storefront product catalog", long_about = None)]
pub(crate) struct Cli {
    /// Path to the pipeline config file (default: ./stockroom.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Path overrides shared by every pass; each beats the config file.
#[derive(Args, Clone)]
pub(crate) struct PathArgs {
    /// Product spreadsheet CSV
    #[arg(long)]
    pub sheet: Option<PathBuf>,

    /// Root of the per-SKU image source tree
    #[arg(long)]
    pub images_src: Option<PathBuf>,

    /// Public web root assets are copied under
    #[arg(long)]
    pub public_root: Option<PathBuf>,

    /// Catalog JSON file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Subcommands, listed in canonical pass order: build, then shapes, then
/// swatches, then metrics, then duplicate. `group` and `colormap` write
/// derived artifacts and can run any time after build.
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Build the catalog from the spreadsheet and image tree
    Build {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Merge frame shapes from the spreadsheet into the catalog
    Shapes {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Replace placeholder swatches with hex colors mapped from color names
    Swatches {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Assign synthetic engagement metrics (clicks, adds-to-cart)
    Metrics {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Clone every record of a gender with fresh ids and suffixed SKUs
    Duplicate {
        /// Gender value to duplicate
        #[arg(long, default_value = "Women")]
        gender: String,

        #[command(flatten)]
        paths: PathArgs,
    },

    /// Write the grouped-variants artifact (colorways collapsed per frame)
    Group {
        /// Output file (default: catalog path with `_grouped` suffix)
        #[arg(long)]
        out: Option<PathBuf>,

        #[command(flatten)]
        paths: PathArgs,
    },

    /// Export the SKU color-code → framecolor map
    Colormap {
        /// Output file
        #[arg(long, default_value = "color_mapping.json")]
        out: PathBuf,

        #[command(flatten)]
        paths: PathArgs,
    },
}
