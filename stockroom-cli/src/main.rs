//! stockroom CLI
//!
//! Command-line interface for the product catalog pipeline: build the
//! catalog from the merchandising spreadsheet and image tree, then run the
//! merge and augmentation passes over it.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;

/// Blank info line, for spacing between output sections.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Build { paths } => commands::build::run_build(config, paths, cli.quiet),
        Commands::Shapes { paths } => commands::shapes::run_shapes(config, paths),
        Commands::Swatches { paths } => commands::swatches::run_swatches(config, paths),
        Commands::Metrics { paths } => commands::metrics::run_metrics(config, paths),
        Commands::Duplicate { gender, paths } => {
            commands::duplicate::run_duplicate(config, paths, &gender)
        }
        Commands::Group { out, paths } => commands::group::run_group(config, paths, out),
        Commands::Colormap { out, paths } => commands::colormap::run_colormap(config, paths, &out),
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
