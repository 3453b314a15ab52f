//! Logger setup: console output plus an optional logfile.
//!
//! Normal command output goes through `log::info!` so `--quiet` and
//! `--logfile` apply to everything uniformly. Info lines print bare (they
//! are the CLI's regular output); warnings and errors get a level prefix;
//! `--verbose` switches every line to a timestamped debug format.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::LevelFilter;

pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> std::io::Result<()> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let file = match logfile {
        Some(path) => Some(Mutex::new(File::create(path)?)),
        None => None,
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .format(move |buf, record| {
            let line = if verbose {
                format!(
                    "[{} {:>5}] {}",
                    buf.timestamp(),
                    record.level(),
                    record.args()
                )
            } else {
                match record.level() {
                    log::Level::Warn => format!("warning: {}", record.args()),
                    log::Level::Error => format!("error: {}", record.args()),
                    _ => record.args().to_string(),
                }
            };

            if let Some(file) = &file
                && let Ok(mut f) = file.lock()
            {
                let _ = writeln!(f, "{}", strip_ansi_escapes::strip_str(&line));
            }

            writeln!(buf, "{line}")
        })
        .init();

    Ok(())
}
