use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Configuration resolution failed
    #[error("Config error: {0}")]
    Config(#[from] stockroom_ingest::ConfigError),

    /// Spreadsheet could not be read or parsed
    #[error("{0}")]
    Sheet(#[from] stockroom_ingest::SheetError),

    /// Build pass failed
    #[error("{0}")]
    Build(#[from] stockroom_ingest::BuildError),

    /// Catalog file could not be read or written
    #[error("{0}")]
    Store(#[from] stockroom_catalog::StoreError),
}
