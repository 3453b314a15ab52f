//! JSON persistence for the product catalog.
//!
//! The catalog is a single UTF-8 JSON array, pretty-printed with two-space
//! indent and a trailing newline so diffs stay readable. Every overwrite of
//! an existing catalog goes through the same discipline: snapshot the live
//! file to its `_backup` sibling, then replace the live file atomically
//! (write to a temp file, rename over).

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::ProductRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

impl StoreError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Load the catalog file into memory.
///
/// A missing, unreadable, or malformed file is a hard error: the passes
/// that consume an existing catalog must not run against partial data.
pub fn load_catalog(path: &Path) -> Result<Vec<ProductRecord>, StoreError> {
    let contents = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| StoreError::Json {
        path: path.display().to_string(),
        source: e,
    })
}

/// Write the catalog atomically: serialize, write to `<path>.tmp`, rename
/// over the live file. Parent directories are created on demand.
pub fn save_catalog(path: &Path, records: &[ProductRecord]) -> Result<(), StoreError> {
    save_artifact(path, records)
}

/// Generic atomic JSON writer, shared by the catalog itself and derived
/// artifacts (grouped variants, the color-code map).
pub fn save_artifact<T: serde::Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), StoreError> {
    let mut serialized = serde_json::to_string_pretty(value).map_err(|e| StoreError::Json {
        path: path.display().to_string(),
        source: e,
    })?;
    serialized.push('\n');

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }

    let tmp = path.with_extension(format!(
        "{}.tmp",
        path.extension().and_then(|e| e.to_str()).unwrap_or("")
    ));
    std::fs::write(&tmp, &serialized).map_err(|e| StoreError::io(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| StoreError::io(path, e))?;
    Ok(())
}

/// The single-generation backup sibling for a catalog path:
/// `data/products.json` → `data/products_backup.json`.
pub fn backup_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("catalog");
    let name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}_backup.{ext}"),
        None => format!("{stem}_backup"),
    };
    path.with_file_name(name)
}

/// Snapshot the live catalog (if any) to its backup sibling, then save.
///
/// The snapshot is taken before the new contents touch disk, so the backup
/// always holds the pre-call state. Returns the backup path when a snapshot
/// was written; `None` means there was no live file to back up.
pub fn backup_then_save(
    path: &Path,
    records: &[ProductRecord],
) -> Result<Option<PathBuf>, StoreError> {
    let backup = if path.exists() {
        let backup = backup_path(path);
        std::fs::copy(path, &backup).map_err(|e| StoreError::io(&backup, e))?;
        Some(backup)
    } else {
        None
    };
    save_catalog(path, records)?;
    Ok(backup)
}

/// The next free record id: one past the highest assigned, `1` for an
/// empty catalog.
pub fn next_id(records: &[ProductRecord]) -> u32 {
    records.iter().map(|r| r.id).max().unwrap_or(0) + 1
}
