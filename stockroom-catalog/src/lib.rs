//! Product catalog data model, SKU identity, and JSON persistence.
//!
//! This crate defines the persistent catalog schema without any pipeline
//! logic. Consumers use these types directly for serialization, and the
//! `store` module for the backup-then-atomic-save discipline every
//! catalog-mutating pass shares.

pub mod key;
pub mod store;
pub mod types;

pub use key::{ColorMap, canonical_sku, color_code};
pub use store::{
    StoreError, backup_path, backup_then_save, load_catalog, next_id, save_artifact, save_catalog,
};
pub use types::*;
