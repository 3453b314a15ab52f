//! The primary build pass: spreadsheet rows + image assets → catalog records.
//!
//! Walks the sheet once, resolves each row's SKU and images, and composes
//! one [`ProductRecord`] per distinct SKU. Rows without a usable SKU and
//! rows whose SKU resolves zero images are skipped (counted, not errors).
//! A duplicate SKU later in the sheet replaces the earlier record's fields
//! in place, keeping the earlier catalog position.

use std::collections::HashMap;
use std::path::Path;

use stockroom_catalog::types::ProductRecord;
use thiserror::Error;

use crate::assets;
use crate::progress::IngestProgress;
use crate::sheet::{self, SheetError};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Sheet error: {0}")]
    Sheet(#[from] SheetError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Statistics from a build pass.
#[derive(Debug, Default)]
pub struct BuildStats {
    pub rows_read: u64,
    pub skipped_no_sku: u64,
    pub skipped_no_images: u64,
    pub duplicate_skus: u64,
    pub images_copied: u64,
    pub copy_failures: u64,
    pub records_built: u64,
}

/// Result of a build pass.
pub struct BuildOutcome {
    pub records: Vec<ProductRecord>,
    pub stats: BuildStats,
}

/// Build catalog records from the sheet at `sheet_path` and the image tree
/// under `images_src`, copying assets into `<public_root>/images/products`.
///
/// The returned records are not persisted here; the caller decides where
/// (and whether) to write them.
pub fn build_catalog(
    sheet_path: &Path,
    images_src: &Path,
    public_root: &Path,
    progress: Option<&dyn IngestProgress>,
) -> Result<BuildOutcome, BuildError> {
    let rows = sheet::read_sheet(sheet_path)?;
    let dest_dir = public_root.join("images").join("products");

    let mut stats = BuildStats::default();
    let mut records: Vec<ProductRecord> = Vec::new();
    let mut by_sku: HashMap<String, usize> = HashMap::new();
    let mut max_id: u32 = 0;
    let total = rows.len();

    for (i, row) in rows.iter().enumerate() {
        stats.rows_read += 1;

        let Some(sku) = &row.skuid else {
            stats.skipped_no_sku += 1;
            continue;
        };
        if let Some(p) = progress {
            p.on_row(i + 1, total, sku);
        }

        let images = assets::copy_product_images(images_src, &dest_dir, sku)?;
        stats.images_copied += images.public_paths.len() as u64;
        stats.copy_failures += images.copy_failures;
        if images.public_paths.is_empty() {
            stats.skipped_no_images += 1;
            continue;
        }

        let id = match row.id {
            Some(id) => id,
            None => max_id + 1,
        };
        max_id = max_id.max(id);

        let record = compose_record(id, row, sku, images.public_paths);
        match by_sku.get(sku) {
            Some(&pos) => {
                stats.duplicate_skus += 1;
                records[pos] = record;
            }
            None => {
                by_sku.insert(sku.clone(), records.len());
                records.push(record);
            }
        }
    }

    stats.records_built = records.len() as u64;
    if let Some(p) = progress {
        p.on_complete(&format!(
            "Built {} records from {} rows",
            stats.records_built, stats.rows_read
        ));
    }

    Ok(BuildOutcome { records, stats })
}

/// Compose one catalog record from a typed row and its resolved images.
fn compose_record(id: u32, row: &sheet::SheetRow, sku: &str, images: Vec<String>) -> ProductRecord {
    let brand = row.brand.clone().unwrap_or_default();
    let style = row.style.clone().unwrap_or_default();
    let name = match &row.name {
        Some(name) => name.clone(),
        None => format!("{brand} {style}").trim().to_string(),
    };

    ProductRecord {
        id,
        name,
        brand,
        style,
        size: row.size.clone().unwrap_or_default(),
        price: row.price,
        // Placeholder swatch until the swatch pass maps real colors.
        colors: vec!["#000000".to_string()],
        color_names: row.framecolor.clone().map(|c| vec![c]).unwrap_or_default(),
        image: images.first().cloned().unwrap_or_default(),
        images,
        skuid: sku.to_string(),
        category: row.primary_category.clone().unwrap_or_default(),
        material: row.material.clone().unwrap_or_default(),
        collections: row
            .secondary_category
            .clone()
            .map(|c| vec![c])
            .unwrap_or_default(),
        comfort: row.comfort.clone(),
        gender: row.gender.clone().unwrap_or_default(),
        ..Default::default()
    }
}
