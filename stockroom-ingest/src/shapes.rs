//! The shape-merge pass: frame shapes from the sheet into the catalog.
//!
//! Shape data arrives on the same spreadsheet but is merged separately so
//! it can be re-run whenever the merchandising team fills in more rows.
//! The pass only ever sets shapes for SKUs present in the map; records
//! without a mapping keep whatever shape they already had.

use std::collections::BTreeMap;

use stockroom_catalog::types::ProductRecord;

use crate::sheet::SheetRow;

/// Statistics from a shape-merge pass.
#[derive(Debug, Default)]
pub struct ShapeStats {
    pub records: u64,
    pub updated: u64,
}

/// Build the skuid → shape map from sheet rows that have both.
///
/// First-seen wins, matching the other derived lookup tables.
pub fn shape_map(rows: &[SheetRow]) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for row in rows {
        let (Some(sku), Some(shape)) = (&row.skuid, &row.shape) else {
            continue;
        };
        map.entry(sku.clone()).or_insert_with(|| shape.clone());
    }
    map
}

/// Set `shape` on every record whose SKU has a mapping.
///
/// Running the pass twice with the same inputs is a no-op the second time,
/// so the persisted catalog comes out byte-identical.
pub fn merge_shapes(
    records: &mut [ProductRecord],
    shapes: &BTreeMap<String, String>,
) -> ShapeStats {
    let mut stats = ShapeStats {
        records: records.len() as u64,
        ..Default::default()
    };
    for record in records {
        if let Some(shape) = shapes.get(&record.skuid) {
            record.shape = Some(shape.clone());
            stats.updated += 1;
        }
    }
    stats
}
