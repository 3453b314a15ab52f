//! Product spreadsheet parser.
//!
//! Parses the merchandising team's CSV export (one row per SKU) into typed
//! [`SheetRow`] records. All column probing happens here, at the boundary:
//! headers are matched by name, blank cells and the `nan` null sentinel the
//! export writes into empty cells become `None`, and downstream passes never
//! touch raw cells again.

use std::collections::HashMap;
use std::path::Path;

use stockroom_catalog::{ColorMap, canonical_sku, color_code};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

/// A single spreadsheet row, typed and cleaned.
///
/// Every field is optional: the export routinely ships with columns missing
/// or cells blank, and each pass decides for itself which fields it needs.
#[derive(Debug, Clone, Default)]
pub struct SheetRow {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub style: Option<String>,
    pub size: Option<String>,
    pub price: Option<f64>,
    /// Canonical SKU (trimmed). `None` means the row is ineligible for
    /// every keyed pass.
    pub skuid: Option<String>,
    pub framecolor: Option<String>,
    pub primary_category: Option<String>,
    pub secondary_category: Option<String>,
    pub material: Option<String>,
    /// Comma-split comfort tags, trimmed, empties dropped.
    pub comfort: Vec<String>,
    pub gender: Option<String>,
    pub shape: Option<String>,
}

/// Read and parse the spreadsheet at `path`.
pub fn read_sheet(path: &Path) -> Result<Vec<SheetRow>, SheetError> {
    let contents = std::fs::read_to_string(path).map_err(|e| SheetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_sheet(&contents).map_err(|e| SheetError::Csv {
        path: path.display().to_string(),
        source: e,
    })
}

/// Parse spreadsheet CSV content from a string.
pub fn parse_sheet(content: &str) -> Result<Vec<SheetRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    // Header name -> column index, case-insensitive.
    let columns: HashMap<String, usize> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim().to_lowercase(), i))
        .collect();

    if !columns.contains_key("skuid") {
        log::warn!("Sheet has no 'skuid' column; no row will be importable");
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed sheet row: {e}");
                continue;
            }
        };

        let cell = |name: &str| -> Option<String> {
            let i = *columns.get(name)?;
            clean_cell(record.get(i).unwrap_or(""))
        };

        rows.push(SheetRow {
            id: cell("id").and_then(|v| parse_id(&v)),
            name: cell("name"),
            brand: cell("brand"),
            style: cell("style"),
            size: cell("size"),
            price: cell("price").and_then(|v| v.parse().ok()),
            skuid: cell("skuid").and_then(|v| canonical_sku(&v)),
            framecolor: cell("framecolor"),
            primary_category: cell("primarycategory"),
            secondary_category: cell("secondarycategory"),
            material: cell("material"),
            comfort: cell("comfort")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            gender: cell("gender"),
            shape: cell("shape"),
        });
    }

    Ok(rows)
}

/// Build the color-code lookup table from sheet rows.
///
/// A row contributes an entry when it has both a SKU long enough to carry
/// a color code and a framecolor; the first row to use a code wins.
pub fn collect_color_map(rows: &[SheetRow]) -> ColorMap {
    let mut map = ColorMap::new();
    for row in rows {
        let (Some(sku), Some(framecolor)) = (&row.skuid, &row.framecolor) else {
            continue;
        };
        if let Some(code) = color_code(sku) {
            map.insert_first(code, framecolor.clone());
        }
    }
    map
}

/// Trim a raw cell; blank cells and the `nan` sentinel become `None`.
fn clean_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return None;
    }
    Some(trimmed.to_string())
}

/// Parse a sheet id cell. The export sometimes writes ids as floats
/// (`"12.0"`), so those are accepted when the value is whole.
fn parse_id(value: &str) -> Option<u32> {
    if let Ok(id) = value.parse::<u32>() {
        return Some(id);
    }
    let f = value.parse::<f64>().ok()?;
    if f.fract() == 0.0 && f >= 0.0 && f <= f64::from(u32::MAX) {
        Some(f as u32)
    } else {
        None
    }
}
