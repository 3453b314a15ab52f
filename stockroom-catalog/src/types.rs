//! Data model types for the product catalog.
//!
//! These types represent the persistent catalog schema consumed by the
//! storefront: one `ProductRecord` per SKU, plus the grouped-variant view
//! derived from it.

use serde::{Deserialize, Serialize};

// ── Product ─────────────────────────────────────────────────────────────────

/// A single catalog entry, keyed by `skuid`.
///
/// Field order matters: it is the order the fields appear in the emitted
/// JSON, which downstream tooling diffs by eye. Scalars sourced from the
/// spreadsheet are always present (empty string / `null` when the cell was
/// blank); fields added by later passes (`shape`, `clicks`, `adds_to_cart`)
/// are omitted until the pass that owns them has run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub color_names: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub skuid: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub collections: Vec<String>,
    #[serde(default)]
    pub comfort: Vec<String>,
    #[serde(default)]
    pub gender: String,
    /// Set by the shape-merge pass; absent from the JSON until then.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    /// Set by the metric pass; absent from the JSON until then.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clicks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adds_to_cart: Option<u32>,
    /// Legacy field from older catalogs. Read if present, dropped by the
    /// metric pass, never written for new records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u32>,
}

// ── Grouped Variants ────────────────────────────────────────────────────────

/// One color variant inside a [`GroupedProduct`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub skuid: String,
    pub color_names: Vec<String>,
    pub colors: Vec<String>,
    pub image: String,
    pub images: Vec<String>,
}

/// Records sharing brand/style/size/shape/gender, collapsed into one entry.
///
/// The base fields come from the first record of the group, with `colors`
/// and `color_names` replaced by the deduplicated aggregates across all
/// variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedProduct {
    #[serde(flatten)]
    pub base: ProductRecord,
    pub variants: Vec<ProductVariant>,
    pub all_colors: Vec<String>,
    pub all_color_names: Vec<String>,
    pub all_skuids: Vec<String>,
}
