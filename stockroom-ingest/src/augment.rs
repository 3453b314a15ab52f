//! Augmentation passes: synthetic metrics, gender duplication, color swatches.
//!
//! Each pass is a pure in-memory transform over the loaded catalog; the
//! caller owns loading, backup, and persistence. The random passes take the
//! RNG as a parameter so tests can seed one.

use rand::Rng;
use stockroom_catalog::next_id;
use stockroom_catalog::types::ProductRecord;

/// Swatch used when a color name has no table entry, and the placeholder
/// the build pass emits before this pass has run.
pub const FALLBACK_SWATCH: &str = "#000000";

/// Framecolor name → hex swatch, as rendered by the storefront.
pub const COLOR_SWATCHES: &[(&str, &str)] = &[
    // Blacks and greys
    ("Black", "#000000"),
    ("Gun", "#4A4A4A"),
    ("Gunmetal", "#2C3539"),
    ("Grey", "#808080"),
    ("Grey transparent", "#B0B0B0"),
    ("Charcoal", "#36454F"),
    ("Silver", "#C0C0C0"),
    ("Dark brown", "#3E2723"),
    // Browns
    ("Brown", "#8B4513"),
    ("Reddish brown", "#A0522D"),
    ("Tortoise", "#8B4513"),
    // Blues
    ("Blue", "#0000FF"),
    ("Royal blue", "#4169E1"),
    ("Blue transparent", "#87CEEB"),
    ("Navy Blue", "#000080"),
    ("Teal", "#008080"),
    // Reds and burgundies
    ("Red", "#FF0000"),
    ("Burgundy", "#800020"),
    ("Wine", "#722F37"),
    ("Maroon", "#800000"),
    // Golds and metallics
    ("Gold", "#FFD700"),
    ("Golden", "#FFD700"),
    ("Rose Gold", "#B76E79"),
    ("Copper", "#B87333"),
    ("Bronze", "#CD7F32"),
    // Whites and creams
    ("White", "#FFFFFF"),
    ("White transparent", "#F5F5F5"),
    ("Cream", "#FFFDD0"),
    // Others
    ("Green", "#008000"),
    ("Olive", "#808000"),
    ("Mint", "#98FF98"),
    ("Purple", "#800080"),
    ("Pink", "#FFC0CB"),
    ("Peach", "#FFE5B4"),
    ("Orange", "#FFA500"),
    ("Yellow", "#FFFF00"),
    ("Beige", "#F5F5DC"),
    ("Multicolor", "#FF69B4"),
    ("Black and gold", "#000000"),
];

// ── Metrics ─────────────────────────────────────────────────────────────────

/// Statistics from a metric pass.
#[derive(Debug, Default)]
pub struct MetricStats {
    pub records: u64,
    pub popularity_dropped: u64,
}

/// Assign synthetic engagement metrics to every record.
///
/// `clicks` is uniform in 100..=2000; `adds_to_cart` is uniform in
/// 10..=⌊0.3 × clicks⌋, so adds never exceed 30% of clicks. The legacy
/// `popularity` field is dropped wherever it survives in older catalogs.
pub fn synthesize_metrics<R: Rng>(records: &mut [ProductRecord], rng: &mut R) -> MetricStats {
    let mut stats = MetricStats::default();
    for record in records {
        let clicks: u32 = rng.gen_range(100..=2000);
        let cap = (f64::from(clicks) * 0.3) as u32;
        record.clicks = Some(clicks);
        record.adds_to_cart = Some(rng.gen_range(10..=cap));
        if record.popularity.take().is_some() {
            stats.popularity_dropped += 1;
        }
        stats.records += 1;
    }
    stats
}

// ── Gender duplication ──────────────────────────────────────────────────────

/// Statistics from a duplication pass.
#[derive(Debug, Default)]
pub struct DuplicateStats {
    pub matched: u64,
    pub cloned: u64,
}

/// Clone every record whose gender equals `gender` and append the clones.
///
/// Each clone gets the next free id (continuing past the current maximum)
/// and a `_DUP_<token>` SKU suffix with a random three-digit token, so the
/// storefront treats it as a distinct listing. Originals are untouched.
pub fn duplicate_gender<R: Rng>(
    records: &mut Vec<ProductRecord>,
    gender: &str,
    rng: &mut R,
) -> DuplicateStats {
    let mut next = next_id(records);
    let mut clones = Vec::new();

    for record in records.iter().filter(|r| r.gender == gender) {
        let mut clone = record.clone();
        clone.id = next;
        next += 1;
        let token: u32 = rng.gen_range(100..=999);
        clone.skuid = format!("{}_DUP_{}", record.skuid, token);
        clones.push(clone);
    }

    let stats = DuplicateStats {
        matched: clones.len() as u64,
        cloned: clones.len() as u64,
    };
    records.extend(clones);
    stats
}

// ── Color swatches ──────────────────────────────────────────────────────────

/// Statistics from a swatch pass.
#[derive(Debug, Default)]
pub struct SwatchStats {
    pub updated: u64,
    pub fallbacks: u64,
}

/// The hex swatch for a framecolor name, if the table knows it.
pub fn swatch_for(name: &str) -> Option<&'static str> {
    let name = name.trim();
    COLOR_SWATCHES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, hex)| *hex)
}

/// Replace each record's placeholder `colors` with real swatches mapped
/// from its `color_names`. Unknown names fall back to [`FALLBACK_SWATCH`];
/// records with no color names are left untouched.
pub fn apply_color_swatches(records: &mut [ProductRecord]) -> SwatchStats {
    let mut stats = SwatchStats::default();
    for record in records {
        if record.color_names.is_empty() {
            continue;
        }
        record.colors = record
            .color_names
            .iter()
            .map(|name| match swatch_for(name) {
                Some(hex) => hex.to_string(),
                None => {
                    stats.fallbacks += 1;
                    FALLBACK_SWATCH.to_string()
                }
            })
            .collect();
        stats.updated += 1;
    }
    stats
}
