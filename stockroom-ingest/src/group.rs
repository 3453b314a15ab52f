//! Variant grouping: collapse colorways of the same frame into one entry.
//!
//! Records sharing brand, style, size, shape, and gender are the same
//! physical frame in different colors. The grouped view keeps the first
//! record of each group as the base, lists every member as a variant, and
//! aggregates the colors/SKUs across the group. This is a derived artifact;
//! the flat catalog is not modified.

use std::collections::{HashMap, HashSet};

use stockroom_catalog::types::{GroupedProduct, ProductRecord, ProductVariant};

/// Group records by frame identity, preserving first-member order.
pub fn group_variants(records: &[ProductRecord]) -> Vec<GroupedProduct> {
    let mut groups: Vec<GroupedProduct> = Vec::new();
    let mut by_key: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = group_key(record);
        let pos = *by_key.entry(key).or_insert_with(|| {
            groups.push(GroupedProduct {
                base: record.clone(),
                variants: Vec::new(),
                all_colors: Vec::new(),
                all_color_names: Vec::new(),
                all_skuids: Vec::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[pos];
        group.variants.push(ProductVariant {
            skuid: record.skuid.clone(),
            color_names: record.color_names.clone(),
            colors: record.colors.clone(),
            image: record.image.clone(),
            images: record.images.clone(),
        });
        group.all_colors.extend(record.colors.iter().cloned());
        group.all_color_names.extend(record.color_names.iter().cloned());
        if !record.skuid.is_empty() {
            group.all_skuids.push(record.skuid.clone());
        }
    }

    for group in &mut groups {
        group.all_colors = dedup_first_seen(std::mem::take(&mut group.all_colors));
        group.all_color_names = dedup_first_seen(std::mem::take(&mut group.all_color_names));
        // The base advertises every color available across the group.
        group.base.colors = group.all_colors.clone();
        group.base.color_names = group.all_color_names.clone();
    }

    groups
}

fn group_key(record: &ProductRecord) -> String {
    format!(
        "{}_{}_{}_{}_{}",
        record.brand,
        record.style,
        record.size,
        record.shape.as_deref().unwrap_or(""),
        record.gender
    )
    .to_lowercase()
}

fn dedup_first_seen(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values.into_iter().filter(|v| seen.insert(v.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colorway(id: u32, skuid: &str, name: &str, hex: &str) -> ProductRecord {
        ProductRecord {
            id,
            brand: "Multifolks".to_string(),
            style: "Aviator".to_string(),
            size: "M".to_string(),
            gender: "Men".to_string(),
            shape: Some("Round".to_string()),
            skuid: skuid.to_string(),
            color_names: vec![name.to_string()],
            colors: vec![hex.to_string()],
            image: format!("/images/products/{skuid}_1.jpg"),
            images: vec![format!("/images/products/{skuid}_1.jpg")],
            ..Default::default()
        }
    }

    #[test]
    fn test_colorways_collapse_into_one_group() {
        let records = vec![
            colorway(1, "MFAV1001", "Black", "#000000"),
            colorway(2, "MFAV2003", "Blue", "#0000FF"),
        ];
        let groups = group_variants(&records);
        assert_eq!(groups.len(), 1);

        let group = &groups[0];
        assert_eq!(group.variants.len(), 2);
        assert_eq!(group.all_skuids, vec!["MFAV1001", "MFAV2003"]);
        assert_eq!(group.all_color_names, vec!["Black", "Blue"]);
        assert_eq!(group.base.colors, vec!["#000000", "#0000FF"]);
        // The base keeps the first member's identity.
        assert_eq!(group.base.id, 1);
        assert_eq!(group.base.skuid, "MFAV1001");
    }

    #[test]
    fn test_different_shapes_stay_separate() {
        let mut records = vec![
            colorway(1, "MFAV1001", "Black", "#000000"),
            colorway(2, "MFAV2003", "Blue", "#0000FF"),
        ];
        records[1].shape = Some("Square".to_string());

        let groups = group_variants(&records);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_group_key_is_case_insensitive() {
        let mut records = vec![
            colorway(1, "MFAV1001", "Black", "#000000"),
            colorway(2, "MFAV2003", "Blue", "#0000FF"),
        ];
        records[1].brand = "MULTIFOLKS".to_string();

        let groups = group_variants(&records);
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_duplicate_colors_dedup_first_seen() {
        let records = vec![
            colorway(1, "MFAV1001", "Black", "#000000"),
            colorway(2, "MFAV9001", "Black and gold", "#000000"),
        ];
        let groups = group_variants(&records);
        assert_eq!(groups[0].all_colors, vec!["#000000"]);
        assert_eq!(groups[0].all_color_names, vec!["Black", "Black and gold"]);
    }

    #[test]
    fn test_group_order_follows_first_member() {
        let mut second_style = colorway(3, "MFRT5000", "Gold", "#FFD700");
        second_style.style = "Retro".to_string();
        let records = vec![
            colorway(1, "MFAV1001", "Black", "#000000"),
            second_style,
            colorway(2, "MFAV2003", "Blue", "#0000FF"),
        ];
        let groups = group_variants(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].base.style, "Aviator");
        assert_eq!(groups[1].base.style, "Retro");
    }
}
