//! SKU identity resolution.
//!
//! The spreadsheet's `skuid` column is the primary join key for every pass.
//! SKUs are compared exactly as entered apart from surrounding whitespace;
//! the last four characters encode the colorway, which feeds the derived
//! color-code lookup table.

use std::collections::BTreeMap;

use serde::Serialize;

/// The spreadsheet export writes the string `nan` into blank cells.
const NULL_SENTINEL: &str = "nan";

/// Canonical form of a raw SKU cell: trimmed, case preserved.
///
/// Returns `None` for blank cells and for the `nan` null sentinel, so
/// callers can treat "no usable SKU" as a single condition.
pub fn canonical_sku(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NULL_SENTINEL) {
        return None;
    }
    Some(trimmed.to_string())
}

/// The trailing four characters of a SKU, which encode its colorway.
///
/// SKUs shorter than four characters carry no color code. Counts
/// characters, not bytes, so non-ASCII SKUs don't split a code point.
pub fn color_code(sku: &str) -> Option<String> {
    let len = sku.chars().count();
    if len < 4 {
        return None;
    }
    Some(sku.chars().skip(len - 4).collect())
}

/// Lookup table from 4-character color code to the framecolor name that
/// first introduced it.
///
/// First-seen wins: later rows with the same code are ignored, not merged.
/// Iteration (and the JSON export) is ordered by code.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ColorMap {
    entries: BTreeMap<String, String>,
}

impl ColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `code → framecolor` unless the code is already mapped.
    /// Returns whether the entry was inserted.
    pub fn insert_first(&mut self, code: impl Into<String>, framecolor: impl Into<String>) -> bool {
        let code = code.into();
        if self.entries.contains_key(&code) {
            return false;
        }
        self.entries.insert(code, framecolor.into());
        true
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
