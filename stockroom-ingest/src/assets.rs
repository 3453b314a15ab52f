//! Per-SKU image asset location and copying.
//!
//! Product photos live under `<images_src>/<sku>/` with fixed slot names
//! `<sku>_1.jpg` through `<sku>_4.jpg`. Slots may be sparse; whatever
//! exists is copied byte-for-byte into the flat public assets directory
//! and referenced by its public URL path.

use std::path::Path;

/// URL prefix the storefront serves the flat assets directory under.
pub const PUBLIC_IMAGE_PREFIX: &str = "/images/products";

/// Highest image slot probed per SKU.
pub const MAX_IMAGE_SLOTS: u32 = 4;

/// Images resolved for one SKU.
#[derive(Debug, Default)]
pub struct SkuImages {
    /// Public URL paths, in ascending slot order.
    pub public_paths: Vec<String>,
    /// Slot files that existed but could not be copied.
    pub copy_failures: u64,
}

/// Probe the image slots for `sku`, copy each existing slot file into
/// `dest_dir`, and return the public paths in slot order.
///
/// A missing per-SKU source directory yields zero images and is not an
/// error. A failed copy is logged and skipped; the remaining slots (and
/// the batch) continue. Only creating the destination directory can fail
/// the call.
pub fn copy_product_images(
    images_src: &Path,
    dest_dir: &Path,
    sku: &str,
) -> std::io::Result<SkuImages> {
    let mut images = SkuImages::default();

    let sku_dir = images_src.join(sku);
    if !sku_dir.is_dir() {
        return Ok(images);
    }

    std::fs::create_dir_all(dest_dir)?;

    for slot in 1..=MAX_IMAGE_SLOTS {
        let filename = format!("{sku}_{slot}.jpg");
        let src = sku_dir.join(&filename);
        if !src.is_file() {
            continue;
        }
        match std::fs::copy(&src, dest_dir.join(&filename)) {
            Ok(_) => images
                .public_paths
                .push(format!("{PUBLIC_IMAGE_PREFIX}/{filename}")),
            Err(e) => {
                log::warn!("Failed to copy {}: {}", src.display(), e);
                images.copy_failures += 1;
            }
        }
    }

    Ok(images)
}
