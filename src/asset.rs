use std::path::{Path, PathBuf};

use crate::catalog::PRODUCTS;
use crate::error::SeedError;
use crate::logger::trace;

/// Probe order; the first existing file wins.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

pub fn image_file_name(product_id: i64, ext: &str) -> String {
    format!("product{product_id}.{ext}")
}

/// Resolve the image for a product, if any.
pub fn find_image(folder: &Path, product_id: i64) -> Option<PathBuf> {
    SUPPORTED_EXTENSIONS.iter().find_map(|ext| {
        let candidate = folder.join(image_file_name(product_id, ext));
        trace(&format!("probing {}", candidate.display()));
        candidate.is_file().then_some(candidate)
    })
}

pub fn read_image(path: &Path) -> Result<Vec<u8>, SeedError> {
    std::fs::read(path).map_err(|source| SeedError::ImageRead {
        path: path.to_path_buf(),
        source,
    })
}

/// True when at least one catalog product has an image in `folder`.
pub fn has_any_image(folder: &Path) -> bool {
    folder.is_dir() && PRODUCTS.iter().any(|p| find_image(folder, p.id).is_some())
}
