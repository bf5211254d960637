use std::path::Path;
#[cfg(feature = "sample-images")]
use std::path::PathBuf;

use crate::error::SeedError;
use crate::logger::{error, info};

pub const SAMPLE_SIZE: u32 = 100;

/// Placeholder colors, indexed by product id - 1.
pub const SAMPLE_COLORS: [(&str, [u8; 3]); 10] = [
    ("Red", [255, 0, 0]),
    ("Green", [0, 255, 0]),
    ("Blue", [0, 0, 255]),
    ("Yellow", [255, 255, 0]),
    ("Magenta", [255, 0, 255]),
    ("Cyan", [0, 255, 255]),
    ("Orange", [255, 128, 0]),
    ("Purple", [128, 0, 255]),
    ("Sky Blue", [0, 128, 255]),
    ("Pink", [255, 192, 203]),
];

/// Write `product1.jpg`..`product10.jpg` solid-color placeholders into
/// `folder`. Returns false when imaging support is missing or a file could
/// not be written; in that case files written by this call are removed again
/// and callers seed without images.
pub fn create_sample_images(folder: &Path) -> bool {
    match write_samples(folder) {
        Ok(created) => {
            println!(
                "\nCreated {} sample images in '{}' folder",
                created,
                folder.display()
            );
            info(&format!("created {} sample images in {}", created, folder.display()));
            true
        }
        Err(err) => {
            println!("{err}");
            error(&err.to_string());
            false
        }
    }
}

#[cfg(feature = "sample-images")]
fn write_samples(folder: &Path) -> Result<usize, SeedError> {
    use image::{ImageFormat, Rgb, RgbImage};

    std::fs::create_dir_all(folder).map_err(|e| SeedError::SampleImage {
        path: folder.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut created: Vec<PathBuf> = Vec::new();
    for (i, (name, rgb)) in SAMPLE_COLORS.iter().enumerate() {
        let file = format!("product{}.jpg", i + 1);
        let path = folder.join(&file);
        if path.is_file() {
            continue;
        }
        let img = RgbImage::from_pixel(SAMPLE_SIZE, SAMPLE_SIZE, Rgb(*rgb));
        if let Err(e) = img.save_with_format(&path, ImageFormat::Jpeg) {
            // all or nothing: a failed run must leave the folder as it was
            for done in &created {
                let _ = std::fs::remove_file(done);
            }
            return Err(SeedError::SampleImage {
                path,
                reason: e.to_string(),
            });
        }
        println!("Created sample image: {file} with color {name} {rgb:?}");
        created.push(path);
    }
    Ok(created.len())
}

#[cfg(not(feature = "sample-images"))]
fn write_samples(_folder: &Path) -> Result<usize, SeedError> {
    Err(SeedError::FabricationUnavailable)
}
