use anyhow::Result;

use catalog_seed::db::SeedDb;
use catalog_seed::encode::Encoding;
use catalog_seed::generator::{build_document, resolve_images, DEFAULT_IMAGES_FOLDER};

fn main() -> Result<()> {
    let path = std::path::Path::new("dev/sqlite");
    std::fs::create_dir_all(path)?;
    let db_path = path.join("catalog.db");

    let document = build_document(&resolve_images(
        std::path::Path::new(DEFAULT_IMAGES_FOLDER),
        Encoding::Base64,
    ));
    let db = SeedDb::open(&db_path)?;
    let rows = db.apply(&document)?;

    let with_images = rows.iter().filter(|r| r.image_size_bytes.is_some()).count();
    println!(
        "Seeded SQLite at {} ({} products, {} with images)",
        db_path.display(),
        rows.len(),
        with_images
    );
    Ok(())
}
