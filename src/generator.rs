use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::asset::{find_image, has_any_image, read_image};
use crate::catalog::{ProductRecord, ACTIVE_STATUS, ORDERS, PRODUCTS, PRODUCT_TYPES};
use crate::encode::{quote, Encoding, SqlLiteral};
use crate::fabricate::create_sample_images;
use crate::logger::{debug, info, warn};

pub const DEFAULT_IMAGES_FOLDER: &str = "images";
pub const DEFAULT_OUTPUT_FILE: &str = "db-init-with-real-images.sql";

pub const VERIFY_QUERY: &str =
    "SELECT product_id, product_name, LENGTH(product_img) as image_size_bytes FROM mstproduct;";

const PRODUCT_COLUMNS: &str = "INSERT INTO mstproduct (product_id, product_name, product_description, product_img, producttype_id, status)";

/// A catalog product paired with the literal for its image column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImage {
    pub product: ProductRecord,
    pub source: Option<PathBuf>,
    pub literal: SqlLiteral,
}

/// The generated seed script, kept as lines until written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    body: Vec<String>,
}

impl OutputDocument {
    /// Statements that modify data; everything except the trailing check query.
    pub fn body(&self) -> String {
        self.body.join("\n")
    }

    pub fn verify_query(&self) -> &'static str {
        VERIFY_QUERY
    }

    pub fn render(&self) -> String {
        let mut lines = self.body.clone();
        lines.push("-- Verify data".to_string());
        lines.push(VERIFY_QUERY.to_string());
        lines.join("\n")
    }
}

/// Build the image literal for one file. Unreadable files degrade to NULL.
pub fn literal_for(path: &Path, encoding: Encoding) -> SqlLiteral {
    match read_image(path) {
        Ok(bytes) => {
            debug(&format!("{}: {} bytes", path.display(), bytes.len()));
            SqlLiteral::encode(&bytes, encoding)
        }
        Err(err) => {
            println!("Error reading {}: {}", path.display(), err);
            warn(&err.to_string());
            SqlLiteral::Null
        }
    }
}

/// Look up and encode the image of every catalog product, in id order.
pub fn resolve_images(images_folder: &Path, encoding: Encoding) -> Vec<ProductImage> {
    PRODUCTS
        .iter()
        .map(|product| match find_image(images_folder, product.id) {
            Some(path) => {
                println!(
                    "Processing product {}: {} with image {}",
                    product.id,
                    product.name,
                    path.display()
                );
                ProductImage {
                    product: *product,
                    literal: literal_for(&path, encoding),
                    source: Some(path),
                }
            }
            None => {
                println!("Warning: No image found for product {}: {}", product.id, product.name);
                warn(&format!("no image for product {}", product.id));
                ProductImage {
                    product: *product,
                    source: None,
                    literal: SqlLiteral::Null,
                }
            }
        })
        .collect()
}

fn push_rows(lines: &mut Vec<String>, rows: Vec<String>) {
    let last = rows.len().saturating_sub(1);
    for (i, row) in rows.into_iter().enumerate() {
        let end = if i == last { ";" } else { "," };
        lines.push(format!("{row}{end}"));
    }
}

pub fn build_document(products: &[ProductImage]) -> OutputDocument {
    let status = quote(ACTIVE_STATUS);
    let mut lines: Vec<String> = vec![
        "-- Generated SQL with real image data".into(),
        "-- Images are stored as BLOB (binary data)".into(),
        String::new(),
        "-- Clear existing data".into(),
        "DELETE FROM trproductorder;".into(),
        "DELETE FROM mstproduct;".into(),
        "DELETE FROM mstproducttype;".into(),
        String::new(),
        "-- Insert Product Types".into(),
        "INSERT INTO mstproducttype (producttype_id, producttype_name, status) VALUES".into(),
    ];
    push_rows(
        &mut lines,
        PRODUCT_TYPES
            .iter()
            .map(|t| format!("({}, {}, {})", t.id, quote(t.name), status))
            .collect(),
    );
    lines.push(String::new());

    lines.push("-- Insert Products with images".into());
    for entry in products {
        let p = &entry.product;
        lines.push(PRODUCT_COLUMNS.into());
        lines.push(format!(
            "VALUES ({}, {}, {}, {}, {}, {});",
            p.id,
            quote(p.name),
            quote(p.description),
            entry.literal,
            p.category_id,
            status
        ));
        lines.push(String::new());
    }

    lines.push("-- Insert some orders".into());
    lines.push(
        "INSERT INTO trproductorder (productorder_id, product_id, user_name, order_quantity, status) VALUES"
            .into(),
    );
    push_rows(
        &mut lines,
        ORDERS
            .iter()
            .map(|o| {
                format!(
                    "({}, {}, {}, {}, {})",
                    o.id,
                    o.product_id,
                    quote(o.user_name),
                    o.quantity,
                    status
                )
            })
            .collect(),
    );
    lines.push(String::new());

    OutputDocument { body: lines }
}

/// Where the images for a run come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// The folder already held at least one product image.
    Existing,
    /// Placeholders were created for the run.
    Fabricated,
    /// No images; every product gets NULL.
    Missing,
}

/// Reuse the images in `folder`, or fabricate placeholders when it has none
/// and `fabricate` is set.
pub fn prepare_images(folder: &Path, fabricate: bool) -> ImageSource {
    if has_any_image(folder) {
        println!("Using existing images from '{}' folder...", folder.display());
        return ImageSource::Existing;
    }
    if !fabricate {
        println!("No images found. Generating SQL without images...");
        return ImageSource::Missing;
    }
    println!("No images found. Creating sample images...");
    if create_sample_images(folder) {
        println!("\nGenerating SQL with sample images...");
        ImageSource::Fabricated
    } else {
        println!("\nGenerating SQL without images...");
        ImageSource::Missing
    }
}

/// Generate the seed script from the images in `images_folder` and write it
/// to `output_file`, replacing any previous content.
pub fn generate(images_folder: &Path, output_file: &Path, encoding: Encoding) -> Result<PathBuf> {
    generate_document(images_folder, output_file, encoding)?;
    Ok(output_file.to_path_buf())
}

/// Same as [`generate`], handing back the written document.
pub fn generate_document(
    images_folder: &Path,
    output_file: &Path,
    encoding: Encoding,
) -> Result<OutputDocument> {
    info(&format!(
        "generating {} from {} ({:?})",
        output_file.display(),
        images_folder.display(),
        encoding
    ));
    if !images_folder.exists() {
        println!("Warning: Images folder '{}' not found.", images_folder.display());
        println!("Creating sample products without images...");
        warn(&format!("images folder {} missing", images_folder.display()));
    }

    let products = resolve_images(images_folder, encoding);
    let document = build_document(&products);
    fs::write(output_file, document.render())
        .with_context(|| format!("failed to write {}", output_file.display()))?;

    let embedded = products.iter().filter(|p| !p.literal.is_null()).count();
    info(&format!("wrote {} ({} images embedded)", output_file.display(), embedded));
    println!("\nSQL file generated: {}", output_file.display());
    println!("Total products: {}", PRODUCTS.len());
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    const PNG_BYTES: [u8; 8] = [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

    fn values_line(doc: &str, id: i64) -> &str {
        let prefix = format!("VALUES ({id}, ");
        let mut found = doc.lines().filter(|l| l.starts_with(&prefix));
        let line = found.next().expect("product row present");
        assert!(found.next().is_none(), "duplicate row for product {id}");
        line
    }

    #[test]
    fn one_insert_per_product_in_id_order() {
        let dir = tempfile::tempdir().unwrap();
        let doc = build_document(&resolve_images(dir.path(), Encoding::Base64)).render();

        assert_eq!(doc.matches(PRODUCT_COLUMNS).count(), PRODUCTS.len());
        let positions: Vec<usize> = PRODUCTS
            .iter()
            .map(|p| doc.find(values_line(&doc, p.id)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn missing_images_become_null() {
        let dir = tempfile::tempdir().unwrap();
        let doc = build_document(&resolve_images(dir.path(), Encoding::Hex)).render();
        for p in PRODUCTS {
            let expected = format!(", NULL, {}, '0');", p.category_id);
            assert!(values_line(&doc, p.id).ends_with(&expected));
        }
    }

    #[test]
    fn only_product3_png_gets_base64_literal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("product3.png"), PNG_BYTES).unwrap();

        let products = resolve_images(dir.path(), Encoding::Base64);
        for entry in &products {
            if entry.product.id == 3 {
                let SqlLiteral::Base64(data) = &entry.literal else {
                    panic!("expected base64 literal, got {:?}", entry.literal);
                };
                assert_eq!(STANDARD.decode(data).unwrap(), PNG_BYTES);
                assert_eq!(entry.source.as_deref(), Some(dir.path().join("product3.png").as_path()));
            } else {
                assert_eq!(entry.literal, SqlLiteral::Null);
            }
        }

        let doc = build_document(&products).render();
        let row = values_line(&doc, 3);
        assert!(row.contains(&format!(", FROM_BASE64('{}'), 1, '0');", STANDARD.encode(PNG_BYTES))));
    }

    #[test]
    fn hex_mode_embeds_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let bytes: Vec<u8> = (0..=255u8).collect();
        fs::write(dir.path().join("product7.gif"), &bytes).unwrap();

        let products = resolve_images(dir.path(), Encoding::Hex);
        let SqlLiteral::Hex(digits) = &products[6].literal else {
            panic!("expected hex literal");
        };
        assert_eq!(hex::decode(digits).unwrap(), bytes);
    }

    #[test]
    fn unreadable_image_falls_back_to_null() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            literal_for(&dir.path().join("product1.jpg"), Encoding::Base64),
            SqlLiteral::Null
        );
    }

    #[test]
    fn document_sections_are_in_dependency_order() {
        let dir = tempfile::tempdir().unwrap();
        let doc = build_document(&resolve_images(dir.path(), Encoding::Base64)).render();
        let order = [
            "DELETE FROM trproductorder;",
            "DELETE FROM mstproduct;",
            "DELETE FROM mstproducttype;",
            "INSERT INTO mstproducttype",
            "(4, 'Sách', '0');",
            PRODUCT_COLUMNS,
            "INSERT INTO trproductorder",
            "(8, 2, 'admin', 1, '0');",
            VERIFY_QUERY,
        ];
        let positions: Vec<usize> = order.iter().map(|s| doc.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert!(doc.ends_with(VERIFY_QUERY));
        assert_eq!(doc.matches(VERIFY_QUERY).count(), 1);
    }

    #[test]
    fn generate_overwrites_output_and_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let images = dir.path().join("images");
        fs::create_dir(&images).unwrap();
        fs::write(images.join("product1.jpg"), b"\xff\xd8\xff\xe0jpeg").unwrap();
        let out = dir.path().join("seed.sql");
        fs::write(&out, "stale content that is much longer than nothing").unwrap();

        let first = generate(&images, &out, Encoding::Base64).unwrap();
        assert_eq!(first, out);
        let a = fs::read_to_string(&out).unwrap();
        assert!(!a.contains("stale"));

        generate(&images, &out, Encoding::Base64).unwrap();
        let b = fs::read_to_string(&out).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generate_without_folder_writes_all_null() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("seed.sql");
        generate(&dir.path().join("missing"), &out, Encoding::Hex).unwrap();
        let doc = fs::read_to_string(&out).unwrap();
        assert_eq!(doc.matches(", NULL, ").count(), PRODUCTS.len());
        assert!(!doc.contains("X'"));
    }

    #[test]
    fn unwritable_output_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = generate(dir.path(), dir.path(), Encoding::Base64).unwrap_err();
        assert!(err.to_string().contains("failed to write"));
    }

    #[test]
    fn body_excludes_verify_query() {
        let dir = tempfile::tempdir().unwrap();
        let doc = build_document(&resolve_images(dir.path(), Encoding::Base64));
        assert!(!doc.body().contains(doc.verify_query()));
        assert!(doc.render().starts_with(&doc.body()));
    }

    fn count_files(folder: &Path) -> usize {
        fs::read_dir(folder).map(|d| d.count()).unwrap_or(0)
    }

    #[cfg(feature = "sample-images")]
    #[test]
    fn absent_folder_is_fabricated_then_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let images = dir.path().join("images");
        let out = dir.path().join("seed.sql");

        assert_eq!(prepare_images(&images, true), ImageSource::Fabricated);
        assert_eq!(count_files(&images), PRODUCTS.len());

        let doc = generate_document(&images, &out, Encoding::Base64).unwrap().render();
        for p in PRODUCTS {
            assert!(values_line(&doc, p.id).contains(", FROM_BASE64('"), "product {}", p.id);
        }
        assert_eq!(doc.matches(", NULL, ").count(), 0);

        // second run sees the placeholders and leaves them alone
        assert_eq!(prepare_images(&images, true), ImageSource::Existing);
        let again = generate_document(&images, &out, Encoding::Base64).unwrap().render();
        assert_eq!(doc, again);
    }

    #[test]
    fn existing_png_prevents_fabrication() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("product3.png"), PNG_BYTES).unwrap();

        assert_eq!(prepare_images(dir.path(), true), ImageSource::Existing);
        assert_eq!(count_files(dir.path()), 1);

        let out = dir.path().join("seed.sql");
        let doc = generate_document(dir.path(), &out, Encoding::Base64).unwrap().render();
        assert!(values_line(&doc, 3).contains(", FROM_BASE64('"));
        assert_eq!(doc.matches(", NULL, ").count(), PRODUCTS.len() - 1);
    }

    #[test]
    fn fabrication_disabled_leaves_all_null() {
        let dir = tempfile::tempdir().unwrap();
        let images = dir.path().join("images");

        assert_eq!(prepare_images(&images, false), ImageSource::Missing);
        assert!(!images.exists());

        let out = dir.path().join("seed.sql");
        let doc = generate_document(&images, &out, Encoding::Hex).unwrap().render();
        assert_eq!(doc.matches(", NULL, ").count(), PRODUCTS.len());
    }
}
