mod sqlite;

pub use sqlite::{verify, SeedDb};

/// Tables the seed script writes to, in the shape the web application uses.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS mstproducttype (
    producttype_id INTEGER PRIMARY KEY,
    producttype_name TEXT NOT NULL,
    status TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS mstproduct (
    product_id INTEGER PRIMARY KEY,
    product_name TEXT NOT NULL,
    product_description TEXT,
    product_img BLOB,
    producttype_id INTEGER NOT NULL REFERENCES mstproducttype(producttype_id),
    status TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS trproductorder (
    productorder_id INTEGER PRIMARY KEY,
    product_id INTEGER NOT NULL REFERENCES mstproduct(product_id),
    user_name TEXT NOT NULL,
    order_quantity INTEGER NOT NULL,
    status TEXT NOT NULL
);
"#;

/// One row of the script's closing check query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedProduct {
    pub product_id: i64,
    pub product_name: String,
    pub image_size_bytes: Option<i64>,
}
