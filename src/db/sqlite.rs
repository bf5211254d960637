use std::path::Path;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

use super::{VerifiedProduct, SCHEMA};
use crate::generator::OutputDocument;
use crate::logger::debug;

/// A SQLite database prepared to accept the MySQL-flavoured seed script.
pub struct SeedDb {
    conn: Connection,
}

impl SeedDb {
    pub fn open_in_memory() -> Result<Self> {
        Self::prepare(Connection::open_in_memory()?)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        Self::prepare(conn)
    }

    fn prepare(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        // MySQL builtin; SQLite needs it registered to run base64 scripts.
        conn.create_scalar_function(
            "FROM_BASE64",
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let Some(text) = ctx.get::<Option<String>>(0)? else {
                    return Ok(None);
                };
                STANDARD
                    .decode(text.as_bytes())
                    .map(Some)
                    .map_err(|e| rusqlite::Error::UserFunctionError(Box::new(e)))
            },
        )?;
        debug("sqlite: schema ready");
        Ok(Self { conn })
    }

    /// Run the script and return what its check query reports.
    pub fn apply(&self, document: &OutputDocument) -> Result<Vec<VerifiedProduct>> {
        self.conn
            .execute_batch(&document.body())
            .context("seed script failed under sqlite")?;

        let mut stmt = self.conn.prepare(document.verify_query())?;
        let rows = stmt.query_map([], |row| {
            Ok(VerifiedProduct {
                product_id: row.get(0)?,
                product_name: row.get(1)?,
                image_size_bytes: row.get(2)?,
            })
        })?;
        let mut products = Vec::new();
        for r in rows {
            products.push(r?);
        }
        products.sort_by_key(|p| p.product_id);
        Ok(products)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

/// Load `document` into a throwaway in-memory database.
pub fn verify(document: &OutputDocument) -> Result<Vec<VerifiedProduct>> {
    SeedDb::open_in_memory()?.apply(document)
}
