use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::ValueEnum;
use serde::Deserialize;

/// How image bytes are embedded in the generated script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// `X'..'` hex blob literal
    Hex,
    /// `FROM_BASE64('..')` call
    #[default]
    Base64,
}

/// Value written into the `product_img` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlLiteral {
    Null,
    Hex(String),
    Base64(String),
}

impl SqlLiteral {
    pub fn encode(bytes: &[u8], encoding: Encoding) -> Self {
        match encoding {
            Encoding::Hex => SqlLiteral::Hex(hex::encode(bytes)),
            Encoding::Base64 => SqlLiteral::Base64(STANDARD.encode(bytes)),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlLiteral::Null)
    }
}

impl fmt::Display for SqlLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlLiteral::Null => f.write_str("NULL"),
            SqlLiteral::Hex(digits) => write!(f, "X'{digits}'"),
            SqlLiteral::Base64(data) => write!(f, "FROM_BASE64('{data}')"),
        }
    }
}

/// Quote text as a SQL string literal, doubling embedded single quotes.
pub fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}
