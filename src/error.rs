use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read image {path}: {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sample image support is not available in this build (enable the `sample-images` feature)")]
    FabricationUnavailable,

    #[error("failed to write sample image {path}: {reason}")]
    SampleImage { path: PathBuf, reason: String },

    #[error("invalid config at {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}
