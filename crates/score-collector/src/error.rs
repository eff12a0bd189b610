use std::path::PathBuf;

use thiserror::Error;
use vaultsfyi::VaultsFyiError;

#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("Failed to list vaults: {0}")]
    ListVaults(#[source] VaultsFyiError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize failed vaults: {0}")]
    Json(#[from] serde_json::Error),
}
