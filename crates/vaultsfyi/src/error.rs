use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaultsFyiError {
    #[error("Rate limited by vaults.fyi")]
    RateLimited,

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid API url: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("API url cannot be used as a base: {0}")]
    InvalidBaseUrl(String),

    #[error("Vault entry is missing `{0}`")]
    MissingField(&'static str),
}

