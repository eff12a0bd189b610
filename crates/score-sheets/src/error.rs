use std::path::PathBuf;

use thiserror::Error;

/// Problems with the service-account credential.
///
/// Cloneable so that a credential rejected at startup can be reported again
/// on every lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Google credentials are not configured")]
    Missing,

    #[error("Missing private_key in Google credentials")]
    MissingPrivateKey,

    #[error("Missing client_email in Google credentials")]
    MissingClientEmail,

    #[error("Malformed Google credentials: {0}")]
    Malformed(String),

    #[error("Failed to read Google credentials from {path}: {message}")]
    Io { path: PathBuf, message: String },
}

#[derive(Error, Debug)]
pub enum SheetsError {
    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    #[error("Failed to sign Google auth assertion: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Google token exchange failed with status {0}")]
    Token(u16),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The response body is logged, never carried in the message.
    #[error("Google Sheets request failed with status {0}")]
    Status(u16),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid Sheets API url: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Spreadsheet {0} has no sheets")]
    NoSheets(String),
}
