pub mod auth;
pub mod client;
pub mod credentials;
pub mod error;
pub mod lookup;
pub mod source;

pub use client::{SheetsClient, SheetsConfig};
pub use credentials::ServiceAccountKey;
pub use error::{CredentialsError, SheetsError};
pub use lookup::{AddressMatch, ScoreResult, VaultRow, find_match, to_result};
pub use source::{CachedTableSource, TableSource};
