pub mod client;
pub mod dto;
pub mod error;
pub mod traits;

pub use client::VaultsFyiClient;
pub use error::VaultsFyiError;
pub use traits::VaultsApi;

pub use dto::*;
