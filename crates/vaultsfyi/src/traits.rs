use crate::{
    dto::{VaultDetail, VaultRef},
    error::VaultsFyiError,
};

/// Read access to the vaults.fyi catalogue.
///
/// Every call is a single HTTP round-trip: retries and pacing are the
/// caller's business.
#[async_trait::async_trait]
pub trait VaultsApi: Send + Sync {
    async fn list_vaults(&self) -> Result<Vec<VaultRef>, VaultsFyiError>;

    async fn get_vault_detail(&self, vault: &VaultRef) -> Result<VaultDetail, VaultsFyiError>;
}
