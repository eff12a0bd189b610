use std::time::Duration;

use reqwest::{Client, StatusCode, header::ACCEPT};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    dto::{VaultDetail, VaultRef},
    error::VaultsFyiError,
    traits::VaultsApi,
};

pub const DEFAULT_API_URL: &str = "https://api.vaults.fyi/v1";

const API_KEY_HEADER: &str = "x-api-key";

pub struct VaultsFyiClient {
    http_client: Client,
    base_url: Url,
    api_key: String,
}

impl VaultsFyiClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, VaultsFyiError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(VaultsFyiError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            http_client: http_client()?,
            base_url,
            api_key: api_key.to_owned(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, VaultsFyiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| VaultsFyiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, VaultsFyiError> {
        let response = self
            .http_client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(VaultsFyiError::RateLimited);
        }
        if !status.is_success() {
            return Err(VaultsFyiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait::async_trait]
impl VaultsApi for VaultsFyiClient {
    async fn list_vaults(&self) -> Result<Vec<VaultRef>, VaultsFyiError> {
        let url = self.endpoint(&["vaults"])?;
        self.get_json(url).await
    }

    async fn get_vault_detail(&self, vault: &VaultRef) -> Result<VaultDetail, VaultsFyiError> {
        let network = vault
            .network()
            .ok_or(VaultsFyiError::MissingField("network"))?;
        let address = vault
            .address()
            .ok_or(VaultsFyiError::MissingField("address"))?;

        let url = self.endpoint(&["vaults", network, address])?;
        self.get_json(url).await
    }
}

pub fn http_client() -> Result<Client, VaultsFyiError> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            VaultsFyiError::HttpError(e)
        })
}
