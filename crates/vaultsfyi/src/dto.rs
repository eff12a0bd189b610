use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of `GET /vaults`, kept exactly as the API returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VaultRef(pub Value);

impl VaultRef {
    pub fn network(&self) -> Option<&str> {
        self.0.get("network").and_then(Value::as_str)
    }

    pub fn address(&self) -> Option<&str> {
        self.0.get("address").and_then(Value::as_str)
    }

    /// Address used in log lines, even when the entry has none.
    pub fn display_address(&self) -> &str {
        self.address().unwrap_or("<unknown>")
    }
}

/// Subset of `GET /vaults/{network}/{address}` that we read.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultDetail {
    pub name: Option<String>,
    pub network: Option<String>,
    pub address: Option<String>,
    pub token: Option<TokenDTO>,
    pub tvl_details: Option<TvlDetailsDTO>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenDTO {
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TvlDetailsDTO {
    /// Either a JSON number or a numeric string depending on the vault.
    pub tvl_usd: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn vault_ref_reads_identity_fields() {
        let vault = VaultRef(json!({"network": "mainnet", "address": "0xabc", "apy": 4.2}));
        assert_eq!(vault.network(), Some("mainnet"));
        assert_eq!(vault.address(), Some("0xabc"));

        let broken = VaultRef(json!({"name": "no identity"}));
        assert_eq!(broken.network(), None);
        assert_eq!(broken.display_address(), "<unknown>");
    }

    #[test]
    fn vault_ref_serializes_verbatim() {
        let raw = json!({"network": "base", "address": "0x1", "extra": {"nested": [1, 2]}});
        let vault = VaultRef(raw.clone());
        assert_eq!(serde_json::to_value(&vault).unwrap(), raw);
    }

    #[test]
    fn detail_tolerates_missing_nested_fields() {
        let detail: VaultDetail =
            serde_json::from_value(json!({"name": "Alpha", "tvlDetails": {}})).unwrap();
        assert_eq!(detail.name.as_deref(), Some("Alpha"));
        assert!(detail.token.is_none());
        assert!(detail.tvl_details.unwrap().tvl_usd.is_none());
    }
}
