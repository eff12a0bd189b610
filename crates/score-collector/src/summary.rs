use serde_json::Value;
use vaultsfyi::VaultDetail;

/// Column order of `vault_data.csv`.
pub const CSV_HEADERS: [&str; 6] = [
    "name",
    "token",
    "protocol_tvl",
    "pool_tvl",
    "network",
    "address",
];

const MISSING_TOKEN: &str = "N/A";
const MISSING_TVL: &str = "0";

/// Flattened view of a vault detail, one CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultSummary {
    pub name: String,
    pub token: String,
    pub protocol_tvl: String,
    pub pool_tvl: String,
    pub network: String,
    pub address: String,
}

impl VaultSummary {
    /// Fields in `CSV_HEADERS` order.
    pub fn fields(&self) -> [&str; 6] {
        [
            &self.name,
            &self.token,
            &self.protocol_tvl,
            &self.pool_tvl,
            &self.network,
            &self.address,
        ]
    }
}

impl From<VaultDetail> for VaultSummary {
    fn from(detail: VaultDetail) -> Self {
        let token = detail
            .token
            .and_then(|token| token.symbol)
            .filter(|symbol| !symbol.is_empty())
            .unwrap_or_else(|| MISSING_TOKEN.to_string());

        let tvl = detail
            .tvl_details
            .and_then(|tvl| tvl.tvl_usd)
            .and_then(|value| json_scalar_to_string(&value))
            .unwrap_or_else(|| MISSING_TVL.to_string());

        Self {
            name: detail.name.unwrap_or_default(),
            token,
            // The API only exposes a single TVL figure.
            protocol_tvl: tvl.clone(),
            pool_tvl: tvl,
            network: detail.network.unwrap_or_default(),
            address: detail.address.unwrap_or_default(),
        }
    }
}

fn json_scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail(value: Value) -> VaultDetail {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn normalizes_complete_detail() {
        let summary = VaultSummary::from(detail(json!({
            "name": "Alpha Vault",
            "network": "mainnet",
            "address": "0xabc",
            "token": {"symbol": "USDC"},
            "tvlDetails": {"tvlUsd": 1_500_000.25}
        })));

        assert_eq!(
            summary,
            VaultSummary {
                name: "Alpha Vault".into(),
                token: "USDC".into(),
                protocol_tvl: "1500000.25".into(),
                pool_tvl: "1500000.25".into(),
                network: "mainnet".into(),
                address: "0xabc".into(),
            }
        );
    }

    #[test]
    fn defaults_missing_nested_fields() {
        let summary = VaultSummary::from(detail(json!({
            "name": "Bare",
            "network": "base",
            "address": "0x1",
            "token": {}
        })));

        assert_eq!(summary.token, "N/A");
        assert_eq!(summary.protocol_tvl, "0");
        assert_eq!(summary.pool_tvl, "0");
    }

    #[test]
    fn keeps_string_tvl_verbatim() {
        let summary = VaultSummary::from(detail(json!({
            "tvlDetails": {"tvlUsd": "42.10"}
        })));

        assert_eq!(summary.protocol_tvl, "42.10");
        assert_eq!(summary.name, "");
        assert_eq!(summary.fields()[5], "");
    }
}
