use std::path::Path;

use vaultsfyi::VaultRef;

use crate::{
    error::CollectorError,
    summary::{CSV_HEADERS, VaultSummary},
};

/// Quotes a field and doubles embedded quotes (RFC 4180).
fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Header row followed by one fully quoted row per summary, `\n`-joined.
pub fn render_csv(summaries: &[VaultSummary]) -> String {
    let mut lines = Vec::with_capacity(summaries.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    lines.extend(summaries.iter().map(|summary| {
        summary
            .fields()
            .iter()
            .map(|field| quote_field(field))
            .collect::<Vec<_>>()
            .join(",")
    }));
    lines.join("\n")
}

pub async fn write_csv(path: &Path, summaries: &[VaultSummary]) -> Result<(), CollectorError> {
    write(path, render_csv(summaries)).await
}

/// Writes the failed references as a pretty JSON array.
///
/// Returns `false` without touching the filesystem when there is nothing to write.
pub async fn write_failures(path: &Path, failures: &[VaultRef]) -> Result<bool, CollectorError> {
    if failures.is_empty() {
        return Ok(false);
    }

    let json = serde_json::to_string_pretty(failures)?;
    write(path, json).await?;
    Ok(true)
}

async fn write(path: &Path, contents: String) -> Result<(), CollectorError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| CollectorError::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summary(name: &str) -> VaultSummary {
        VaultSummary {
            name: name.into(),
            token: "USDC".into(),
            protocol_tvl: "10".into(),
            pool_tvl: "10".into(),
            network: "mainnet".into(),
            address: "0xabc".into(),
        }
    }

    #[test]
    fn renders_header_only_when_empty() {
        assert_eq!(
            render_csv(&[]),
            "name,token,protocol_tvl,pool_tvl,network,address"
        );
    }

    #[test]
    fn quotes_every_field() {
        let csv = render_csv(&[summary("Alpha")]);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            r#""Alpha","USDC","10","10","mainnet","0xabc""#
        );
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn escapes_quotes_and_commas() {
        let csv = render_csv(&[summary(r#"The "Best", Vault"#)]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with(r#""The ""Best"", Vault","#));
    }

    #[tokio::test]
    async fn skips_empty_failure_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("failed_vaults.json");

        assert!(!write_failures(&path, &[]).await.unwrap());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn writes_failures_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("failed_vaults.json");
        let failed = vec![VaultRef(json!({"network": "base", "address": "0x2", "apy": 1.5}))];

        assert!(write_failures(&path, &failed).await.unwrap());

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  {"));
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, json!([{"network": "base", "address": "0x2", "apy": 1.5}]));
    }
}
