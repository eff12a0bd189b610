use std::path::PathBuf;
use std::sync::Arc;

use score_metrics::CollectorMetrics;
use tokio::time::sleep;
use tracing::{info, warn};
use vaultsfyi::{VaultRef, VaultsApi, VaultsFyiError};

use crate::{
    config::CollectorConfig,
    error::CollectorError,
    output::{write_csv, write_failures},
    summary::VaultSummary,
};

/// Outcome of a completed collection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionReport {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub csv_path: PathBuf,
    /// Only set when at least one vault failed.
    pub failed_path: Option<PathBuf>,
}

/// Walks the vault list one vault at a time.
///
/// A single request is in flight at any moment: pacing and rate-limit
/// backoff both suspend the whole run.
pub struct Collector {
    api: Arc<dyn VaultsApi>,
    config: CollectorConfig,
    metrics: Arc<CollectorMetrics>,
}

impl Collector {
    pub fn new(
        api: Arc<dyn VaultsApi>,
        config: CollectorConfig,
        metrics: Arc<CollectorMetrics>,
    ) -> Self {
        Self {
            api,
            config,
            metrics,
        }
    }

    pub async fn run(&self) -> Result<CollectionReport, CollectorError> {
        info!("Fetching list of vaults...");
        let vaults = self
            .api
            .list_vaults()
            .await
            .map_err(CollectorError::ListVaults)?;
        let total = vaults.len();
        info!(total, "Found vaults");

        let mut summaries = Vec::with_capacity(total);
        let mut failed = Vec::new();

        for (idx, vault) in vaults.into_iter().enumerate() {
            if idx > 0 {
                sleep(self.config.request_interval).await;
            }

            info!("Fetching details for vault {}/{}", idx + 1, total);
            match self.fetch_detail(&vault).await {
                Some(summary) => summaries.push(summary),
                None => failed.push(vault),
            }
        }

        let csv_path = self.config.csv_path();
        write_csv(&csv_path, &summaries).await?;
        info!(
            path = %csv_path.display(),
            vaults = summaries.len(),
            "Vault data saved",
        );

        let failed_path = self.config.failed_path();
        let failed_path = if write_failures(&failed_path, &failed).await? {
            warn!(
                path = %failed_path.display(),
                vaults = failed.len(),
                "Failed vaults saved",
            );
            Some(failed_path)
        } else {
            None
        };

        Ok(CollectionReport {
            total,
            succeeded: summaries.len(),
            failed: failed.len(),
            csv_path,
            failed_path,
        })
    }

    /// Fetches and normalizes one vault, retrying on 429 up to `max_retries` times.
    ///
    /// Never fails the run: every error is logged and reported as `None`.
    pub async fn fetch_detail(&self, vault: &VaultRef) -> Option<VaultSummary> {
        let mut attempt = 0;
        let result = loop {
            match self.api.get_vault_detail(vault).await {
                Err(VaultsFyiError::RateLimited) if attempt < self.config.max_retries => {
                    self.metrics.record_rate_limited(attempt);
                    info!(
                        vault = vault.display_address(),
                        attempt,
                        backoff_secs = self.config.rate_limit_backoff.as_secs(),
                        "Rate limited, waiting before retrying",
                    );
                    sleep(self.config.rate_limit_backoff).await;
                    attempt += 1;
                }
                other => break other,
            }
        };

        match result {
            Ok(detail) => {
                self.metrics.record_detail(true);
                Some(VaultSummary::from(detail))
            }
            Err(err) => {
                self.metrics.record_detail(false);
                warn!(
                    vault = vault.display_address(),
                    attempt,
                    error = %err,
                    "Error fetching vault",
                );
                None
            }
        }
    }
}
