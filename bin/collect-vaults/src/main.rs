mod cli;

use std::sync::Arc;
use std::time::Duration;

use crate::cli::CollectCli;
use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use pragma_common::telemetry::init_telemetry;

use score_collector::{Collector, CollectorConfig};
use score_metrics::MetricsRegistry;
use vaultsfyi::VaultsFyiClient;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let CollectCli {
        api_key,
        api_base_url,
        output_dir,
        request_interval_ms,
        rate_limit_backoff_secs,
        max_retries,
        otel_collector_endpoint,
    } = CollectCli::parse();

    let app_name = "vault_collector";
    if let Err(e) = init_telemetry(app_name, otel_collector_endpoint) {
        panic!("Could not init telemetry: {e}");
    }

    let client = VaultsFyiClient::new(&api_base_url, &api_key)?;
    let config = CollectorConfig {
        request_interval: Duration::from_millis(request_interval_ms),
        rate_limit_backoff: Duration::from_secs(rate_limit_backoff_secs),
        max_retries,
        output_dir,
    };
    let metrics = MetricsRegistry::new();

    let collector = Collector::new(Arc::new(client), config, metrics.collector.clone());
    match collector.run().await {
        Ok(report) => {
            tracing::info!(
                total = report.total,
                succeeded = report.succeeded,
                failed = report.failed,
                csv = %report.csv_path.display(),
                "Collection finished",
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Collection aborted");
            Err(e.into())
        }
    }
}
