mod cli;

use std::sync::Arc;
use std::time::Duration;

use crate::cli::ScoreCli;
use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use pragma_common::{
    services::{Service, ServiceGroup},
    telemetry::init_telemetry,
};

use score_api::{ApiService, AppState};
use score_metrics::MetricsRegistry;
use score_sheets::{
    CachedTableSource, ServiceAccountKey, SheetsClient, SheetsConfig, TableSource,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let ScoreCli {
        port,
        spreadsheet_id,
        google_credentials,
        google_credentials_file,
        address_match,
        table_cache_ttl_secs,
        sheets_api_url,
        otel_collector_endpoint,
    } = ScoreCli::parse();

    let app_name = "vault_score_api";
    if let Err(e) = init_telemetry(app_name, otel_collector_endpoint) {
        panic!("Could not init telemetry: {e}");
    }

    let credentials = ServiceAccountKey::resolve(
        google_credentials.as_deref(),
        google_credentials_file.as_deref(),
    );
    if let Err(e) = credentials
        .as_ref()
        .map_err(Clone::clone)
        .and_then(|key| key.validate())
    {
        tracing::warn!(error = %e, "Google credentials unusable, every lookup will fail");
    }

    let sheets = SheetsClient::new(SheetsConfig {
        spreadsheet_id,
        api_base_url: sheets_api_url,
        credentials,
    })?;

    let table: Arc<dyn TableSource> = if table_cache_ttl_secs > 0 {
        tracing::info!(ttl_secs = table_cache_ttl_secs, "Vault table cache enabled");
        Arc::new(CachedTableSource::new(
            Arc::new(sheets),
            Duration::from_secs(table_cache_ttl_secs),
        ))
    } else {
        Arc::new(sheets)
    };

    tracing::info!(%address_match, "Address matching policy");

    let app_state = AppState {
        table,
        address_match,
        metrics: MetricsRegistry::new(),
    };

    let api_service = ApiService::new(app_state, "0.0.0.0", port);

    ServiceGroup::default()
        .with_critical(api_service)
        .start_and_drive_to_end()
        .await?;

    Ok(())
}
