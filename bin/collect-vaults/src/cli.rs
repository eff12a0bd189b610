use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CollectCli {
    /// vaults.fyi API key
    #[arg(long, env = "VAULTS_FYI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// vaults.fyi API base url
    #[arg(long, env = "VAULTS_FYI_API_URL", default_value = vaultsfyi::client::DEFAULT_API_URL)]
    pub api_base_url: String,

    /// Directory receiving vault_data.csv and failed_vaults.json
    #[arg(long, env = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Pause between two detail requests, in milliseconds
    #[arg(long, env = "REQUEST_INTERVAL_MS", default_value = "600")]
    pub request_interval_ms: u64,

    /// Wait after a 429 before retrying, in seconds
    #[arg(long, env = "RATE_LIMIT_BACKOFF_SECS", default_value = "60")]
    pub rate_limit_backoff_secs: u64,

    /// Retries allowed per vault when rate limited
    #[arg(long, env = "MAX_RETRIES", default_value = "3")]
    pub max_retries: u32,

    /// OTEL collector endpoint
    #[arg(long, env = "OTEL_COLLECTOR_ENDPOINT")]
    pub otel_collector_endpoint: Option<String>,
}
