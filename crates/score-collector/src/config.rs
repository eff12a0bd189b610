use std::path::PathBuf;
use std::time::Duration;

pub const CSV_FILE_NAME: &str = "vault_data.csv";
pub const FAILED_FILE_NAME: &str = "failed_vaults.json";

/// Runtime behaviour of a collection run.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Pause between two consecutive detail fetches (~100 requests/minute).
    pub request_interval: Duration,
    /// Wait applied after a 429 before retrying the same vault.
    pub rate_limit_backoff: Duration,
    /// Retries allowed after the first attempt when rate limited.
    pub max_retries: u32,
    pub output_dir: PathBuf,
}

impl CollectorConfig {
    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(CSV_FILE_NAME)
    }

    pub fn failed_path(&self) -> PathBuf {
        self.output_dir.join(FAILED_FILE_NAME)
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            request_interval: Duration::from_millis(600),
            rate_limit_backoff: Duration::from_secs(60),
            max_retries: 3,
            output_dir: PathBuf::from("."),
        }
    }
}
