use std::path::PathBuf;

use clap::Parser;
use score_sheets::AddressMatch;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct ScoreCli {
    /// API port
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Identifier of the Google spreadsheet holding the vault scores
    #[arg(long, env = "SPREADSHEET_ID")]
    pub spreadsheet_id: String,

    /// Service-account key as inline JSON
    #[arg(long, env = "GOOGLE_CREDENTIALS", hide_env_values = true)]
    pub google_credentials: Option<String>,

    /// Path to a service-account key JSON file, used when no inline key is set
    #[arg(long, env = "GOOGLE_CREDENTIALS_FILE")]
    pub google_credentials_file: Option<PathBuf>,

    /// Address comparison: exact, trimmed or case-insensitive
    #[arg(long, env = "ADDRESS_MATCH", default_value = "trimmed")]
    pub address_match: AddressMatch,

    /// Keep the loaded table for this many seconds (0 disables caching)
    #[arg(long, env = "TABLE_CACHE_TTL_SECS", default_value = "0")]
    pub table_cache_ttl_secs: u64,

    /// Google Sheets API base url
    #[arg(long, env = "SHEETS_API_URL", default_value = score_sheets::client::DEFAULT_SHEETS_API_URL)]
    pub sheets_api_url: String,

    /// OTEL collector endpoint
    #[arg(long, env = "OTEL_COLLECTOR_ENDPOINT")]
    pub otel_collector_endpoint: Option<String>,
}
