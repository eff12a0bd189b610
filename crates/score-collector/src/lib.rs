pub mod collector;
pub mod config;
pub mod error;
pub mod output;
pub mod summary;

pub use collector::{CollectionReport, Collector};
pub use config::CollectorConfig;
pub use error::CollectorError;
pub use summary::VaultSummary;
