use std::sync::Arc;

use opentelemetry::{KeyValue, global, metrics::Counter};

const METER_NAME: &str = "vault-score";

#[derive(Debug)]
pub struct MetricsRegistry {
    pub lookups: Arc<LookupMetrics>,
    pub collector: Arc<CollectorMetrics>,
}

impl MetricsRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            lookups: LookupMetrics::new(),
            collector: CollectorMetrics::new(),
        })
    }
}

#[derive(Debug)]
pub struct LookupMetrics {
    lookups: Counter<u64>,
}

impl LookupMetrics {
    fn new() -> Arc<Self> {
        let meter = global::meter(METER_NAME);
        let lookups = meter
            .u64_counter("vault_score_lookups_total")
            .with_description("Number of vault score lookups by outcome")
            .with_unit("count")
            .init();

        Arc::new(Self { lookups })
    }

    pub fn record_lookup(&self, outcome: LookupOutcome<'_>) {
        self.lookups.add(
            1,
            &[
                KeyValue::new("network", outcome.network_label()),
                KeyValue::new("outcome", outcome.as_str().to_string()),
            ],
        );
    }
}

const UNKNOWN_NETWORK: &str = "unknown";

/// Result of one score lookup.
///
/// Only a found lookup carries a network, taken from the matched sheet row,
/// so request paths never become attribute values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupOutcome<'a> {
    Found { network: &'a str },
    NotFound,
    Error,
}

impl LookupOutcome<'_> {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Found { .. } => "found",
            Self::NotFound => "not_found",
            Self::Error => "error",
        }
    }

    pub fn network_label(self) -> String {
        match self {
            Self::Found { network } if !network.trim().is_empty() => {
                network.trim().to_lowercase()
            }
            _ => UNKNOWN_NETWORK.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct CollectorMetrics {
    details_fetched: Counter<u64>,
    rate_limited: Counter<u64>,
}

impl CollectorMetrics {
    fn new() -> Arc<Self> {
        let meter = global::meter(METER_NAME);
        let details_fetched = meter
            .u64_counter("vault_details_fetched_total")
            .with_description("Number of vault detail fetches, by final outcome")
            .with_unit("count")
            .init();

        let rate_limited = meter
            .u64_counter("vault_detail_rate_limited_total")
            .with_description("Number of 429 responses received while fetching vault details")
            .with_unit("count")
            .init();

        Arc::new(Self {
            details_fetched,
            rate_limited,
        })
    }

    pub fn record_detail(&self, succeeded: bool) {
        let outcome = if succeeded { "success" } else { "failed" };
        self.details_fetched
            .add(1, &[KeyValue::new("outcome", outcome.to_string())]);
    }

    pub fn record_rate_limited(&self, attempt: u32) {
        self.rate_limited
            .add(1, &[KeyValue::new("attempt", i64::from(attempt))]);
    }
}
