use std::{sync::Arc, time::Duration};

use moka::future::Cache;

use crate::{error::SheetsError, lookup::VaultRow};

/// Something that can produce the full vault table on demand.
#[async_trait::async_trait]
pub trait TableSource: Send + Sync {
    async fn load_table(&self) -> Result<Vec<VaultRow>, SheetsError>;
}

/// Keeps the last loaded table for a fixed TTL.
///
/// Failed loads are not cached.
pub struct CachedTableSource {
    inner: Arc<dyn TableSource>,
    cache: Cache<(), Arc<Vec<VaultRow>>>,
}

impl CachedTableSource {
    pub fn new(inner: Arc<dyn TableSource>, ttl: Duration) -> Self {
        Self {
            inner,
            cache: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
        }
    }
}

#[async_trait::async_trait]
impl TableSource for CachedTableSource {
    async fn load_table(&self) -> Result<Vec<VaultRow>, SheetsError> {
        if let Some(cached) = self.cache.get(&()).await {
            return Ok(cached.as_ref().clone());
        }

        let rows = self.inner.load_table().await?;
        tracing::debug!(rows = rows.len(), "Caching vault table");
        self.cache.insert((), Arc::new(rows.clone())).await;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::error::CredentialsError;

    struct CountingSource {
        loads: AtomicUsize,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl TableSource for CountingSource {
        async fn load_table(&self) -> Result<Vec<VaultRow>, SheetsError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(CredentialsError::Missing.into());
            }
            Ok(vec![VaultRow(vec!["Alpha".into()])])
        }
    }

    #[tokio::test]
    async fn serves_repeated_loads_from_cache() {
        let inner = Arc::new(CountingSource {
            loads: AtomicUsize::new(0),
            fail: false,
        });
        let cached = CachedTableSource::new(inner.clone(), Duration::from_secs(60));

        assert_eq!(cached.load_table().await.unwrap().len(), 1);
        assert_eq!(cached.load_table().await.unwrap().len(), 1);
        assert_eq!(inner.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn reloads_after_ttl_expires() {
        let inner = Arc::new(CountingSource {
            loads: AtomicUsize::new(0),
            fail: false,
        });
        let cached = CachedTableSource::new(inner.clone(), Duration::from_millis(50));

        cached.load_table().await.unwrap();
        cached.load_table().await.unwrap();
        assert_eq!(inner.loads.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_millis(120)).await;
        cached.load_table().await.unwrap();
        assert_eq!(inner.loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn does_not_cache_failures() {
        let inner = Arc::new(CountingSource {
            loads: AtomicUsize::new(0),
            fail: true,
        });
        let cached = CachedTableSource::new(inner.clone(), Duration::from_secs(60));

        assert!(cached.load_table().await.is_err());
        assert!(cached.load_table().await.is_err());
        assert_eq!(inner.loads.load(Ordering::SeqCst), 2);
    }
}
