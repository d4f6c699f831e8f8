// TTL cache with single-flight population
use moka::future::Cache;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

/// Key to value store whose entries expire after a fixed time-to-live.
///
/// Concurrent lookups of a missing key share one population future; failed
/// populations are not stored.
#[derive(Clone)]
pub struct CacheStore<K, V> {
    entries: Cache<K, V>,
}

impl<K, V> CacheStore<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(ttl: Duration, max_entries: u64) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(max_entries)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub async fn get_or_try_populate<F, E>(&self, key: K, populate: F) -> Result<V, Arc<E>>
    where
        F: Future<Output = Result<V, E>>,
        E: Send + Sync + 'static,
    {
        self.entries.try_get_with(key, populate).await
    }
}
