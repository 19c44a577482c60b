use anyhow::Result;
use async_trait::async_trait;

use super::entities::StoredValue;

/// Interface for abstracting a single key-value namespace. Components receive a handle at
/// construction so tests can substitute [super::memory_store::MemoryStore] or a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Retrieves the value saved under `key`. A key that was never written is `Ok(None)`.
    async fn get(&self, key: &str) -> Result<Option<StoredValue>>;

    /// Saves a single value, leaving every other key as it was.
    async fn put(&self, key: &str, value: StoredValue) -> Result<()>;
}
