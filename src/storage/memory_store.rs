use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{
    entities::{NamespaceDocument, StoredValue},
    key_value::KeyValueStore,
};

/// Keeps a namespace in memory. Nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<NamespaceDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: impl IntoIterator<Item = (String, StoredValue)>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
        }
    }

    /// Copy of everything currently stored.
    pub async fn snapshot(&self) -> NamespaceDocument {
        self.values.lock().await.clone()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<StoredValue>> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: StoredValue) -> Result<()> {
        self.values.lock().await.insert(key.to_owned(), value);
        Ok(())
    }
}
