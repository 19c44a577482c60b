use std::fmt::Debug;

use tracing::{debug, error, warn};

use crate::storage::{entities::StoredValue, key_value::KeyValueStore};

/// Conversion between a preference and the value kept in a namespace.
pub trait PreferenceValue: Clone + Debug + Send + Sync + 'static {
    fn from_stored(value: StoredValue) -> Option<Self>;

    fn into_stored(self) -> StoredValue;
}

impl PreferenceValue for String {
    fn from_stored(value: StoredValue) -> Option<Self> {
        match value {
            StoredValue::Text(v) => Some(v),
            _ => None,
        }
    }

    fn into_stored(self) -> StoredValue {
        StoredValue::Text(self)
    }
}

impl PreferenceValue for i32 {
    fn from_stored(value: StoredValue) -> Option<Self> {
        value.as_int().and_then(|v| i32::try_from(v).ok())
    }

    fn into_stored(self) -> StoredValue {
        StoredValue::Int(self.into())
    }
}

impl PreferenceValue for bool {
    fn from_stored(value: StoredValue) -> Option<Self> {
        value.as_bool()
    }

    fn into_stored(self) -> StoredValue {
        StoredValue::Bool(self)
    }
}

/// A single preference saved under its own key. Loaded from the store on first access, written
/// back on every change. Failures on either side fall back to the in-memory value.
#[derive(Debug)]
pub struct Preference<T> {
    key: &'static str,
    default: T,
    cached: Option<T>,
}

impl<T: PreferenceValue> Preference<T> {
    pub fn new(key: &'static str, default: T) -> Self {
        Self {
            key,
            default,
            cached: None,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn is_loaded(&self) -> bool {
        self.cached.is_some()
    }

    pub async fn get(&mut self, store: &dyn KeyValueStore) -> T {
        if let Some(value) = &self.cached {
            return value.clone();
        }

        let value = match store.get(self.key).await {
            Ok(Some(stored)) => T::from_stored(stored.clone()).unwrap_or_else(|| {
                warn!(
                    "Stored {} has unexpected value {stored:?}, using default {:?}",
                    self.key, self.default
                );
                self.default.clone()
            }),
            Ok(None) => self.default.clone(),
            Err(e) => {
                warn!("Failed to load {}, using default: {e:?}", self.key);
                self.default.clone()
            }
        };
        debug!("Loaded {} = {value:?}", self.key);
        self.cached = Some(value.clone());
        value
    }

    pub async fn set(&mut self, store: &dyn KeyValueStore, value: T) {
        self.cached = Some(value.clone());
        if let Err(e) = store.put(self.key, value.into_stored()).await {
            error!("Failed to persist {}, keeping the value in memory only: {e:?}", self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use crate::storage::{entities::StoredValue, key_value::KeyValueStore, memory_store::MemoryStore};

    use super::Preference;

    #[tokio::test]
    async fn test_preference_lazy_load() -> Result<()> {
        let store = MemoryStore::with_values([("weekly_goal".to_string(), StoredValue::Int(120))]);
        let mut goal = Preference::new("weekly_goal", 300);
        assert!(!goal.is_loaded());

        assert_eq!(goal.get(&store).await, 120);
        assert!(goal.is_loaded());

        // Once loaded, later changes in the store made by someone else aren't picked up.
        store.put("weekly_goal", StoredValue::Int(90)).await?;
        assert_eq!(goal.get(&store).await, 120);
        Ok(())
    }

    #[tokio::test]
    async fn test_preference_wrong_kind_uses_default() {
        let store = MemoryStore::with_values([(
            "reminder_enabled".to_string(),
            StoredValue::Text("yes".into()),
        )]);
        let mut enabled = Preference::new("reminder_enabled", false);

        assert!(!enabled.get(&store).await);
    }

    #[tokio::test]
    async fn test_preference_out_of_range_int_uses_default() {
        let store = MemoryStore::with_values([(
            "weekly_goal".to_string(),
            StoredValue::Int(i64::MAX),
        )]);
        let mut goal = Preference::new("weekly_goal", 300);

        assert_eq!(goal.get(&store).await, 300);
    }

    #[tokio::test]
    async fn test_preference_set_writes_through() -> Result<()> {
        let store = MemoryStore::new();
        let mut name = Preference::new("user_name", String::new());

        name.set(&store, "Ann".to_string()).await;

        assert_eq!(store.get("user_name").await?, Some(StoredValue::Text("Ann".into())));
        assert_eq!(name.get(&store).await, "Ann");
        Ok(())
    }
}
