use super::RecordStore;
use crate::{error::StoreError, record::StudentRecord};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local table, used for local runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored item for `key`, if any.
    pub async fn get(&self, key: &str) -> Option<Value> {
        self.items.read().await.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn put(&self, key: &str, record: &StudentRecord) -> Result<(), StoreError> {
        let item = record.to_value();
        self.items.write().await.insert(key.to_string(), item);
        Ok(())
    }
}
