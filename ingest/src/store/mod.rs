//! Key-value stores a [`StudentRecord`] can be written to
//!
//! The ingestor only needs one operation from its store: a single-item
//! upsert keyed by the student id. Backends are built once per process and
//! shared read-only between invocations.

mod dynamo;
mod memory;

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

use crate::{error::StoreError, record::StudentRecord};
use async_trait::async_trait;

/// A durable table addressed by a unique key.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Write `record` under `key`, replacing any record already stored there.
    ///
    /// The write is all-or-nothing: on error nothing has been persisted.
    async fn put(&self, key: &str, record: &StudentRecord) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> RecordStore for Box<S>
where
    S: RecordStore + ?Sized,
{
    async fn put(&self, key: &str, record: &StudentRecord) -> Result<(), StoreError> {
        (**self).put(key, record).await
    }
}
